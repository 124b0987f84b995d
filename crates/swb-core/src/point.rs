use serde::{Deserialize, Serialize};

/// A basin's position in the SWB parameter space.
///
/// Values are taken as given: nothing is clamped or range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationPoint {
    /// Precipitation timing index, nominally in (-1, 1].
    pub delta_p: f64,
    /// Fraction of precipitation falling as snow, nominally in [0, 1].
    pub f_s: f64,
    /// Aridity index (PET / P), nominally in [0, inf).
    pub phi: f64,
}

impl ClassificationPoint {
    pub fn new(delta_p: f64, f_s: f64, phi: f64) -> Self {
        Self { delta_p, f_s, phi }
    }
}
