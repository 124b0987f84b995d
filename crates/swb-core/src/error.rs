use thiserror::Error;

use crate::class::SwbClass;

/// Errors raised while building, parsing or validating boundary tables.
///
/// Classification itself never fails; an unmatched point is
/// [`SwbClass::Unclassified`].
#[derive(Debug, Error)]
pub enum SwbError {
    #[error("class {class}: {axis} interval is empty")]
    EmptyInterval { class: SwbClass, axis: &'static str },

    #[error("a box cannot be labelled with the unclassified sentinel")]
    SentinelBox,

    #[error("boxes for {first} and {second} overlap")]
    OverlappingBoxes { first: SwbClass, second: SwbClass },

    #[error("unknown SWB class tag {0:?}")]
    UnknownClass(String),

    #[error("unknown boundary preset {0:?} (expected \"original\" or \"expanded\")")]
    MissingPreset(String),

    #[error("invalid boundary configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
