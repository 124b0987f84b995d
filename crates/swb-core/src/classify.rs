//! Point classification against a boundary table, plus batch and census
//! helpers for scoring whole basin sets.

use std::fmt;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

#[cfg(feature = "threading")]
use rayon::prelude::*;

use crate::boundaries::{BoundaryConfig, Preset};
use crate::class::SwbClass;
use crate::point::ClassificationPoint;

/// Outcome of classifying one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub point: ClassificationPoint,
    pub class: SwbClass,
    /// False when no box contains the point (`class` is then the sentinel).
    pub matched: bool,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matched {
            write!(f, "SWB class = {}", self.class)
        } else {
            write!(
                f,
                "No matching SWB class for: d_p = {}, f_s = {}, phi = {}",
                self.point.delta_p, self.point.f_s, self.point.phi
            )
        }
    }
}

/// Classify a point against a boundary table.
///
/// Boxes are scanned in table order and the last containing box wins. Preset
/// tables are disjoint, so at most one box ever matches.
pub fn classify(point: ClassificationPoint, config: &BoundaryConfig) -> Classification {
    match config.boxes().iter().rev().find(|b| b.contains(&point)) {
        Some(b) => {
            trace!("{point:?} -> {}", b.class);
            Classification { point, class: b.class, matched: true }
        }
        None => Classification { point, class: SwbClass::Unclassified, matched: false },
    }
}

/// Flat entry point taking the three indices and the preset flags directly.
///
/// Diagnostics go to the `log` facade at info level; installing a logger is
/// up to the caller.
pub fn classify_swb(
    delta_p: f64,
    f_s: f64,
    phi: f64,
    use_original: bool,
    include_extra_class: bool,
    emit_diagnostics: bool,
) -> SwbClass {
    let preset = if use_original { Preset::Original } else { Preset::Expanded };
    let config = BoundaryConfig::preset_table(preset, include_extra_class);
    let result = classify(ClassificationPoint::new(delta_p, f_s, phi), config);
    if emit_diagnostics {
        info!("{result}");
    }
    result.class
}

/// A classifier bound to one boundary table.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: BoundaryConfig,
    emit_diagnostics: bool,
}

impl Classifier {
    pub fn new(config: BoundaryConfig) -> Self {
        debug!("classifier using {} boundaries ({} boxes)", config.name(), config.boxes().len());
        Self { config, emit_diagnostics: false }
    }

    pub fn from_preset(preset: Preset, include_extra_class: bool) -> Self {
        Self::new(BoundaryConfig::preset(preset, include_extra_class))
    }

    /// Log one diagnostic line per classified point.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.emit_diagnostics = enabled;
        self
    }

    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    pub fn classify(&self, point: ClassificationPoint) -> Classification {
        let result = classify(point, &self.config);
        if self.emit_diagnostics {
            info!("{result}");
        }
        result
    }

    /// Every class whose box contains `point`, in table order.
    pub fn matching_classes(&self, point: ClassificationPoint) -> Vec<SwbClass> {
        self.config
            .boxes()
            .iter()
            .filter(|b| b.contains(&point))
            .map(|b| b.class)
            .collect()
    }

    /// Classify many points; output order follows input order.
    pub fn classify_batch(&self, points: &[ClassificationPoint]) -> Vec<Classification> {
        #[cfg(feature = "threading")]
        {
            points.par_iter().map(|&p| self.classify(p)).collect()
        }
        #[cfg(not(feature = "threading"))]
        {
            points.iter().map(|&p| self.classify(p)).collect()
        }
    }

    pub fn census(&self, points: &[ClassificationPoint]) -> Census {
        Census::from_classifications(&self.config, &self.classify_batch(points))
    }
}

// ── Census ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCount {
    pub class: SwbClass,
    pub count: usize,
}

/// Per-class tallies for a set of classified basins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Census {
    pub config: String,
    /// Registry order, sentinel last.
    pub counts: Vec<ClassCount>,
    pub total: usize,
    pub unclassified: usize,
}

impl Census {
    pub fn from_classifications(config: &BoundaryConfig, results: &[Classification]) -> Self {
        let mut counts: Vec<ClassCount> = SwbClass::all(config.includes_extra_class())
            .iter()
            .map(|&class| ClassCount { class, count: 0 })
            .collect();
        for r in results {
            if let Some(c) = counts.iter_mut().find(|c| c.class == r.class) {
                c.count += 1;
            }
        }
        let unclassified = results.iter().filter(|r| !r.class.is_classified()).count();
        Self {
            config: config.name().to_string(),
            counts,
            total: results.len(),
            unclassified,
        }
    }

    pub fn count(&self, class: SwbClass) -> usize {
        self.counts.iter().find(|c| c.class == class).map_or(0, |c| c.count)
    }

    /// Fraction of basins that received a real class. 0 for an empty set.
    pub fn classified_fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.total - self.unclassified) as f64 / self.total as f64
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SWB census ({} boundaries)", self.config)?;
        for c in &self.counts {
            writeln!(f, "  {:<4} {:>6}", c.class.as_str(), c.count)?;
        }
        write!(
            f,
            "  {} of {} basins unclassified ({:.1}% classified)",
            self.unclassified,
            self.total,
            self.classified_fraction() * 100.0
        )
    }
}
