//! Declarative box tables for the SWB parameter space.
//!
//! Each class occupies one axis-aligned box in (delta_p, f_s, phi). Intervals
//! are half-open `lower < x <= upper`, so a value sitting on a shared boundary
//! belongs only to the box whose upper bound it is (phi = 0.75 is A1, not A2).
//! Two exceptions use a closed lower bound: the C family's `0 <= f_s` and D1's
//! unbounded `f_s <= 0`.
//!
//! Presets:
//!   - `Original`: Berghuijs et al. (2014), table 3 values where the paper's
//!     figure 7 and table 3 disagree. Leaves roughly half of the GAGES-II
//!     reference basins unclassified.
//!   - `Expanded`: boundaries pushed outward without creating overlap, so
//!     nearly every basin lands in a box.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::class::SwbClass;
use crate::error::SwbError;
use crate::point::ClassificationPoint;

// ── Intervals ─────────────────────────────────────────────────────────────────

/// One axis of a class box: `lower < x <= upper`, or `lower <= x <= upper`
/// when `lower_inclusive` is set. A missing bound means unbounded on that side.
///
/// Infinite upper bounds are stored as `None` so they survive JSON, which has
/// no infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
    #[serde(default)]
    pub lower_inclusive: bool,
}

fn finite_upper(upper: f64) -> Option<f64> {
    (upper != f64::INFINITY).then_some(upper)
}

impl Interval {
    /// `lower < x <= upper`
    pub fn open_closed(lower: f64, upper: f64) -> Self {
        Self { lower: Some(lower), upper: finite_upper(upper), lower_inclusive: false }
    }

    /// `lower <= x <= upper`
    pub fn closed(lower: f64, upper: f64) -> Self {
        Self { lower: Some(lower), upper: finite_upper(upper), lower_inclusive: true }
    }

    /// `x <= upper`
    pub fn at_most(upper: f64) -> Self {
        Self { lower: None, upper: finite_upper(upper), lower_inclusive: false }
    }

    /// `lower < x`
    pub fn above(lower: f64) -> Self {
        Self { lower: Some(lower), upper: None, lower_inclusive: false }
    }

    #[inline]
    fn upper_or_inf(&self) -> f64 {
        self.upper.unwrap_or(f64::INFINITY)
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        let above = match self.lower {
            None => true,
            Some(l) if self.lower_inclusive => l <= x,
            Some(l) => l < x,
        };
        above && x <= self.upper_or_inf()
    }

    /// True when no real value satisfies the interval. NaN bounds count as empty.
    pub fn is_empty(&self) -> bool {
        let upper = self.upper_or_inf();
        match self.lower {
            None => !(upper > f64::NEG_INFINITY),
            Some(l) if self.lower_inclusive => !(l <= upper),
            Some(l) => !(l < upper),
        }
    }

    pub fn intersection(&self, other: &Interval) -> Interval {
        let (lower, lower_inclusive) = match (self.lower, other.lower) {
            (None, None) => (None, false),
            (Some(l), None) => (Some(l), self.lower_inclusive),
            (None, Some(l)) => (Some(l), other.lower_inclusive),
            (Some(a), Some(b)) if a > b => (Some(a), self.lower_inclusive),
            (Some(a), Some(b)) if b > a => (Some(b), other.lower_inclusive),
            (Some(a), Some(_)) => (Some(a), self.lower_inclusive && other.lower_inclusive),
        };
        let upper = match (self.upper, other.upper) {
            (None, None) => None,
            (Some(u), None) | (None, Some(u)) => Some(u),
            (Some(a), Some(b)) => Some(a.min(b)),
        };
        Interval { lower, upper, lower_inclusive }
    }

    pub fn intersects(&self, other: &Interval) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Whether every value in `other` is also in `self`.
    pub fn covers(&self, other: &Interval) -> bool {
        if other.is_empty() {
            return true;
        }
        let lower_ok = match (self.lower, other.lower) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(s), Some(o)) => o > s || (o == s && (self.lower_inclusive || !other.lower_inclusive)),
        };
        lower_ok && other.upper_or_inf() <= self.upper_or_inf()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            None => write!(f, "(-inf, ")?,
            Some(l) if self.lower_inclusive => write!(f, "[{l}, ")?,
            Some(l) => write!(f, "({l}, ")?,
        }
        match self.upper {
            None => write!(f, "inf)"),
            Some(u) => write!(f, "{u}]"),
        }
    }
}

// ── Class boxes ───────────────────────────────────────────────────────────────

/// The region of parameter space assigned to one class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassBox {
    pub class: SwbClass,
    pub delta_p: Interval,
    pub f_s: Interval,
    pub phi: Interval,
}

impl ClassBox {
    #[inline]
    pub fn contains(&self, p: &ClassificationPoint) -> bool {
        self.delta_p.contains(p.delta_p) && self.f_s.contains(p.f_s) && self.phi.contains(p.phi)
    }

    pub fn intersects(&self, other: &ClassBox) -> bool {
        self.delta_p.intersects(&other.delta_p)
            && self.f_s.intersects(&other.f_s)
            && self.phi.intersects(&other.phi)
    }

    pub fn covers(&self, other: &ClassBox) -> bool {
        self.delta_p.covers(&other.delta_p) && self.f_s.covers(&other.f_s) && self.phi.covers(&other.phi)
    }

    fn first_empty_axis(&self) -> Option<&'static str> {
        [("delta_p", &self.delta_p), ("f_s", &self.f_s), ("phi", &self.phi)]
            .into_iter()
            .find(|(_, iv)| iv.is_empty())
            .map(|(axis, _)| axis)
    }
}

// ── Presets ───────────────────────────────────────────────────────────────────

/// Named boundary preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Literature boundaries (Berghuijs et al. 2014, table 3).
    Original,
    /// Widened, still non-overlapping boundaries.
    #[default]
    Expanded,
}

impl Preset {
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Original => "original",
            Preset::Expanded => "expanded",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = SwbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" => Ok(Preset::Original),
            "expanded" => Ok(Preset::Expanded),
            other => Err(SwbError::MissingPreset(other.to_string())),
        }
    }
}

// Boundaries shared by both presets.
const AB_PHI_LOW_MAX: f64 = 0.75;
const AB_PHI_MID_MAX: f64 = 1.75;
const A_FS_MAX: f64 = 0.45;
const B_FS_MIN: f64 = 0.45;
const C1_PHI_MIN: f64 = 0.9;
const C1_PHI_MAX: f64 = 1.5;
const D_PHI_MAX: f64 = 0.9;
const D2_FS_MAX: f64 = 0.2;
const D3_FS_MAX: f64 = 0.45;

/// The preset-specific thresholds.
#[derive(Debug, Clone, Copy)]
struct Thresholds {
    a_dp_max: f64,
    b_dp_max: f64,
    c_dp_min: f64,
    d1_dp_min: f64,
    d2_dp_min: f64,
    d3_dp_min: f64,
    d1_dp_max: f64,
    d2_dp_max: f64,
    d3_dp_max: f64,
    a1_phi_min: f64,
    b1_phi_min: f64,
    d1_phi_min: f64,
    d2_phi_min: f64,
    d3_phi_min: f64,
    a3_fs_max: f64,
    c_fs_max: f64,
    a3_phi_max: f64,
    c2_phi_max: f64,
    b3_phi_max: f64,
}

impl Thresholds {
    fn for_preset(preset: Preset, include_extra_class: bool) -> Self {
        match preset {
            Preset::Original => Self {
                a_dp_max: -0.4,
                // Figure 7 gives 0.3 and -0.4 for these two.
                c_dp_min: 0.0,
                b_dp_max: 0.0,
                d1_dp_min: -0.4,
                d2_dp_min: -0.1,
                d3_dp_min: -0.1,
                d1_dp_max: 0.3,
                d2_dp_max: 0.3,
                d3_dp_max: 0.4,
                // Table 3 gives 0.35; figure 7 shows A1 reaching down to 0.
                a1_phi_min: 0.0,
                b1_phi_min: 0.4,
                d1_phi_min: 0.5,
                d2_phi_min: 0.5,
                d3_phi_min: 0.4,
                a3_fs_max: A_FS_MAX,
                c_fs_max: 0.25,
                a3_phi_max: 5.0,
                c2_phi_max: 5.3,
                b3_phi_max: 5.3,
            },
            Preset::Expanded => Self {
                // A, C, D2 and D3 meet at a common delta_p to close the void
                // between the out-of-phase and in-phase families.
                a_dp_max: -0.2,
                c_dp_min: -0.2,
                b_dp_max: 1.0,
                d1_dp_min: -0.4,
                d2_dp_min: -0.2,
                d3_dp_min: -0.2,
                d1_dp_max: 1.0,
                d2_dp_max: 1.0,
                d3_dp_max: 1.0,
                a1_phi_min: 0.0,
                b1_phi_min: 0.0,
                d1_phi_min: 0.0,
                d2_phi_min: 0.0,
                d3_phi_min: 0.0,
                // With B3 present, A3 must stay below the B family in f_s.
                a3_fs_max: if include_extra_class { A_FS_MAX } else { 1.0 },
                // Any higher and C meets B1/B2.
                c_fs_max: 0.45,
                // Largest phi in the GAGES-II reference set is about 5.53.
                a3_phi_max: 5.6,
                c2_phi_max: 5.6,
                b3_phi_max: 5.6,
            },
        }
    }

    fn boxes(&self, include_extra_class: bool) -> Vec<ClassBox> {
        let t = self;
        let a_dp = Interval::open_closed(-1.0, t.a_dp_max);
        let b_dp = Interval::open_closed(-1.0, t.b_dp_max);
        let c_dp = Interval::open_closed(t.c_dp_min, 1.0);
        let a_fs = Interval::open_closed(0.0, A_FS_MAX);
        let b_fs = Interval::open_closed(B_FS_MIN, 1.0);
        let c_fs = Interval::closed(0.0, t.c_fs_max);

        let mut boxes = vec![
            ClassBox {
                class: SwbClass::A1,
                delta_p: a_dp,
                f_s: a_fs,
                phi: Interval::open_closed(t.a1_phi_min, AB_PHI_LOW_MAX),
            },
            ClassBox {
                class: SwbClass::A2,
                delta_p: a_dp,
                f_s: a_fs,
                phi: Interval::open_closed(AB_PHI_LOW_MAX, AB_PHI_MID_MAX),
            },
            ClassBox {
                class: SwbClass::A3,
                delta_p: a_dp,
                f_s: Interval::open_closed(0.0, t.a3_fs_max),
                phi: Interval::open_closed(AB_PHI_MID_MAX, t.a3_phi_max),
            },
            ClassBox {
                class: SwbClass::B1,
                delta_p: b_dp,
                f_s: b_fs,
                phi: Interval::open_closed(t.b1_phi_min, AB_PHI_LOW_MAX),
            },
            ClassBox {
                class: SwbClass::B2,
                delta_p: b_dp,
                f_s: b_fs,
                phi: Interval::open_closed(AB_PHI_LOW_MAX, AB_PHI_MID_MAX),
            },
        ];
        if include_extra_class {
            boxes.push(ClassBox {
                class: SwbClass::B3,
                delta_p: b_dp,
                f_s: b_fs,
                phi: Interval::open_closed(AB_PHI_MID_MAX, t.b3_phi_max),
            });
        }
        boxes.extend([
            ClassBox {
                class: SwbClass::C1,
                delta_p: c_dp,
                f_s: c_fs,
                phi: Interval::open_closed(C1_PHI_MIN, C1_PHI_MAX),
            },
            ClassBox {
                class: SwbClass::C2,
                delta_p: c_dp,
                f_s: c_fs,
                phi: Interval::open_closed(C1_PHI_MAX, t.c2_phi_max),
            },
            ClassBox {
                class: SwbClass::D1,
                delta_p: Interval::open_closed(t.d1_dp_min, t.d1_dp_max),
                f_s: Interval::at_most(0.0),
                phi: Interval::open_closed(t.d1_phi_min, D_PHI_MAX),
            },
            ClassBox {
                class: SwbClass::D2,
                delta_p: Interval::open_closed(t.d2_dp_min, t.d2_dp_max),
                f_s: Interval::open_closed(0.0, D2_FS_MAX),
                phi: Interval::open_closed(t.d2_phi_min, D_PHI_MAX),
            },
            ClassBox {
                class: SwbClass::D3,
                delta_p: Interval::open_closed(t.d3_dp_min, t.d3_dp_max),
                f_s: Interval::open_closed(D2_FS_MAX, D3_FS_MAX),
                phi: Interval::open_closed(t.d3_phi_min, D_PHI_MAX),
            },
        ]);
        boxes
    }
}

// ── Boundary configuration ────────────────────────────────────────────────────

/// An immutable, ordered table of class boxes.
///
/// Boxes are evaluated in table order (A, B, C, D for the presets). Tables are
/// expected to be disjoint; [`BoundaryConfig::validate`] checks that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryConfig {
    name: String,
    boxes: Vec<ClassBox>,
}

impl BoundaryConfig {
    /// Build a named preset, with or without the extra class B3.
    pub fn preset(preset: Preset, include_extra_class: bool) -> Self {
        let boxes = Thresholds::for_preset(preset, include_extra_class).boxes(include_extra_class);
        let name = if include_extra_class {
            format!("{preset}+B3")
        } else {
            preset.to_string()
        };
        Self { name, boxes }
    }

    /// Literature boundaries, ten classes.
    pub fn original() -> Self {
        Self::preset(Preset::Original, false)
    }

    /// Expanded boundaries, ten classes.
    pub fn expanded() -> Self {
        Self::preset(Preset::Expanded, false)
    }

    /// Shared, lazily built copy of a preset table.
    pub fn preset_table(preset: Preset, include_extra_class: bool) -> &'static BoundaryConfig {
        let base = match preset {
            Preset::Original => 0,
            Preset::Expanded => 2,
        };
        &PRESET_TABLES[base + usize::from(include_extra_class)]
    }

    /// Build a custom table. Fails on sentinel boxes, empty intervals or
    /// overlapping boxes.
    pub fn from_boxes(name: impl Into<String>, boxes: Vec<ClassBox>) -> Result<Self, SwbError> {
        let config = Self { name: name.into(), boxes };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a custom table from JSON.
    pub fn from_json(json: &str) -> Result<Self, SwbError> {
        let config: BoundaryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, SwbError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn boxes(&self) -> &[ClassBox] {
        &self.boxes
    }

    pub fn box_for(&self, class: SwbClass) -> Option<&ClassBox> {
        self.boxes.iter().find(|b| b.class == class)
    }

    pub fn includes_extra_class(&self) -> bool {
        self.box_for(SwbClass::B3).is_some()
    }

    /// Every pair of boxes sharing at least one point, in table order.
    pub fn overlapping_pairs(&self) -> Vec<(SwbClass, SwbClass)> {
        let mut pairs = Vec::new();
        for (i, a) in self.boxes.iter().enumerate() {
            for b in &self.boxes[i + 1..] {
                if a.intersects(b) {
                    pairs.push((a.class, b.class));
                }
            }
        }
        pairs
    }

    /// Reject sentinel boxes, empty intervals and overlapping boxes.
    pub fn validate(&self) -> Result<(), SwbError> {
        for b in &self.boxes {
            if !b.class.is_classified() {
                return Err(SwbError::SentinelBox);
            }
            if let Some(axis) = b.first_empty_axis() {
                return Err(SwbError::EmptyInterval { class: b.class, axis });
            }
        }
        if let Some(&(first, second)) = self.overlapping_pairs().first() {
            return Err(SwbError::OverlappingBoxes { first, second });
        }
        Ok(())
    }

    /// Whether each of `other`'s boxes lies inside this table's box for the
    /// same class. If so, every point `other` classifies gets the same label
    /// here.
    pub fn covers(&self, other: &BoundaryConfig) -> bool {
        other
            .boxes
            .iter()
            .all(|ob| self.box_for(ob.class).is_some_and(|sb| sb.covers(ob)))
    }
}

static PRESET_TABLES: LazyLock<[BoundaryConfig; 4]> = LazyLock::new(|| {
    [
        BoundaryConfig::preset(Preset::Original, false),
        BoundaryConfig::preset(Preset::Original, true),
        BoundaryConfig::preset(Preset::Expanded, false),
        BoundaryConfig::preset(Preset::Expanded, true),
    ]
});

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self::preset(Preset::Expanded, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn all_presets() -> Vec<BoundaryConfig> {
        let mut v = Vec::new();
        for preset in [Preset::Original, Preset::Expanded] {
            for extra in [false, true] {
                v.push(BoundaryConfig::preset(preset, extra));
            }
        }
        v
    }

    #[test]
    fn interval_upper_bound_is_inclusive() {
        let iv = Interval::open_closed(0.75, 1.75);
        assert!(!iv.contains(0.75));
        assert!(iv.contains(1.75));
        assert!(Interval::closed(0.0, 0.25).contains(0.0));
        assert!(Interval::at_most(0.0).contains(-3.0));
        assert!(!Interval::at_most(0.0).contains(f64::NAN));
    }

    #[test]
    fn touching_intervals_do_not_intersect() {
        let lo = Interval::open_closed(0.0, 0.75);
        let hi = Interval::open_closed(0.75, 1.75);
        assert!(!lo.intersects(&hi));
        assert!(!hi.intersects(&lo));

        // D1's f_s <= 0 touches C's 0 <= f_s at exactly zero.
        assert!(Interval::at_most(0.0).intersects(&Interval::closed(0.0, 0.45)));
        assert!(!Interval::at_most(0.0).intersects(&Interval::open_closed(0.0, 0.2)));
    }

    #[test]
    fn empty_intervals() {
        assert!(Interval::open_closed(1.0, 1.0).is_empty());
        assert!(!Interval::closed(1.0, 1.0).is_empty());
        assert!(Interval::open_closed(2.0, 1.0).is_empty());
        assert!(Interval::open_closed(f64::NAN, 1.0).is_empty());
    }

    #[test]
    fn presets_have_no_overlaps() {
        for cfg in all_presets() {
            assert!(
                cfg.overlapping_pairs().is_empty(),
                "{}: overlapping {:?}",
                cfg.name(),
                cfg.overlapping_pairs()
            );
            cfg.validate().unwrap();
        }
    }

    #[test]
    fn box_counts() {
        assert_eq!(BoundaryConfig::preset(Preset::Original, false).boxes().len(), 10);
        assert_eq!(BoundaryConfig::preset(Preset::Expanded, true).boxes().len(), 11);
    }

    #[test]
    fn expanded_covers_original() {
        for extra in [false, true] {
            let original = BoundaryConfig::preset(Preset::Original, extra);
            let expanded = BoundaryConfig::preset(Preset::Expanded, extra);
            assert!(expanded.covers(&original), "extra={extra}");
            assert!(!original.covers(&expanded), "extra={extra}");
        }
    }

    #[test]
    fn a3_snow_ceiling_depends_on_extra_class() {
        let with_b3 = BoundaryConfig::preset(Preset::Expanded, true);
        let without = BoundaryConfig::preset(Preset::Expanded, false);
        assert_relative_eq!(with_b3.box_for(SwbClass::A3).unwrap().f_s.upper.unwrap(), 0.45);
        assert_relative_eq!(without.box_for(SwbClass::A3).unwrap().f_s.upper.unwrap(), 1.0);

        let original = BoundaryConfig::preset(Preset::Original, false);
        assert_relative_eq!(original.box_for(SwbClass::A3).unwrap().f_s.upper.unwrap(), 0.45);
    }

    #[test]
    fn literature_thresholds() {
        let cfg = BoundaryConfig::original();
        let a1 = cfg.box_for(SwbClass::A1).unwrap();
        assert_relative_eq!(a1.delta_p.upper.unwrap(), -0.4);
        let c2 = cfg.box_for(SwbClass::C2).unwrap();
        assert_relative_eq!(c2.delta_p.lower.unwrap(), 0.0);
        assert_relative_eq!(c2.f_s.upper.unwrap(), 0.25);
        assert_relative_eq!(c2.phi.upper.unwrap(), 5.3);
        let d3 = cfg.box_for(SwbClass::D3).unwrap();
        assert_relative_eq!(d3.delta_p.upper.unwrap(), 0.4);
        assert_relative_eq!(d3.phi.lower.unwrap(), 0.4);
        assert!(cfg.box_for(SwbClass::B3).is_none());
    }

    #[test]
    fn default_is_expanded_with_extra_class() {
        let cfg = BoundaryConfig::default();
        assert_eq!(cfg.name(), "expanded+B3");
        assert!(cfg.includes_extra_class());
    }

    #[test]
    fn overlapping_custom_table_is_rejected() {
        let mut boxes = BoundaryConfig::original().boxes().to_vec();
        // Drop C1's phi floor into the D boxes; C1 and D1 then share f_s = 0.
        let c1 = boxes.iter_mut().find(|b| b.class == SwbClass::C1).unwrap();
        c1.phi.lower = Some(0.5);
        let err = BoundaryConfig::from_boxes("custom", boxes).unwrap_err();
        assert!(matches!(
            err,
            SwbError::OverlappingBoxes { first: SwbClass::C1, second: SwbClass::D1 }
        ));
    }

    #[test]
    fn empty_custom_box_is_rejected() {
        let mut boxes = BoundaryConfig::expanded().boxes().to_vec();
        boxes[0].phi = Interval::open_closed(0.75, 0.75);
        let err = BoundaryConfig::from_boxes("custom", boxes).unwrap_err();
        assert!(matches!(err, SwbError::EmptyInterval { class: SwbClass::A1, axis: "phi" }));
    }

    #[test]
    fn sentinel_box_is_rejected() {
        let mut boxes = BoundaryConfig::expanded().boxes().to_vec();
        boxes.push(ClassBox {
            class: SwbClass::Unclassified,
            delta_p: Interval::open_closed(-1.0, 1.0),
            f_s: Interval::open_closed(1.0, 2.0),
            phi: Interval::above(0.0),
        });
        let err = BoundaryConfig::from_boxes("custom", boxes).unwrap_err();
        assert!(matches!(err, SwbError::SentinelBox));

        let json = r#"{"name": "custom", "boxes": [{
            "class": "None",
            "delta_p": {"lower": -1.0, "upper": 1.0},
            "f_s": {"lower": 0.0, "upper": 1.0},
            "phi": {"lower": 0.0, "upper": 2.0}
        }]}"#;
        assert!(matches!(BoundaryConfig::from_json(json), Err(SwbError::SentinelBox)));
    }

    #[test]
    fn unbounded_upper_end() {
        let iv = Interval::above(5.6);
        assert!(!iv.contains(5.6));
        assert!(iv.contains(1.0e9));
        assert!(iv.contains(f64::INFINITY));
        assert!(!iv.is_empty());
        assert_eq!(Interval::open_closed(5.6, f64::INFINITY), iv);
        assert!(iv.covers(&Interval::open_closed(6.0, 10.0)));
        assert!(!Interval::open_closed(5.6, 10.0).covers(&iv));
        assert!(iv.intersects(&Interval::open_closed(0.0, 7.0)));
        assert!(!iv.intersects(&Interval::open_closed(0.0, 5.6)));
        assert_eq!(iv.to_string(), "(5.6, inf)");
    }

    #[test]
    fn json_round_trip_keeps_unbounded_upper() {
        let mut boxes = BoundaryConfig::expanded().boxes().to_vec();
        let c2 = boxes.iter_mut().find(|b| b.class == SwbClass::C2).unwrap();
        c2.phi = Interval::open_closed(1.5, f64::INFINITY);
        let cfg = BoundaryConfig::from_boxes("open-arid", boxes).unwrap();

        let json = cfg.to_json_pretty().unwrap();
        let back = BoundaryConfig::from_json(&json).unwrap();
        assert_eq!(back, cfg);
        assert_eq!(back.box_for(SwbClass::C2).unwrap().phi.upper, None);
        let arid = ClassificationPoint::new(0.5, 0.1, 40.0);
        assert!(back.box_for(SwbClass::C2).unwrap().contains(&arid));
    }

    #[test]
    fn preset_tables_are_shared() {
        for preset in [Preset::Original, Preset::Expanded] {
            for extra in [false, true] {
                let shared = BoundaryConfig::preset_table(preset, extra);
                assert_eq!(*shared, BoundaryConfig::preset(preset, extra));
                assert!(std::ptr::eq(shared, BoundaryConfig::preset_table(preset, extra)));
            }
        }
    }

    #[test]
    fn json_round_trip_keeps_unbounded_lower() {
        let cfg = BoundaryConfig::preset(Preset::Expanded, true);
        let json = cfg.to_json_pretty().unwrap();
        let back = BoundaryConfig::from_json(&json).unwrap();
        assert_eq!(back, cfg);
        assert_eq!(back.box_for(SwbClass::D1).unwrap().f_s.lower, None);
    }

    #[test]
    fn bad_json_is_reported() {
        assert!(matches!(BoundaryConfig::from_json("{"), Err(SwbError::Json(_))));
    }

    #[test]
    fn preset_names_parse() {
        assert_eq!("Original".parse::<Preset>().unwrap(), Preset::Original);
        assert_eq!("expanded".parse::<Preset>().unwrap(), Preset::Expanded);
        assert!(matches!("wide".parse::<Preset>(), Err(SwbError::MissingPreset(_))));
    }
}
