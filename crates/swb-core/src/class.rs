//! Seasonal Water Balance class labels and the class-name registry.
//!
//! Ten classes come from Berghuijs et al. (2014), grouped into four families
//! that share a precipitation-timing range. `B3` is an optional extra class
//! stacked above `B1`/`B2` along the aridity axis, the way `A3` stacks above
//! `A1`/`A2`. Basins that fall in no box get the `"None"` sentinel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SwbError;

/// Tag used for points that match no class box.
pub const UNCLASSIFIED_TAG: &str = "None";

/// A Seasonal Water Balance class, or the unclassified sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SwbClass {
    A1,
    A2,
    A3,
    B1,
    B2,
    B3,
    C1,
    C2,
    D1,
    D2,
    D3,
    #[serde(rename = "None", alias = "unclassified")]
    Unclassified,
}

/// Climate family a class belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// A: precipitation out of phase with potential evaporation.
    OutOfPhase,
    /// B: snow-dominated.
    SnowDominated,
    /// C: precipitation in phase with potential evaporation.
    InPhase,
    /// D: mild seasonality, humid.
    MildHumid,
}

const BASE_CLASSES: [SwbClass; 11] = [
    SwbClass::A1,
    SwbClass::A2,
    SwbClass::A3,
    SwbClass::B1,
    SwbClass::B2,
    SwbClass::C1,
    SwbClass::C2,
    SwbClass::D1,
    SwbClass::D2,
    SwbClass::D3,
    SwbClass::Unclassified,
];

const EXTENDED_CLASSES: [SwbClass; 12] = [
    SwbClass::A1,
    SwbClass::A2,
    SwbClass::A3,
    SwbClass::B1,
    SwbClass::B2,
    SwbClass::B3,
    SwbClass::C1,
    SwbClass::C2,
    SwbClass::D1,
    SwbClass::D2,
    SwbClass::D3,
    SwbClass::Unclassified,
];

impl SwbClass {
    /// All labels in registry order, sentinel last.
    pub fn all(include_extra_class: bool) -> &'static [SwbClass] {
        if include_extra_class {
            &EXTENDED_CLASSES
        } else {
            &BASE_CLASSES
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwbClass::A1 => "A1",
            SwbClass::A2 => "A2",
            SwbClass::A3 => "A3",
            SwbClass::B1 => "B1",
            SwbClass::B2 => "B2",
            SwbClass::B3 => "B3",
            SwbClass::C1 => "C1",
            SwbClass::C2 => "C2",
            SwbClass::D1 => "D1",
            SwbClass::D2 => "D2",
            SwbClass::D3 => "D3",
            SwbClass::Unclassified => UNCLASSIFIED_TAG,
        }
    }

    /// Family of this class; `None` for the sentinel.
    pub fn family(self) -> Option<Family> {
        match self {
            SwbClass::A1 | SwbClass::A2 | SwbClass::A3 => Some(Family::OutOfPhase),
            SwbClass::B1 | SwbClass::B2 | SwbClass::B3 => Some(Family::SnowDominated),
            SwbClass::C1 | SwbClass::C2 => Some(Family::InPhase),
            SwbClass::D1 | SwbClass::D2 | SwbClass::D3 => Some(Family::MildHumid),
            SwbClass::Unclassified => None,
        }
    }

    pub fn is_classified(self) -> bool {
        self != SwbClass::Unclassified
    }
}

impl fmt::Display for SwbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwbClass {
    type Err = SwbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let class = match s.trim() {
            "A1" => SwbClass::A1,
            "A2" => SwbClass::A2,
            "A3" => SwbClass::A3,
            "B1" => SwbClass::B1,
            "B2" => SwbClass::B2,
            "B3" => SwbClass::B3,
            "C1" => SwbClass::C1,
            "C2" => SwbClass::C2,
            "D1" => SwbClass::D1,
            "D2" => SwbClass::D2,
            "D3" => SwbClass::D3,
            "None" | "unclassified" => SwbClass::Unclassified,
            other => return Err(SwbError::UnknownClass(other.to_string())),
        };
        Ok(class)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::OutOfPhase => "precipitation out of phase",
            Family::SnowDominated => "snow-dominated",
            Family::InPhase => "precipitation in phase",
            Family::MildHumid => "mild seasonality, humid",
        };
        f.write_str(name)
    }
}

/// Valid class tags in registry order, `"None"` last.
///
/// 11 entries without the extra class, 12 with it.
pub fn class_names(include_extra_class: bool) -> Vec<&'static str> {
    SwbClass::all(include_extra_class)
        .iter()
        .map(|c| c.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_sizes() {
        assert_eq!(class_names(false).len(), 11);
        assert_eq!(class_names(true).len(), 12);
    }

    #[test]
    fn registry_order_matches_literature_listing() {
        assert_eq!(
            class_names(false),
            ["A1", "A2", "A3", "B1", "B2", "C1", "C2", "D1", "D2", "D3", "None"]
        );
        assert_eq!(
            class_names(true),
            ["A1", "A2", "A3", "B1", "B2", "B3", "C1", "C2", "D1", "D2", "D3", "None"]
        );
    }

    #[test]
    fn sentinel_is_last() {
        for extra in [false, true] {
            assert_eq!(*class_names(extra).last().unwrap(), UNCLASSIFIED_TAG);
        }
    }

    #[test]
    fn tags_parse_back() {
        for &class in SwbClass::all(true) {
            assert_eq!(class.as_str().parse::<SwbClass>().unwrap(), class);
        }
        assert_eq!("unclassified".parse::<SwbClass>().unwrap(), SwbClass::Unclassified);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "E1".parse::<SwbClass>().unwrap_err();
        assert!(matches!(err, SwbError::UnknownClass(ref s) if s == "E1"));
    }

    #[test]
    fn families() {
        assert_eq!(SwbClass::A3.family(), Some(Family::OutOfPhase));
        assert_eq!(SwbClass::B3.family(), Some(Family::SnowDominated));
        assert_eq!(SwbClass::C1.family(), Some(Family::InPhase));
        assert_eq!(SwbClass::D1.family(), Some(Family::MildHumid));
        assert_eq!(SwbClass::Unclassified.family(), None);
    }

    #[test]
    fn classified_flag_and_family_names() {
        assert!(SwbClass::all(true)[..11].iter().all(|c| c.is_classified()));
        assert!(!SwbClass::Unclassified.is_classified());
        assert_eq!(Family::SnowDominated.to_string(), "snow-dominated");
        assert_eq!(SwbClass::D2.family().unwrap().to_string(), "mild seasonality, humid");
    }

    #[test]
    fn serde_uses_tags() {
        let json = serde_json::to_string(&SwbClass::Unclassified).unwrap();
        assert_eq!(json, "\"None\"");
        let c: SwbClass = serde_json::from_str("\"D2\"").unwrap();
        assert_eq!(c, SwbClass::D2);
    }
}
