//! Seasonal Water Balance (SWB) classification of watersheds.
//!
//! A basin is described by three indices: precipitation timing `delta_p`,
//! snow fraction `f_s` and aridity `phi`. Each SWB class is an axis-aligned
//! box in that space (Berghuijs et al. 2014). Classification is a pure
//! containment test against a [`BoundaryConfig`] table; points that fall in no
//! box are [`SwbClass::Unclassified`], which is an ordinary result.

pub mod boundaries;
pub mod class;
pub mod classify;
pub mod error;
pub mod point;

pub use boundaries::{BoundaryConfig, ClassBox, Interval, Preset};
pub use class::{class_names, Family, SwbClass, UNCLASSIFIED_TAG};
pub use classify::{classify, classify_swb, Census, ClassCount, Classification, Classifier};
pub use error::SwbError;
pub use point::ClassificationPoint;
