//! Pin identity, equivalence classes and board layouts.
//!
//! Every pin name the engine compares goes through [`normalize`] first.
//! Symbolic requirement names such as `GND` are resolved through an
//! [`EquivalenceTable`], and [`ExclusivityRule`] decides which pins may host
//! more than one wire.

mod catalog;
mod equivalence;
mod exclusivity;
mod types;

pub use catalog::{ComponentKind, PinTemplate};
pub use equivalence::{normalize, EquivalenceTable};
pub use exclusivity::ExclusivityRule;
pub use types::*;
