//! Exercise definitions and the catalog they are looked up in.
//!
//! A [`ProjectSpec`] is read-only input to grading: the components placed
//! on the board, the [`CorrectConnection`]s the learner must reproduce and
//! the pins that grading ignores.

mod catalog;
mod spec;

pub use catalog::{ProjectCatalog, BUILTIN_EXERCISES};
pub use spec::{ComponentPlacement, CorrectConnection, ProjectSpec};
