//! Grading of a wiring against an exercise.
//!
//! # Algorithm
//!
//! 1. Drop every required connection with an ignored endpoint; the rest are
//!    the graded connections.
//! 2. A graded connection is correct if some wire matches it in either
//!    direction under the equivalence table, otherwise missing.
//! 3. A wire is extra if it matches no graded connection and touches no
//!    ignored pin.
//! 4. `score = round(100 * correct / graded)`, or 0 when nothing is graded.

mod result;
mod validator;

pub use result::{score, ValidationResult};
pub use validator::{validate_exercise, Validator};
