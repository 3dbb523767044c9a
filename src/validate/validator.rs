//! Comparison of user wires against an exercise.

use log::debug;

use super::result::{score, ValidationResult};
use crate::config::EngineConfig;
use crate::pins::EquivalenceTable;
use crate::project::{CorrectConnection, ProjectCatalog, ProjectSpec};
use crate::wiring::Wire;

/// Grades wirings using an equivalence table.
///
/// Matching is undirected and many-to-one: one wire may satisfy several
/// requirements (for example every requirement phrased as `GND`).
#[derive(Debug, Clone)]
pub struct Validator {
    equivalences: EquivalenceTable,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(EquivalenceTable::standard())
    }
}

impl Validator {
    pub fn new(equivalences: EquivalenceTable) -> Self {
        Self { equivalences }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.equivalences.clone())
    }

    /// Whether a wire satisfies a required connection in either direction.
    pub fn satisfies(&self, wire: &Wire, connection: &CorrectConnection) -> bool {
        self.equivalences.matches_pair(
            &wire.from.id,
            &wire.to.id,
            &connection.from,
            &connection.to,
        )
    }

    /// Grade `wires` against `spec`.
    pub fn validate(&self, spec: &ProjectSpec, wires: &[Wire]) -> ValidationResult {
        let graded = spec.graded_connections();

        let mut correct = Vec::new();
        let mut missing = Vec::new();
        for connection in &graded {
            if wires.iter().any(|w| self.satisfies(w, connection)) {
                correct.push((*connection).clone());
            } else {
                missing.push((*connection).clone());
            }
        }

        let extras: Vec<Wire> = wires
            .iter()
            .filter(|w| !self.touches_ignored(spec, w))
            .filter(|w| !graded.iter().any(|c| self.satisfies(w, c)))
            .cloned()
            .collect();

        let result = ValidationResult {
            score: score(correct.len(), graded.len()),
            total: graded.len(),
            correct,
            missing,
            extras,
        };
        debug!(
            "graded '{}': {}/{} correct, {} extra, score {}",
            spec.id,
            result.correct.len(),
            result.total,
            result.extras.len(),
            result.score
        );
        result
    }

    /// Grade against an exercise looked up by id. Unknown ids yield
    /// [`ValidationResult::empty`].
    pub fn validate_exercise(
        &self,
        catalog: &ProjectCatalog,
        exercise_id: &str,
        wires: &[Wire],
    ) -> ValidationResult {
        match catalog.lookup(exercise_id) {
            Ok(spec) => self.validate(spec, wires),
            Err(_) => ValidationResult::empty(),
        }
    }

    fn touches_ignored(&self, spec: &ProjectSpec, wire: &Wire) -> bool {
        spec.ignored_pins.iter().any(|ignored| {
            self.equivalences.matches(&wire.from.id, ignored)
                || self.equivalences.matches(&wire.to.id, ignored)
        })
    }
}

/// Grade with the standard equivalence classes.
pub fn validate_exercise(catalog: &ProjectCatalog, exercise_id: &str, wires: &[Wire]) -> ValidationResult {
    Validator::default().validate_exercise(catalog, exercise_id, wires)
}
