//! Which pins may host more than one wire.

use std::collections::BTreeSet;

use super::equivalence::{normalize, EquivalenceTable};

/// Allow-list of shared-rail pin names.
///
/// Pins on the list are non-exclusive (any number of wires may terminate on
/// them); every other pin is exclusive and accepts at most one wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusivityRule {
    shared: BTreeSet<String>,
}

impl ExclusivityRule {
    /// Rule with no shared pins at all.
    pub fn all_exclusive() -> Self {
        Self {
            shared: BTreeSet::new(),
        }
    }

    /// The 5V supply names, `GND`, and every alias of the table's `GND` class.
    pub fn standard(equivalences: &EquivalenceTable) -> Self {
        let mut rule = Self::all_exclusive()
            .with_shared_pin("VCC5V")
            .with_shared_pin("5V")
            .with_shared_pin("+5V")
            .with_shared_pin("GND");
        if let Some(grounds) = equivalences.aliases("GND") {
            rule.shared.extend(grounds.iter().cloned());
        }
        rule
    }

    pub fn with_shared_pin(mut self, name: &str) -> Self {
        self.shared.insert(normalize(name));
        self
    }

    /// Whether a pin name may carry only one wire.
    pub fn is_exclusive(&self, pin_id: &str) -> bool {
        !self.shared.contains(&normalize(pin_id))
    }
}

impl Default for ExclusivityRule {
    fn default() -> Self {
        Self::standard(&EquivalenceTable::standard())
    }
}
