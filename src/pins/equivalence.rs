//! Pin-name normalization and equivalence classes.

use std::collections::{BTreeMap, BTreeSet};

/// Canonical form of a pin name: whitespace, `+` and `-` removed, upper-cased.
///
/// `LED1_ANODO (+)` and `led1_anodo()` both normalize to `LED1_ANODO()`.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '+' && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Named groups of concrete pin names that satisfy one symbolic requirement.
///
/// A requirement written as `GND` is met by any pin whose normalized name is
/// `GND` itself or one of the aliases registered under `GND`. Symbols and
/// aliases are stored normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquivalenceTable {
    classes: BTreeMap<String, BTreeSet<String>>,
}

impl EquivalenceTable {
    /// Create an empty table (every comparison is an exact match).
    pub fn new() -> Self {
        Self::default()
    }

    /// The classes shipped with the built-in boards: the Uno's three ground
    /// pins, the 3.3V rail labels and the terminals of the first resistor.
    pub fn standard() -> Self {
        Self::new()
            .with_class("GND", ["GND1", "GND2", "GND3"])
            .with_class("3V3", ["3V3_1", "3V3_2", "3V3_3", "3.3V"])
            .with_class("RES1", ["RES1_A", "RES1_B"])
    }

    /// Register (or extend) a class.
    pub fn with_class<I, S>(mut self, symbol: &str, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let members = self.classes.entry(normalize(symbol)).or_default();
        members.extend(aliases.into_iter().map(|a| normalize(a.as_ref())));
        self
    }

    /// Add one alias to a class, creating the class if needed.
    pub fn add_alias(&mut self, symbol: &str, alias: &str) {
        self.classes
            .entry(normalize(symbol))
            .or_default()
            .insert(normalize(alias));
    }

    /// Aliases of a class, if registered.
    pub fn aliases(&self, symbol: &str) -> Option<&BTreeSet<String>> {
        self.classes.get(&normalize(symbol))
    }

    /// Whether a candidate pin name satisfies a required name.
    ///
    /// Both arguments are normalized first. A class symbol matches itself and
    /// its aliases; anything else must match exactly.
    pub fn matches(&self, candidate: &str, required: &str) -> bool {
        let candidate = normalize(candidate);
        let required = normalize(required);
        if candidate == required {
            return true;
        }
        self.classes
            .get(&required)
            .is_some_and(|aliases| aliases.contains(&candidate))
    }

    /// Undirected pair match: `{a, b}` against `{x, y}` in either orientation.
    pub fn matches_pair(&self, a: &str, b: &str, x: &str, y: &str) -> bool {
        (self.matches(a, x) && self.matches(b, y)) || (self.matches(a, y) && self.matches(b, x))
    }
}
