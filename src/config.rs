//! Engine configuration.

use crate::pins::{EquivalenceTable, ExclusivityRule};

/// Configuration shared by the wiring session and the validator.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Symbolic pin classes used when grading.
    pub equivalences: EquivalenceTable,
    /// Shared-rail pins that accept any number of wires.
    pub exclusivity: ExclusivityRule,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let equivalences = EquivalenceTable::standard();
        let exclusivity = ExclusivityRule::standard(&equivalences);
        Self {
            equivalences,
            exclusivity,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single alias to a class.
    ///
    /// Ground aliases also become shared pins, so a board with an extra
    /// ground header can take several wires on it.
    pub fn with_alias(mut self, symbol: &str, alias: &str) -> Self {
        self.equivalences.add_alias(symbol, alias);
        if self.equivalences.matches(alias, "GND") {
            self.exclusivity = self.exclusivity.with_shared_pin(alias);
        }
        self
    }

    /// Register or extend a whole class.
    pub fn with_class<I, S>(self, symbol: &str, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        aliases
            .into_iter()
            .fold(self, |config, alias| config.with_alias(symbol, alias.as_ref()))
    }

    /// Mark a pin name as a shared rail.
    pub fn with_shared_pin(mut self, name: &str) -> Self {
        self.exclusivity = self.exclusivity.with_shared_pin(name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_alias_becomes_shared() {
        let config = EngineConfig::new().with_alias("GND", "GND_TOP");
        assert!(config.equivalences.matches("GND_TOP", "GND"));
        assert!(!config.exclusivity.is_exclusive("GND_TOP"));
    }

    #[test]
    fn test_other_aliases_stay_exclusive() {
        let config = EngineConfig::new().with_class("RES2", ["RES2_A", "RES2_B"]);
        assert!(config.equivalences.matches("RES2_B", "RES2"));
        assert!(config.exclusivity.is_exclusive("RES2_B"));
    }

    #[test]
    fn test_shared_pin() {
        let config = EngineConfig::new().with_shared_pin("3V3");
        assert!(!config.exclusivity.is_exclusive("3v3"));
    }
}
