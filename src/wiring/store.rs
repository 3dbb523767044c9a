//! The authoritative set of user wires.

use log::debug;

use super::wire::{Wire, WireId};
use crate::error::{ChispaError, Result};
use crate::pins::{ExclusivityRule, Pin};

/// Ordered collection of wires (insertion order).
///
/// Invariants held after every operation:
/// - no wire joins two pins of the same component;
/// - an exclusive pin is an endpoint of at most one wire.
#[derive(Debug, Clone, Default)]
pub struct WireStore {
    wires: Vec<Wire>,
    rule: ExclusivityRule,
}

impl WireStore {
    /// Create an empty store with the standard shared-rail rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a custom exclusivity rule.
    pub fn with_rule(rule: ExclusivityRule) -> Self {
        Self {
            wires: Vec::new(),
            rule,
        }
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    pub fn len(&self) -> usize {
        self.wires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }

    pub fn get(&self, id: WireId) -> Option<&Wire> {
        self.wires.iter().find(|w| w.id == id)
    }

    /// Whether an exclusive pin already has a wire. Shared pins are never
    /// reported as used.
    pub fn is_pin_used(&self, pin: &Pin) -> bool {
        self.rule.is_exclusive(&pin.id) && self.wires.iter().any(|w| w.touches(pin))
    }

    /// Check whether a wire between `a` and `b` would be legal.
    pub fn check_connection(&self, a: &Pin, b: &Pin) -> Result<()> {
        if a.component_id == b.component_id {
            return Err(ChispaError::SameComponent {
                component: a.component_id.to_string(),
            });
        }
        if a.id == b.id {
            return Err(ChispaError::DegeneratePin { pin: a.id.clone() });
        }
        for pin in [a, b] {
            if self.is_pin_used(pin) {
                return Err(ChispaError::PinInUse {
                    pin: pin.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Append a new wire. On error the store is unchanged.
    pub fn create_wire(&mut self, a: Pin, b: Pin, color: impl Into<String>) -> Result<Wire> {
        self.check_connection(&a, &b)?;
        let wire = Wire {
            id: WireId::generate(),
            from: a,
            to: b,
            color: color.into(),
        };
        debug!("created wire {} ({})", wire.id, wire);
        self.wires.push(wire.clone());
        Ok(wire)
    }

    /// Remove a wire. Unknown ids are a no-op.
    pub fn delete_wire(&mut self, id: WireId) -> Option<Wire> {
        let idx = self.wires.iter().position(|w| w.id == id)?;
        let wire = self.wires.remove(idx);
        debug!("deleted wire {} ({})", wire.id, wire);
        Some(wire)
    }

    /// Remove all wires.
    pub fn clear(&mut self) {
        self.wires.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(id: &str, component: &str) -> Pin {
        Pin::new(id, component)
    }

    #[test]
    fn test_same_component_rejected() {
        let mut store = WireStore::new();
        let pairs = [
            ("RES1_A", "RES1_B", "RES1"),
            ("D13", "GND1", "ARDUINO"),
            ("D13", "D13", "ARDUINO"),
        ];
        for (a, b, component) in pairs {
            let err = store
                .create_wire(pin(a, component), pin(b, component), "#ef4444")
                .unwrap_err();
            assert!(matches!(err, ChispaError::SameComponent { .. }));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_degenerate_pin_rejected() {
        let mut store = WireStore::new();
        let err = store
            .create_wire(pin("D2", "ARDUINO"), pin("D2", "ARDUINO2"), "#ef4444")
            .unwrap_err();
        assert!(matches!(err, ChispaError::DegeneratePin { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_exclusive_pin_single_use() {
        let mut store = WireStore::new();
        store
            .create_wire(pin("D13", "ARDUINO"), pin("RES1_A", "RES1"), "#ef4444")
            .unwrap();
        assert!(store.is_pin_used(&pin("D13", "ARDUINO")));

        let err = store
            .create_wire(pin("D13", "ARDUINO"), pin("LED1_ANODO(+)", "LED1"), "#ef4444")
            .unwrap_err();
        assert!(matches!(err, ChispaError::PinInUse { .. }));

        // Second endpoint in use
        let err = store
            .create_wire(pin("LED1_ANODO(+)", "LED1"), pin("RES1_A", "RES1"), "#ef4444")
            .unwrap_err();
        assert!(matches!(err, ChispaError::PinInUse { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_shared_pins_take_many_wires() {
        let mut store = WireStore::new();
        for (i, component) in ["LED1", "LED2", "LED3", "LED4"].iter().enumerate() {
            store
                .create_wire(pin("GND1", "ARDUINO"), pin("LED1_CATODO(-)", component), "#000000")
                .unwrap();
            store
                .create_wire(pin("5V", "ARDUINO"), pin(&format!("VCC{}", i), component), "#ff0000")
                .unwrap();
        }
        assert_eq!(store.len(), 8);
        assert!(!store.is_pin_used(&pin("GND1", "ARDUINO")));
    }

    #[test]
    fn test_usage_is_per_component_instance() {
        let mut store = WireStore::new();
        store
            .create_wire(pin("RES1_A", "RES1"), pin("D13", "ARDUINO"), "#ef4444")
            .unwrap();
        // Same pin id on another resistor instance is still free
        store
            .create_wire(pin("RES1_A", "RES2"), pin("D12", "ARDUINO"), "#ef4444")
            .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = WireStore::new();
        let wire = store
            .create_wire(pin("D13", "ARDUINO"), pin("RES1_A", "RES1"), "#ef4444")
            .unwrap();
        assert!(store.delete_wire(wire.id).is_some());
        assert!(store.delete_wire(wire.id).is_none());
        assert!(store.delete_wire(WireId::generate()).is_none());
        assert!(!store.is_pin_used(&pin("D13", "ARDUINO")));
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut store = WireStore::new();
        let first = store
            .create_wire(pin("D13", "ARDUINO"), pin("RES1_A", "RES1"), "#ef4444")
            .unwrap();
        let second = store
            .create_wire(pin("RES1_B", "RES1"), pin("LED1_ANODO(+)", "LED1"), "#3b82f6")
            .unwrap();
        let ids: Vec<_> = store.wires().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert_ne!(first.id, second.id);
        assert_eq!(store.get(second.id).unwrap().color, "#3b82f6");
    }
}
