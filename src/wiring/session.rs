//! Two-click wiring protocol.

use log::{debug, warn};

use super::palette::WirePalette;
use super::store::WireStore;
use super::wire::{Wire, WireId};
use crate::config::EngineConfig;
use crate::error::{ChispaError, Result};
use crate::pins::Pin;
use crate::project::ProjectSpec;

/// Pin-selection state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    /// No pending pin.
    #[default]
    Idle,
    /// First pin clicked, waiting for the second.
    PinSelected(Pin),
}

/// Successful outcome of a pin click.
#[derive(Debug, Clone, PartialEq)]
pub enum PinClick {
    /// The pin became the pending endpoint.
    Selected(Pin),
    /// The click completed a wire.
    Connected(Wire),
}

/// Interaction state of one learner working on one board.
///
/// Every rejected click leaves the session in a consistent state: either
/// unchanged (first click on a used pin) or back to [`Selection::Idle`].
#[derive(Debug, Clone, Default)]
pub struct WiringSession {
    store: WireStore,
    selection: Selection,
    selected_wire: Option<WireId>,
    palette: WirePalette,
}

impl WiringSession {
    /// Create a session with the standard shared-rail rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session using the exclusivity rule from `config`.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            store: WireStore::with_rule(config.exclusivity.clone()),
            ..Self::default()
        }
    }

    /// Handle a click on `pin`.
    pub fn click_pin(&mut self, pin: Pin) -> Result<PinClick> {
        match std::mem::take(&mut self.selection) {
            Selection::Idle => {
                if self.store.is_pin_used(&pin) {
                    warn!("pin {} is already connected", pin);
                    return Err(ChispaError::PinInUse {
                        pin: pin.to_string(),
                    });
                }
                debug!("selected pin {}", pin);
                self.selection = Selection::PinSelected(pin.clone());
                Ok(PinClick::Selected(pin))
            }
            Selection::PinSelected(first) => {
                let color = self.palette.next_color();
                match self.store.create_wire(first, pin, color) {
                    Ok(wire) => Ok(PinClick::Connected(wire)),
                    Err(err) => {
                        warn!("wire rejected: {}", err);
                        Err(err)
                    }
                }
            }
        }
    }

    /// Resolve `component_id`/`pin_id` against the parts placed in `spec`,
    /// then click that pin.
    ///
    /// An unresolvable pin is a rejected click and drops the pending pin.
    pub fn click_placed_pin(&mut self, spec: &ProjectSpec, component_id: &str, pin_id: &str) -> Result<PinClick> {
        match spec.resolve_pin(component_id, pin_id) {
            Ok(pin) => self.click_pin(pin),
            Err(err) => {
                warn!("click rejected: {}", err);
                self.cancel_selection();
                Err(err)
            }
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_pin(&self) -> Option<&Pin> {
        match &self.selection {
            Selection::PinSelected(pin) => Some(pin),
            Selection::Idle => None,
        }
    }

    /// Drop the pending pin, if any.
    pub fn cancel_selection(&mut self) {
        self.selection = Selection::Idle;
    }

    /// Select a wire for deletion, or clear the wire selection.
    ///
    /// Unknown ids clear the selection.
    pub fn select_wire(&mut self, id: Option<WireId>) {
        self.selected_wire = id.filter(|id| self.store.get(*id).is_some());
    }

    pub fn selected_wire(&self) -> Option<WireId> {
        self.selected_wire
    }

    /// Delete a wire. Clears the wire selection if it pointed at this wire;
    /// pin selection is not touched.
    pub fn delete_wire(&mut self, id: WireId) -> Option<Wire> {
        if self.selected_wire == Some(id) {
            self.selected_wire = None;
        }
        self.store.delete_wire(id)
    }

    /// Delete the selected wire (the delete-key signal).
    pub fn delete_selected_wire(&mut self) -> Option<Wire> {
        let id = self.selected_wire?;
        self.delete_wire(id)
    }

    /// Remove every wire.
    pub fn clear_wires(&mut self) {
        self.store.clear();
        self.selected_wire = None;
    }

    pub fn wires(&self) -> &[Wire] {
        self.store.wires()
    }

    pub fn palette(&self) -> &WirePalette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut WirePalette {
        &mut self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(id: &str, component: &str) -> Pin {
        Pin::new(id, component)
    }

    fn connect(session: &mut WiringSession, a: Pin, b: Pin) -> Wire {
        session.click_pin(a).unwrap();
        match session.click_pin(b).unwrap() {
            PinClick::Connected(wire) => wire,
            other => panic!("expected a wire, got {:?}", other),
        }
    }

    #[test]
    fn test_two_clicks_make_a_wire() {
        let mut session = WiringSession::new();
        let first = session.click_pin(pin("D13", "ARDUINO")).unwrap();
        assert_eq!(first, PinClick::Selected(pin("D13", "ARDUINO")));
        assert_eq!(session.selected_pin(), Some(&pin("D13", "ARDUINO")));

        let second = session.click_pin(pin("RES1_A", "RES1")).unwrap();
        assert!(matches!(second, PinClick::Connected(_)));
        assert_eq!(session.selection(), &Selection::Idle);
        assert_eq!(session.wires().len(), 1);
        assert_eq!(session.wires()[0].color, "#ef4444");
    }

    #[test]
    fn test_same_component_clears_selection() {
        let mut session = WiringSession::new();
        session.click_pin(pin("RES1_A", "RES1")).unwrap();
        let err = session.click_pin(pin("RES1_B", "RES1")).unwrap_err();
        assert!(matches!(err, ChispaError::SameComponent { .. }));
        assert_eq!(session.selection(), &Selection::Idle);
        assert!(session.wires().is_empty());
    }

    #[test]
    fn test_clicking_same_pin_twice_clears_selection() {
        let mut session = WiringSession::new();
        session.click_pin(pin("D13", "ARDUINO")).unwrap();
        assert!(session.click_pin(pin("D13", "ARDUINO")).is_err());
        assert_eq!(session.selection(), &Selection::Idle);
        assert!(session.wires().is_empty());
    }

    #[test]
    fn test_used_pin_rejected_on_first_click() {
        let mut session = WiringSession::new();
        connect(&mut session, pin("D13", "ARDUINO"), pin("RES1_A", "RES1"));

        let err = session.click_pin(pin("D13", "ARDUINO")).unwrap_err();
        assert!(matches!(err, ChispaError::PinInUse { .. }));
        assert_eq!(session.selection(), &Selection::Idle);
    }

    #[test]
    fn test_used_pin_rejected_on_second_click() {
        let mut session = WiringSession::new();
        connect(&mut session, pin("D13", "ARDUINO"), pin("RES1_A", "RES1"));

        session.click_pin(pin("LED1_ANODO(+)", "LED1")).unwrap();
        let err = session.click_pin(pin("RES1_A", "RES1")).unwrap_err();
        assert!(matches!(err, ChispaError::PinInUse { .. }));
        assert_eq!(session.selection(), &Selection::Idle);
        assert_eq!(session.wires().len(), 1);
    }

    fn led_basic() -> ProjectSpec {
        crate::project::ProjectCatalog::builtin()
            .unwrap()
            .get("led-basic")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_click_placed_pins() {
        let spec = led_basic();
        let mut session = WiringSession::new();
        session.click_placed_pin(&spec, "ARDUINO", "D13").unwrap();
        let click = session.click_placed_pin(&spec, "RES1", "RES1_A").unwrap();
        assert!(matches!(click, PinClick::Connected(_)));
        assert_eq!(session.wires()[0].from.component_id.as_str(), "ARDUINO");
    }

    #[test]
    fn test_unresolved_pin_clears_selection() {
        let spec = led_basic();
        let mut session = WiringSession::new();
        session.click_placed_pin(&spec, "ARDUINO", "D13").unwrap();

        let err = session.click_placed_pin(&spec, "LED1", "NOPE").unwrap_err();
        assert!(matches!(err, ChispaError::PinNotFound { .. }));
        assert_eq!(session.selection(), &Selection::Idle);

        let err = session.click_placed_pin(&spec, "MOTOR", "M1").unwrap_err();
        assert!(matches!(err, ChispaError::PinNotFound { .. }));
        assert!(session.wires().is_empty());
    }

    #[test]
    fn test_ground_accepts_many_wires() {
        let mut session = WiringSession::new();
        connect(&mut session, pin("GND1", "ARDUINO"), pin("LED1_CATODO(-)", "LED1"));
        connect(&mut session, pin("GND1", "ARDUINO"), pin("i2c_GND", "LCD"));
        connect(&mut session, pin("HSR04_GND", "SONAR"), pin("GND1", "ARDUINO"));
        assert_eq!(session.wires().len(), 3);
    }

    #[test]
    fn test_delete_selected_wire() {
        let mut session = WiringSession::new();
        let wire = connect(&mut session, pin("D13", "ARDUINO"), pin("RES1_A", "RES1"));
        session.select_wire(Some(wire.id));
        assert_eq!(session.selected_wire(), Some(wire.id));

        let deleted = session.delete_selected_wire().unwrap();
        assert_eq!(deleted.id, wire.id);
        assert_eq!(session.selected_wire(), None);
        assert!(session.wires().is_empty());
        assert!(session.delete_selected_wire().is_none());
    }

    #[test]
    fn test_delete_keeps_pin_selection() {
        let mut session = WiringSession::new();
        let wire = connect(&mut session, pin("D13", "ARDUINO"), pin("RES1_A", "RES1"));
        session.select_wire(Some(wire.id));
        session.click_pin(pin("D12", "ARDUINO")).unwrap();

        session.delete_wire(wire.id);
        assert_eq!(session.selected_pin(), Some(&pin("D12", "ARDUINO")));
        assert_eq!(session.selected_wire(), None);
    }

    #[test]
    fn test_deleting_other_wire_keeps_wire_selection() {
        let mut session = WiringSession::new();
        let a = connect(&mut session, pin("D13", "ARDUINO"), pin("RES1_A", "RES1"));
        let b = connect(&mut session, pin("D12", "ARDUINO"), pin("LED1_ANODO(+)", "LED1"));
        session.select_wire(Some(a.id));
        session.delete_wire(b.id);
        assert_eq!(session.selected_wire(), Some(a.id));
    }

    #[test]
    fn test_freed_pin_can_be_reused() {
        let mut session = WiringSession::new();
        let wire = connect(&mut session, pin("D13", "ARDUINO"), pin("RES1_A", "RES1"));
        session.delete_wire(wire.id);
        connect(&mut session, pin("D13", "ARDUINO"), pin("RES1_B", "RES1"));
        assert_eq!(session.wires().len(), 1);
    }

    #[test]
    fn test_clear_wires() {
        let mut session = WiringSession::new();
        let wire = connect(&mut session, pin("D13", "ARDUINO"), pin("RES1_A", "RES1"));
        session.select_wire(Some(wire.id));
        session.clear_wires();
        assert!(session.wires().is_empty());
        assert_eq!(session.selected_wire(), None);
    }

    #[test]
    fn test_select_unknown_wire_clears_selection() {
        let mut session = WiringSession::new();
        session.select_wire(Some(WireId::generate()));
        assert_eq!(session.selected_wire(), None);
    }

    #[test]
    fn test_palette_color_applied() {
        let mut session = WiringSession::new();
        session.palette_mut().set_current("#10b981");
        let wire = connect(&mut session, pin("D13", "ARDUINO"), pin("RES1_A", "RES1"));
        assert_eq!(wire.color, "#10b981");
    }

    #[test]
    fn test_config_rule_applies() {
        let config = EngineConfig::new().with_shared_pin("3.3V");
        let mut session = WiringSession::with_config(&config);
        connect(&mut session, pin("3.3V", "ARDUINO"), pin("i2c_VCC", "LCD"));
        connect(&mut session, pin("3.3V", "ARDUINO"), pin("HSR04_VCC", "SONAR"));
        assert_eq!(session.wires().len(), 2);
    }
}
