//! WASM bindings for Chispa Core.
//!
//! This module exposes a wiring session to the browser canvas. The canvas
//! renders parts and wires; every pin click and delete key press is
//! forwarded here and the session decides what happens.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmWiringSession } from 'chispa_core';
//!
//! await init();
//!
//! const session = new WasmWiringSession('led-basic');
//!
//! // In the pin click handler:
//! try {
//!   const wireId = session.click_pin(pin.componentId, pin.id);
//!   if (wireId !== undefined) redraw(JSON.parse(session.wires_json()));
//! } catch (message) {
//!   showWarning(message);
//! }
//!
//! // On "Validate":
//! const result = JSON.parse(session.validate_json());
//! ```

use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::error::ChispaError;
use crate::project::{ProjectCatalog, ProjectSpec};
use crate::validate::Validator;
use crate::wiring::{PinClick, WireId, WiringSession};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_error(err: ChispaError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible wiring session bound to one exercise.
#[wasm_bindgen]
pub struct WasmWiringSession {
    spec: ProjectSpec,
    session: WiringSession,
    validator: Validator,
}

impl WasmWiringSession {
    fn from_catalog(catalog: &ProjectCatalog, exercise_id: &str) -> Result<WasmWiringSession, JsValue> {
        let spec = catalog.lookup(exercise_id).map_err(js_error)?.clone();
        let config = EngineConfig::default();
        Ok(WasmWiringSession {
            spec,
            session: WiringSession::with_config(&config),
            validator: Validator::from_config(&config),
        })
    }
}

#[wasm_bindgen]
impl WasmWiringSession {
    /// Start a session on a built-in exercise.
    ///
    /// Fails for unknown exercise ids so the page can show a not-found state.
    #[wasm_bindgen(constructor)]
    pub fn new(exercise_id: &str) -> Result<WasmWiringSession, JsValue> {
        let catalog = ProjectCatalog::builtin().map_err(js_error)?;
        Self::from_catalog(&catalog, exercise_id)
    }

    /// Start a session on an exercise from a catalog in DSL form.
    #[wasm_bindgen]
    pub fn with_catalog(catalog_dsl: &str, exercise_id: &str) -> Result<WasmWiringSession, JsValue> {
        let catalog = ProjectCatalog::from_dsl(catalog_dsl).map_err(js_error)?;
        Self::from_catalog(&catalog, exercise_id)
    }

    /// Exercise display name.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.spec.name.clone()
    }

    /// Exercise description.
    #[wasm_bindgen(getter)]
    pub fn description(&self) -> String {
        self.spec.description.clone()
    }

    /// Forward a pin click.
    ///
    /// # Returns
    /// The new wire id when the click completed a wire, `undefined` when it
    /// selected the first pin. Throws the rejection message otherwise.
    #[wasm_bindgen]
    pub fn click_pin(&mut self, component_id: &str, pin_id: &str) -> Result<Option<String>, JsValue> {
        let click = self
            .session
            .click_placed_pin(&self.spec, component_id, pin_id)
            .map_err(js_error)?;
        match click {
            PinClick::Selected(_) => Ok(None),
            PinClick::Connected(wire) => Ok(Some(wire.id.to_string())),
        }
    }

    /// Id of the pending pin, if one is selected.
    #[wasm_bindgen(getter)]
    pub fn selected_pin(&self) -> Option<String> {
        self.session.selected_pin().map(|pin| pin.id.clone())
    }

    /// Select a wire (or clear the selection with `undefined`).
    #[wasm_bindgen]
    pub fn select_wire(&mut self, wire_id: Option<String>) {
        let id = wire_id.and_then(|s| s.parse::<WireId>().ok());
        self.session.select_wire(id);
    }

    /// Delete the selected wire. Returns whether a wire was removed.
    #[wasm_bindgen]
    pub fn delete_selected_wire(&mut self) -> bool {
        self.session.delete_selected_wire().is_some()
    }

    /// Remove all wires.
    #[wasm_bindgen]
    pub fn clear_wires(&mut self) {
        self.session.clear_wires();
    }

    /// Set the color used for new wires.
    #[wasm_bindgen]
    pub fn set_color(&mut self, color: &str) {
        self.session.palette_mut().set_current(color);
    }

    /// Toggle random wire colors.
    #[wasm_bindgen]
    pub fn set_random_colors(&mut self, random: bool) {
        self.session.palette_mut().set_random(random);
    }

    /// Current wires as a JSON array.
    #[wasm_bindgen]
    pub fn wires_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.wires()).map_err(|e| js_error(e.into()))
    }

    /// Grade the current wiring. Returns the result as JSON.
    #[wasm_bindgen]
    pub fn validate_json(&self) -> Result<String, JsValue> {
        let result = self.validator.validate(&self.spec, self.session.wires());
        serde_json::to_string(&result).map_err(|e| js_error(e.into()))
    }

    /// Fraction of required connections made, in `[0, 1]`.
    #[wasm_bindgen]
    pub fn grade_fraction(&self) -> f64 {
        self.validator.validate(&self.spec, self.session.wires()).grade_fraction()
    }

    /// Whether every required connection is made and no wire is extra.
    #[wasm_bindgen]
    pub fn is_perfect(&self) -> bool {
        self.validator.validate(&self.spec, self.session.wires()).is_perfect()
    }

    /// Grade the current wiring and return only the score (0-100).
    #[wasm_bindgen]
    pub fn score(&self) -> u8 {
        self.validator.validate(&self.spec, self.session.wires()).score
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
