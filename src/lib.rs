//! # Chispa Core
//!
//! Wiring model and grading engine for virtual electronics exercises.
//!
//! A learner draws wires between pins of simulated parts (an Arduino board,
//! resistors, LEDs, sensors). This library decides which wires are legal and
//! grades the finished wiring against an exercise recipe.
//!
//! This library provides:
//! - Pin-name normalization and symbolic pin classes (`GND`, `3V3`, `RES1`)
//! - A wire store enforcing one wire per exclusive pin and no same-part wires
//! - A two-click wiring session (`Idle` / `PinSelected`)
//! - A validator producing a score plus correct / missing / extra sets
//! - A text format for exercise catalogs and wiring scripts
//!
//! ## Architecture
//!
//! - [`pins`] - Pin types, normalization, equivalence classes, part layouts
//! - [`wiring`] - Wires, the wire store and the wiring session
//! - [`project`] - Exercise definitions and the catalog
//! - [`validate`] - Grading
//! - [`dsl`] - Parser for catalog and wiring files
//! - [`config`] - Engine configuration
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! chispa check led-basic my-wiring.wir
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmWiringSession } from 'chispa_core';
//!
//! const session = new WasmWiringSession('led-basic');
//! session.click_pin('ARDUINO', 'D13');
//! session.click_pin('RES1', 'RES1_A');
//! console.log(session.score());
//! ```
//!
//! ## Grading Model
//!
//! Wires are undirected and requirements name nets rather than directed
//! edges, so one wire to a ground pin satisfies every requirement phrased
//! as `GND`. Extras are computed independently of missing connections.

pub mod config;
pub mod dsl;
pub mod error;
pub mod pins;
pub mod project;
pub mod validate;
pub mod wiring;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use error::{ChispaError, Result};
pub use pins::{normalize, EquivalenceTable, Pin};
pub use project::{CorrectConnection, ProjectCatalog, ProjectSpec};
pub use validate::{validate_exercise, ValidationResult, Validator};
pub use wiring::{Wire, WireId, WireStore, WiringSession};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmWiringSession;
