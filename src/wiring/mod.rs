//! User-drawn wires and the two-click wiring protocol.
//!
//! [`WireStore`] owns the wires and enforces legality when a wire is created.
//! [`WiringSession`] drives it from pin clicks, tracks the pending pin and
//! the selected wire, and picks wire colors from a [`WirePalette`].
//! [`replay`] feeds a parsed wiring script through a session.

mod palette;
mod script;
mod session;
mod store;
mod wire;

pub use palette::{WirePalette, DEFAULT_WIRE_COLOR, PALETTE};
pub use script::{replay, RejectedWire, ReplayReport};
pub use session::{PinClick, Selection, WiringSession};
pub use store::WireStore;
pub use wire::{Wire, WireId};
