//! Wire value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pins::Pin;

/// Unique identifier of a wire, generated when the wire is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireId(pub Uuid);

impl WireId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WireId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A user-created connection between two pins.
///
/// `from`/`to` record the click order; grading treats wires as undirected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    pub id: WireId,
    pub from: Pin,
    pub to: Pin,
    /// Display color, e.g. `#ef4444`
    pub color: String,
}

impl Wire {
    /// Whether either endpoint is this exact pin.
    pub fn touches(&self, pin: &Pin) -> bool {
        self.from.same_point(pin) || self.to.same_point(pin)
    }
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.from, self.to)
    }
}
