//! Core value types for pins.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a placed component instance (e.g. `ARDUINO`, `RES1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Planar position on the canvas. Opaque to grading.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by another position.
    pub fn offset(&self, by: Position) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
        }
    }
}

/// Signal class of a microcontroller pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinKind {
    Digital,
    Analog,
}

/// A single connectable point on a placed component.
///
/// Pins are immutable once created. The `id` is unique within a component
/// type; `(component_id, id)` is unique within an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Pin name as printed on the part (e.g. `D13`, `LED1_ANODO(+)`)
    pub id: String,
    /// Owning component instance
    pub component_id: ComponentId,
    /// Canvas position
    pub position: Position,
    /// Optional signal class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<PinKind>,
}

impl Pin {
    /// Create a pin at the origin with no signal class.
    pub fn new(id: impl Into<String>, component_id: impl Into<ComponentId>) -> Self {
        Self {
            id: id.into(),
            component_id: component_id.into(),
            position: Position::ORIGIN,
            kind: None,
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Whether two pins denote the same physical point.
    pub fn same_point(&self, other: &Pin) -> bool {
        self.component_id == other.component_id && self.id == other.id
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.component_id, self.id)
    }
}
