//! Exercise definitions: placed parts and the expected connections.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dsl::ExerciseDef;
use crate::error::{ChispaError, Result};
use crate::pins::{normalize, ComponentId, ComponentKind, Pin, Position};

/// One required connection, written with concrete or symbolic pin names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrectConnection {
    pub from: String,
    pub to: String,
}

impl CorrectConnection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for CorrectConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// A component placed on the exercise board.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentPlacement {
    pub kind: ComponentKind,
    pub id: ComponentId,
    pub position: Position,
}

impl ComponentPlacement {
    pub fn new(kind: ComponentKind, id: impl Into<ComponentId>, position: Position) -> Self {
        Self {
            kind,
            id: id.into(),
            position,
        }
    }

    /// All pins of this placement, positioned on the board.
    pub fn pins(&self) -> Vec<Pin> {
        self.kind
            .pin_layout()
            .iter()
            .map(|t| t.instantiate(&self.id, self.position))
            .collect()
    }

    /// Look up one pin by name. Exact names win over normalized matches.
    pub fn pin(&self, pin_id: &str) -> Option<Pin> {
        let layout = self.kind.pin_layout();
        let wanted = normalize(pin_id);
        layout
            .iter()
            .find(|t| t.id == pin_id)
            .or_else(|| layout.iter().find(|t| normalize(&t.id) == wanted))
            .map(|t| t.instantiate(&self.id, self.position))
    }
}

/// Static description of one exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSpec {
    pub id: String,
    pub name: String,
    pub description: String,
    pub components: Vec<ComponentPlacement>,
    pub correct_connections: Vec<CorrectConnection>,
    pub ignored_pins: Vec<String>,
}

impl ProjectSpec {
    /// Create an empty exercise.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            components: Vec::new(),
            correct_connections: Vec::new(),
            ignored_pins: Vec::new(),
        }
    }

    pub fn with_component(mut self, placement: ComponentPlacement) -> Self {
        self.components.push(placement);
        self
    }

    pub fn with_connection(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.correct_connections.push(CorrectConnection::new(from, to));
        self
    }

    pub fn with_ignored_pin(mut self, pin: impl Into<String>) -> Self {
        self.ignored_pins.push(pin.into());
        self
    }

    /// Build an exercise from its parsed definition and check it.
    pub fn from_def(def: ExerciseDef) -> Result<Self> {
        let mut components = Vec::with_capacity(def.components.len());
        for placement in def.components {
            let kind = ComponentKind::from_keyword(&placement.component_type).ok_or_else(|| {
                ChispaError::UnknownComponentType {
                    component_type: placement.component_type.clone(),
                    line: placement.line,
                }
            })?;
            components.push(ComponentPlacement::new(
                kind,
                placement.id,
                Position::new(placement.x, placement.y),
            ));
        }

        let spec = ProjectSpec {
            name: def.name.unwrap_or_else(|| def.id.clone()),
            id: def.id,
            description: def.description.unwrap_or_default(),
            components,
            correct_connections: def
                .connections
                .into_iter()
                .map(|c| CorrectConnection::new(c.from, c.to))
                .collect(),
            ignored_pins: def.ignored_pins,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Structural checks: unique component ids, non-empty endpoint names and
    /// no connection from a pin to itself.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(ChispaError::invalid_exercise("", "exercise id is empty"));
        }

        let mut seen = HashSet::new();
        for placement in &self.components {
            if !seen.insert(&placement.id) {
                return Err(ChispaError::DuplicateComponent {
                    exercise: self.id.clone(),
                    component: placement.id.to_string(),
                });
            }
        }

        for connection in &self.correct_connections {
            let from = normalize(&connection.from);
            let to = normalize(&connection.to);
            if from.is_empty() || to.is_empty() {
                return Err(ChispaError::invalid_exercise(
                    &self.id,
                    format!("connection '{}' has an empty endpoint", connection),
                ));
            }
            if from == to {
                return Err(ChispaError::invalid_exercise(
                    &self.id,
                    format!("connection '{}' joins a pin to itself", connection),
                ));
            }
        }

        Ok(())
    }

    /// Whether a pin name is excluded from grading.
    pub fn is_ignored(&self, pin: &str) -> bool {
        let pin = normalize(pin);
        self.ignored_pins.iter().any(|p| normalize(p) == pin)
    }

    /// Required connections that count towards the score: those with neither
    /// endpoint ignored. Recipe order is kept.
    pub fn graded_connections(&self) -> Vec<&CorrectConnection> {
        self.correct_connections
            .iter()
            .filter(|c| !self.is_ignored(&c.from) && !self.is_ignored(&c.to))
            .collect()
    }

    pub fn component(&self, id: &str) -> Option<&ComponentPlacement> {
        self.components.iter().find(|c| c.id.as_str() == id)
    }

    /// Resolve a `component:pin` reference against the placed components.
    pub fn resolve_pin(&self, component: &str, pin: &str) -> Result<Pin> {
        self.component(component)
            .and_then(|placement| placement.pin(pin))
            .ok_or_else(|| ChispaError::PinNotFound {
                component: component.to_string(),
                pin: pin.to_string(),
            })
    }
}
