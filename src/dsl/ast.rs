//! Abstract Syntax Tree types for exercise catalogs and wiring scripts.

use crate::error::{ChispaError, Result};

/// A parsed exercise catalog file.
#[derive(Debug, Clone, Default)]
pub struct CatalogAst {
    /// Exercises in file order
    pub exercises: Vec<ExerciseDef>,
}

/// One `.exercise` block.
#[derive(Debug, Clone)]
pub struct ExerciseDef {
    /// Exercise identifier used for lookup
    pub id: String,
    /// Display name (defaults to the id)
    pub name: Option<String>,
    /// Display description
    pub description: Option<String>,
    /// Placed components
    pub components: Vec<PlacementDef>,
    /// Required connections
    pub connections: Vec<ConnectionDef>,
    /// Pins excluded from grading
    pub ignored_pins: Vec<String>,
    /// Source line of the `.exercise` directive
    pub line: usize,
}

impl ExerciseDef {
    pub fn new(id: impl Into<String>, line: usize) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            components: Vec::new(),
            connections: Vec::new(),
            ignored_pins: Vec::new(),
            line,
        }
    }
}

/// `.component <TYPE> <ID> <X> <Y>`
#[derive(Debug, Clone)]
pub struct PlacementDef {
    pub component_type: String,
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub line: usize,
}

/// `.connect <PIN> <PIN>`
#[derive(Debug, Clone)]
pub struct ConnectionDef {
    pub from: String,
    pub to: String,
    pub line: usize,
}

/// A parsed wiring script.
#[derive(Debug, Clone, Default)]
pub struct WiringAst {
    /// Steps in file order
    pub steps: Vec<WiringStep>,
}

/// One line of a wiring script.
#[derive(Debug, Clone, PartialEq)]
pub enum WiringStep {
    /// `.color <COLOR>`: set the current wire color
    Color(String),
    /// `.random-colors on|off`
    RandomColors(bool),
    /// `.wire <COMPONENT:PIN> <COMPONENT:PIN> [COLOR]`
    Wire(WireDef),
}

/// A wire drawn by the script.
#[derive(Debug, Clone, PartialEq)]
pub struct WireDef {
    pub from: PinRef,
    pub to: PinRef,
    /// Color override for this wire only
    pub color: Option<String>,
    pub line: usize,
}

/// `COMPONENT:PIN`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinRef {
    pub component: String,
    pub pin: String,
}

impl PinRef {
    /// Split a `COMPONENT:PIN` reference at the first colon.
    pub fn parse(text: &str, line: usize) -> Result<Self> {
        match text.split_once(':') {
            Some((component, pin)) if !component.is_empty() && !pin.is_empty() => Ok(Self {
                component: component.to_string(),
                pin: pin.to_string(),
            }),
            _ => Err(ChispaError::parse(
                line,
                format!("expected COMPONENT:PIN, got '{}'", text),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_ref() {
        let r = PinRef::parse("LED1:LED1_ANODO(+)", 1).unwrap();
        assert_eq!(r.component, "LED1");
        assert_eq!(r.pin, "LED1_ANODO(+)");
        assert!(PinRef::parse("D13", 1).is_err());
        assert!(PinRef::parse(":D13", 1).is_err());
    }
}
