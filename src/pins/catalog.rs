//! Pin layouts of the supported parts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{ComponentId, Pin, PinKind, Position};

/// A pin as laid out on a part, before the part is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct PinTemplate {
    pub id: String,
    /// Offset from the component origin
    pub offset: Position,
    pub kind: Option<PinKind>,
}

impl PinTemplate {
    fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            offset: Position::new(x, y),
            kind: None,
        }
    }

    fn digital(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            kind: Some(PinKind::Digital),
            ..Self::new(id, x, y)
        }
    }

    fn analog(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            kind: Some(PinKind::Analog),
            ..Self::new(id, x, y)
        }
    }

    /// Instantiate on a placed component.
    pub fn instantiate(&self, component_id: &ComponentId, origin: Position) -> Pin {
        let mut pin = Pin::new(self.id.clone(), component_id.clone()).at(origin.offset(self.offset));
        pin.kind = self.kind;
        pin
    }
}

/// Part types that can be placed in an exercise.
///
/// Serializes as its catalog keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentKind {
    /// Arduino Uno board
    ArduinoUno,
    /// Two-terminal resistor
    Resistor,
    /// Light-emitting diode
    Led,
    /// I2C character display
    I2cScreen,
    /// HC-SR04 ultrasonic range sensor
    Hsr04,
}

impl ComponentKind {
    /// Parse a component type from its catalog keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "ARDUINO_UNO" | "ARDUINO" | "UNO" => Some(Self::ArduinoUno),
            "RESISTOR" | "RES" => Some(Self::Resistor),
            "LED" => Some(Self::Led),
            "I2C_SCREEN" | "I2C_PANTALLA" | "LCD" => Some(Self::I2cScreen),
            "HSR04" | "HC_SR04" => Some(Self::Hsr04),
            _ => None,
        }
    }

    /// Canonical catalog keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::ArduinoUno => "ARDUINO_UNO",
            Self::Resistor => "RESISTOR",
            Self::Led => "LED",
            Self::I2cScreen => "I2C_SCREEN",
            Self::Hsr04 => "HSR04",
        }
    }

    /// Pin layout of this part.
    pub fn pin_layout(&self) -> Vec<PinTemplate> {
        match self {
            Self::ArduinoUno => arduino_uno_layout(),
            Self::Resistor => vec![
                PinTemplate::new("RES1_A", -43.0, 57.0),
                PinTemplate::new("RES1_B", 43.0, 57.0),
            ],
            Self::Led => vec![
                PinTemplate::new("LED1_ANODO(+)", 43.0, 90.0),
                PinTemplate::new("LED1_CATODO(-)", 30.0, 85.0),
            ],
            Self::I2cScreen => vec![
                PinTemplate::new("i2c_SDA", -35.0, -156.0),
                PinTemplate::new("i2c_SCL", -35.0, -166.0),
                PinTemplate::new("i2c_VCC", -35.0, -146.0),
                PinTemplate::new("i2c_GND", -35.0, -136.0),
            ],
            Self::Hsr04 => vec![
                PinTemplate::new("HSR04_VCC", 150.0, 220.0),
                PinTemplate::new("HSR04_TRIG", 165.0, 220.0),
                PinTemplate::new("HSR04_ECHO", 180.0, 220.0),
                PinTemplate::new("HSR04_GND", 195.0, 220.0),
            ],
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

fn arduino_uno_layout() -> Vec<PinTemplate> {
    let mut pins = Vec::with_capacity(26);

    // Digital header, D7 down to D0
    for i in 0..8 {
        pins.push(PinTemplate::digital(
            format!("D{}", 7 - i),
            -15.0,
            243.0 + i as f64 * 12.0,
        ));
    }
    // D13 down to D8, past the header gap
    for i in 0..6 {
        pins.push(PinTemplate::digital(
            format!("D{}", 13 - i),
            -15.0,
            92.0 + (i + 6) as f64 * 12.0,
        ));
    }
    pins.push(PinTemplate::new("GND3", -15.0, 153.0));

    for i in 0..6 {
        pins.push(PinTemplate::analog(
            format!("A{}", i),
            -285.0,
            266.0 + i as f64 * 12.0,
        ));
    }

    // Power header
    pins.push(PinTemplate::new("VIN", -285.0, 242.0));
    pins.push(PinTemplate::new("GND1", -285.0, 230.0));
    pins.push(PinTemplate::new("GND2", -285.0, 219.0));
    pins.push(PinTemplate::new("5V", -285.0, 208.0));
    pins.push(PinTemplate::new("3.3V", -285.0, 196.0));

    pins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uno_layout() {
        let pins = ComponentKind::ArduinoUno.pin_layout();
        assert_eq!(pins.len(), 26);
        for d in 0..14 {
            let id = format!("D{}", d);
            let pin = pins.iter().find(|p| p.id == id).unwrap();
            assert_eq!(pin.kind, Some(PinKind::Digital));
        }
        assert!(pins.iter().any(|p| p.id == "GND3"));
        assert!(pins.iter().any(|p| p.id == "A5" && p.kind == Some(PinKind::Analog)));
    }

    #[test]
    fn test_pin_ids_unique_per_kind() {
        for kind in [
            ComponentKind::ArduinoUno,
            ComponentKind::Resistor,
            ComponentKind::Led,
            ComponentKind::I2cScreen,
            ComponentKind::Hsr04,
        ] {
            let layout = kind.pin_layout();
            let mut ids: Vec<_> = layout.iter().map(|p| p.id.as_str()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), layout.len(), "duplicate pin id on {}", kind);
        }
    }

    #[test]
    fn test_kind_serializes_as_keyword() {
        for kind in [
            ComponentKind::ArduinoUno,
            ComponentKind::Resistor,
            ComponentKind::Led,
            ComponentKind::I2cScreen,
            ComponentKind::Hsr04,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.keyword()));
            assert_eq!(serde_json::from_str::<ComponentKind>(&json).unwrap(), kind);
        }
    }

    #[test]
    fn test_instantiate_offsets_position() {
        let template = &ComponentKind::Resistor.pin_layout()[0];
        let pin = template.instantiate(&ComponentId::new("RES1"), Position::new(500.0, 90.0));
        assert_eq!(pin.component_id.as_str(), "RES1");
        assert_eq!(pin.position, Position::new(457.0, 147.0));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(ComponentKind::from_keyword("led"), Some(ComponentKind::Led));
        assert_eq!(ComponentKind::from_keyword("Arduino_Uno"), Some(ComponentKind::ArduinoUno));
        assert_eq!(ComponentKind::from_keyword("ESP32"), None);
    }
}
