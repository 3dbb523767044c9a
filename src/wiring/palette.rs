//! Wire color selection.

use rand::seq::SliceRandom;

/// Color used for new wires until the user picks another.
pub const DEFAULT_WIRE_COLOR: &str = "#ef4444";

/// Colors offered by the picker and used in random mode.
pub const PALETTE: [&str; 20] = [
    "#ef4444", "#3b82f6", "#10b981", "#f97316", "#8b5cf6", "#eab308", "#ec4899", "#06b6d4",
    "#84cc16", "#6366f1", "#a16207", "#6b7280", "#f59e0b", "#14b8a6", "#8b5a2b", "#dc2626",
    "#7c3aed", "#059669", "#ea580c", "#be185d",
];

/// Current wire color, or random picks from [`PALETTE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirePalette {
    current: String,
    random: bool,
}

impl Default for WirePalette {
    fn default() -> Self {
        Self {
            current: DEFAULT_WIRE_COLOR.to_string(),
            random: false,
        }
    }
}

impl WirePalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn set_current(&mut self, color: impl Into<String>) {
        self.current = color.into();
    }

    pub fn is_random(&self) -> bool {
        self.random
    }

    pub fn set_random(&mut self, random: bool) {
        self.random = random;
    }

    /// Color for the next wire.
    pub fn next_color(&self) -> String {
        if self.random {
            PALETTE
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or(DEFAULT_WIRE_COLOR)
                .to_string()
        } else {
            self.current.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_color() {
        let mut palette = WirePalette::new();
        assert_eq!(palette.next_color(), DEFAULT_WIRE_COLOR);
        palette.set_current("#123456");
        assert_eq!(palette.next_color(), "#123456");
    }

    #[test]
    fn test_random_colors_come_from_palette() {
        let mut palette = WirePalette::new();
        palette.set_random(true);
        for _ in 0..50 {
            let color = palette.next_color();
            assert!(PALETTE.contains(&color.as_str()));
        }
    }
}
