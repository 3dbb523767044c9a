//! Grading outcome.

use std::fmt;

use serde::Serialize;

use crate::project::CorrectConnection;
use crate::wiring::Wire;

/// Outcome of grading one wiring against one exercise.
///
/// Derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValidationResult {
    /// Percentage of graded connections satisfied, 0..=100
    pub score: u8,
    /// Number of graded connections (ignored pins excluded)
    pub total: usize,
    /// Graded connections that some wire satisfies, in exercise order
    pub correct: Vec<CorrectConnection>,
    /// Graded connections no wire satisfies, in exercise order
    pub missing: Vec<CorrectConnection>,
    /// Wires that match no graded connection, in wire order
    pub extras: Vec<Wire>,
}

impl ValidationResult {
    /// The zeroed result returned for an unknown exercise.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every graded connection is in place. False when nothing is graded.
    pub fn is_perfect(&self) -> bool {
        self.score == 100
    }

    /// Score as a fraction in `[0, 1]`, the form external graders expect.
    pub fn grade_fraction(&self) -> f64 {
        f64::from(self.score) / 100.0
    }
}

/// `round(100 * correct / total)`, rounding halves up; 0 when `total` is 0.
pub fn score(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((200 * correct + total) / (2 * total)) as u8
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}%", self.score)?;
        if !self.correct.is_empty() {
            writeln!(f, "Correct:")?;
            for c in &self.correct {
                writeln!(f, "  {}", c)?;
            }
        }
        if !self.missing.is_empty() {
            writeln!(f, "Missing:")?;
            for c in &self.missing {
                writeln!(f, "  {}", c)?;
            }
        }
        if !self.extras.is_empty() {
            writeln!(f, "Incorrect wires:")?;
            for w in &self.extras {
                writeln!(f, "  {} → {}", w.from.id, w.to.id)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_score_rounding() {
        assert_eq!(score(0, 3), 0);
        assert_eq!(score(1, 3), 33);
        assert_eq!(score(2, 3), 67);
        assert_eq!(score(3, 3), 100);
        assert_eq!(score(1, 2), 50);
        assert_eq!(score(1, 8), 13);
        assert_eq!(score(5, 0), 0);
    }

    #[test]
    fn test_score_bounds() {
        for total in 0..40 {
            for correct in 0..=total {
                assert!(score(correct, total) <= 100);
            }
        }
    }

    #[test]
    fn test_grade_fraction() {
        let result = ValidationResult {
            score: 33,
            ..ValidationResult::empty()
        };
        assert_relative_eq!(result.grade_fraction(), 0.33);
        assert_relative_eq!(ValidationResult::empty().grade_fraction(), 0.0);
    }

    #[test]
    fn test_empty_result_is_not_perfect() {
        let result = ValidationResult::empty();
        assert!(!result.is_perfect());
        assert_eq!(result.total, 0);
        assert!(result.correct.is_empty() && result.missing.is_empty() && result.extras.is_empty());
    }

    #[test]
    fn test_display_lists_sections() {
        let result = ValidationResult {
            score: 50,
            total: 2,
            correct: vec![CorrectConnection::new("D13", "RES1")],
            missing: vec![CorrectConnection::new("LED1_CATODO(-)", "GND")],
            extras: Vec::new(),
        };
        let text = result.to_string();
        assert!(text.starts_with("Score: 50%"));
        assert!(text.contains("  D13 → RES1"));
        assert!(text.contains("Missing:"));
        assert!(!text.contains("Incorrect wires:"));
    }
}
