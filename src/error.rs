//! Error types for the Chispa wiring engine.
//!
//! This module provides a unified error type [`ChispaError`] that covers
//! rejected wiring actions, exercise catalog problems, DSL parsing and file
//! access. Wiring errors are always recoverable: the session that reports
//! them has already reset its selection state.

use thiserror::Error;

/// Result type alias using [`ChispaError`].
pub type Result<T> = std::result::Result<T, ChispaError>;

/// Unified error type for all Chispa operations.
#[derive(Error, Debug)]
pub enum ChispaError {
    // ============ Wiring Errors ============
    /// Both endpoints belong to the same component instance
    #[error("Cannot connect two pins of the same component '{component}'")]
    SameComponent { component: String },

    /// An exclusive pin already has a wire attached
    #[error("Pin '{pin}' is already connected")]
    PinInUse { pin: String },

    /// Both endpoints carry the same pin id
    #[error("Cannot connect pin '{pin}' to itself")]
    DegeneratePin { pin: String },

    // ============ Catalog Errors ============
    /// No exercise registered under this id
    #[error("Exercise '{id}' not found")]
    UnknownExercise { id: String },

    /// Two exercises share an id
    #[error("Duplicate exercise id '{id}'")]
    DuplicateExercise { id: String },

    /// Two placements in one exercise share a component id
    #[error("Duplicate component '{component}' in exercise '{exercise}'")]
    DuplicateComponent { exercise: String, component: String },

    /// Unknown component type in a placement
    #[error("Unknown component type '{component_type}' at line {line}")]
    UnknownComponentType { component_type: String, line: usize },

    /// Structurally invalid exercise
    #[error("Invalid exercise '{id}': {message}")]
    InvalidExercise { id: String, message: String },

    /// A pin reference that does not resolve against the placed components
    #[error("Pin '{pin}' not found on component '{component}'")]
    PinNotFound { component: String, pin: String },

    // ============ DSL Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    // ============ I/O Errors ============
    /// Error reading an exercise or wiring file
    #[error("Failed to read file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Result or wire list could not be serialized
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChispaError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid exercise error
    pub fn invalid_exercise(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidExercise {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Whether this error is a rejected wiring action (as opposed to a
    /// catalog, parse or I/O failure).
    pub fn is_wiring_rejection(&self) -> bool {
        matches!(
            self,
            Self::SameComponent { .. } | Self::PinInUse { .. } | Self::DegeneratePin { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiring_rejection_kinds() {
        assert!(ChispaError::PinInUse { pin: "D13".into() }.is_wiring_rejection());
        assert!(ChispaError::SameComponent { component: "LED1".into() }.is_wiring_rejection());
        assert!(!ChispaError::UnknownExercise { id: "x".into() }.is_wiring_rejection());
    }

    #[test]
    fn test_error_messages() {
        let err = ChispaError::parse(3, "expected pin name");
        assert_eq!(err.to_string(), "Parse error at line 3: expected pin name");

        let err = ChispaError::SameComponent { component: "RES1".into() };
        assert_eq!(
            err.to_string(),
            "Cannot connect two pins of the same component 'RES1'"
        );
    }
}
