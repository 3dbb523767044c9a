//! DSL for exercise catalogs and wiring scripts.
//!
//! Both file kinds are line-oriented and made of directives. Words run until
//! whitespace, so pin labels keep their punctuation.
//!
//! # Grammar Overview
//!
//! ```text
//! file        = { line }
//! line        = comment | directive | empty
//! comment     = ';' { any_char }
//!             | '#' { any_char }        (first token of a line only)
//! directive   = '.' directive_name { argument }
//! argument    = word | string | number
//! string      = '"' { char | '\"' | '\\' } '"'
//! ```
//!
//! # Catalog Directives
//!
//! | Directive | Syntax |
//! |-----------|--------|
//! | .exercise | `.exercise <id>` (starts a new exercise) |
//! | .name | `.name <text>` |
//! | .description | `.description <text>` |
//! | .component | `.component <TYPE> <id> <x> <y>` |
//! | .connect | `.connect <pin> <pin>` |
//! | .ignore | `.ignore <pin> { <pin> }` |
//!
//! # Wiring Directives
//!
//! | Directive | Syntax |
//! |-----------|--------|
//! | .color | `.color <color>` |
//! | .random-colors | `.random-colors on\|off` |
//! | .wire | `.wire <component>:<pin> <component>:<pin> [color]` |
//!
//! Colors may be quoted or bare (`#10b981`): a `#` after the first token of a
//! line is part of a word, not a comment.
//!
//! # Example
//!
//! ```text
//! .exercise led-basic
//! .name "Encender un LED"
//! .component ARDUINO_UNO ARDUINO 400 50
//! .component RESISTOR RES1 500 90
//! .component LED LED1 600 200
//! .connect D13 RES1
//! .connect RES1 LED1_ANODO(+)
//! .connect LED1_CATODO(-) GND
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse an exercise catalog string into an AST.
pub fn parse_catalog(input: &str) -> Result<CatalogAst> {
    Parser::new(Lexer::new(input))?.parse_catalog()
}

/// Parse a wiring script string into an AST.
pub fn parse_wiring(input: &str) -> Result<WiringAst> {
    Parser::new(Lexer::new(input))?.parse_wiring()
}

/// Parse an exercise catalog file.
#[cfg(feature = "cli")]
pub fn parse_catalog_file(path: &std::path::Path) -> Result<CatalogAst> {
    parse_catalog(&read_file(path)?)
}

/// Parse a wiring script file.
#[cfg(feature = "cli")]
pub fn parse_wiring_file(path: &std::path::Path) -> Result<WiringAst> {
    parse_wiring(&read_file(path)?)
}

#[cfg(feature = "cli")]
fn read_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| crate::error::ChispaError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}
