//! Parser for catalog and wiring files.

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{ChispaError, Result};

/// Parser for the Chispa DSL.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse an exercise catalog.
    pub fn parse_catalog(&mut self) -> Result<CatalogAst> {
        let mut ast = CatalogAst::default();

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            let directive = self.expect_directive()?;
            let line = directive.line;
            match directive.text.to_lowercase().as_str() {
                ".exercise" => {
                    let id = self.expect_word()?;
                    ast.exercises.push(ExerciseDef::new(id, line));
                }
                other => {
                    let exercise = ast.exercises.last_mut().ok_or_else(|| {
                        ChispaError::parse(line, format!("{} before any .exercise", other))
                    })?;
                    self.parse_exercise_directive(other, line, exercise)?;
                }
            }

            self.expect_end_of_line()?;
        }

        Ok(ast)
    }

    /// Parse a wiring script.
    pub fn parse_wiring(&mut self) -> Result<WiringAst> {
        let mut ast = WiringAst::default();

        while self.current.kind != TokenKind::Eof {
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            let directive = self.expect_directive()?;
            let line = directive.line;
            let step = match directive.text.to_lowercase().as_str() {
                ".color" => WiringStep::Color(self.expect_text()?),
                ".random-colors" => {
                    let flag = self.expect_word()?;
                    match flag.to_lowercase().as_str() {
                        "on" | "true" | "yes" => WiringStep::RandomColors(true),
                        "off" | "false" | "no" => WiringStep::RandomColors(false),
                        _ => {
                            return Err(ChispaError::parse(
                                line,
                                format!("expected on/off, got '{}'", flag),
                            ))
                        }
                    }
                }
                ".wire" => {
                    let from = PinRef::parse(&self.expect_word()?, line)?;
                    let to = PinRef::parse(&self.expect_word()?, line)?;
                    let color = if self.at_end_of_line() {
                        None
                    } else {
                        Some(self.expect_text()?)
                    };
                    WiringStep::Wire(WireDef {
                        from,
                        to,
                        color,
                        line,
                    })
                }
                _ => {
                    return Err(ChispaError::parse(
                        line,
                        format!("unknown directive: {}", directive.text),
                    ))
                }
            };
            ast.steps.push(step);

            self.expect_end_of_line()?;
        }

        Ok(ast)
    }

    fn parse_exercise_directive(
        &mut self,
        directive: &str,
        line: usize,
        exercise: &mut ExerciseDef,
    ) -> Result<()> {
        match directive {
            ".name" => {
                exercise.name = Some(self.expect_text()?);
            }
            ".description" => {
                exercise.description = Some(self.expect_text()?);
            }
            ".component" => {
                let component_type = self.expect_word()?;
                let id = self.expect_word()?;
                let x = self.expect_number()?;
                let y = self.expect_number()?;
                exercise.components.push(PlacementDef {
                    component_type,
                    id,
                    x,
                    y,
                    line,
                });
            }
            ".connect" => {
                let from = self.expect_word()?;
                let to = self.expect_word()?;
                exercise.connections.push(ConnectionDef { from, to, line });
            }
            ".ignore" => {
                // One or more pin names
                exercise.ignored_pins.push(self.expect_word()?);
                while !self.at_end_of_line() {
                    exercise.ignored_pins.push(self.expect_word()?);
                }
            }
            _ => {
                return Err(ChispaError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn take(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn at_end_of_line(&self) -> bool {
        matches!(self.current.kind, TokenKind::Newline | TokenKind::Eof)
    }

    fn expect_end_of_line(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(ChispaError::parse(
                self.current.line,
                format!("unexpected token: {:?}", self.current.text),
            )),
        }
    }

    fn expect_directive(&mut self) -> Result<Token> {
        if self.current.kind == TokenKind::Directive {
            self.take()
        } else {
            Err(ChispaError::parse(
                self.current.line,
                format!("expected directive, got {:?}", self.current.text),
            ))
        }
    }

    /// A bare word. Numbers count as words so pins like `0` are accepted.
    fn expect_word(&mut self) -> Result<String> {
        match self.current.kind {
            TokenKind::Identifier | TokenKind::Number => Ok(self.take()?.text),
            _ => Err(ChispaError::parse(
                self.current.line,
                format!("expected name, got {:?}", self.current.kind),
            )),
        }
    }

    /// A quoted string or a bare word.
    fn expect_text(&mut self) -> Result<String> {
        if self.current.kind == TokenKind::Str {
            Ok(self.take()?.text)
        } else {
            self.expect_word()
        }
    }

    fn expect_number(&mut self) -> Result<f64> {
        if self.current.kind != TokenKind::Number {
            return Err(ChispaError::parse(
                self.current.line,
                format!("expected number, got {:?}", self.current.text),
            ));
        }
        let tok = self.take()?;
        tok.text
            .parse()
            .map_err(|_| ChispaError::parse(tok.line, format!("invalid number: {}", tok.text)))
    }
}
