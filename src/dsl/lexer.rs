//! Lexer (tokenizer) for catalog and wiring files.

use crate::error::{ChispaError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text (unquoted for strings)
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the DSL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A bare word (ids, pin names, keywords)
    Identifier,
    /// A word that parses as a number
    Number,
    /// A directive (starts with '.')
    Directive,
    /// A double-quoted string
    Str,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing DSL input.
///
/// Words run until whitespace or a quote, so pin labels such as
/// `LED1_ANODO(+)` or `+5V` stay in one token. `;` starts a comment at the
/// start of any token, `#` only as the first token of a line, so bare hex
/// colors like `#10b981` lex as words.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
    /// No token read yet on the current line
    line_start: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
            line_start: true,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let start_line = self.line;
        let start_column = self.column;

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line: start_line,
                    column: start_column,
                });
            }
        };

        let (kind, text) = match ch {
            '\n' => {
                self.advance();
                (TokenKind::Newline, "\n".to_string())
            }
            '"' => (TokenKind::Str, self.read_string(start_line, start_column)?),
            _ => {
                let text = self.read_word();
                (classify(&text), text)
            }
        };
        if kind != TokenKind::Newline {
            self.line_start = false;
        }

        Ok(Token {
            kind,
            text,
            line: start_line,
            column: start_column,
        })
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
            self.line_start = true;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == ';' || (ch == '#' && self.line_start) {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() || ch == '"' {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }

    fn read_string(&mut self, line: usize, column: usize) -> Result<String> {
        // Opening quote
        self.advance();

        let mut text = String::new();
        loop {
            match self.advance() {
                Some('"') => return Ok(text),
                Some('\\') => match self.advance() {
                    Some('n') => text.push('\n'),
                    Some(c @ ('"' | '\\')) => text.push(c),
                    Some(c) => {
                        text.push('\\');
                        text.push(c);
                    }
                    None => break,
                },
                Some('\n') | None => break,
                Some(c) => text.push(c),
            }
        }
        Err(ChispaError::lexer(line, column, "unterminated string"))
    }
}

fn classify(text: &str) -> TokenKind {
    let mut chars = text.chars();
    let first = chars.next();
    if first == Some('.') && chars.next().is_some_and(char::is_alphabetic) {
        return TokenKind::Directive;
    }
    let numeric_start =
        matches!(first, Some(c) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.');
    if numeric_start && text.parse::<f64>().is_ok() {
        TokenKind::Number
    } else {
        TokenKind::Identifier
    }
}
