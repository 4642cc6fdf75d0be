/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      error.rs
 * Purpose:   Error types for loading, lexing and parsing, plus the
 *            `Diagnostic` value the printer renders.
 *
 * License:
 * This file is part of the Bramble programming language project.
 *
 * Bramble is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::io;
use std::path::PathBuf;

use crate::lexer::token::TokenKind;
use crate::span::Span;

/// A character the lexer could not classify.
///
/// Non-fatal: the lexer skips exactly this character and carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected character {character:?} on line {line}")]
pub struct LexicalError {
    pub character: char,
    pub line: usize,
    pub column: usize,

    /// Character offset into the source.
    pub offset: usize,
}

impl LexicalError {
    /// A one-character span at the offending position.
    pub fn span(&self) -> Span {
        Span::new(self.line, self.column, self.offset, 1)
    }
}

/// A token the parser did not expect.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    /// A mandatory token was missing. Fatal for the whole source unit.
    #[error("expected {expected}, got {found}")]
    Expected {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    /// Something other than `fun` at the top level. The parser skips the
    /// token and keeps going.
    #[error("unexpected {found} token at {span} (expected function)")]
    UnexpectedTopLevel { found: TokenKind, span: Span },

    /// A `NUM_LIT` whose text does not convert to a floating point value.
    #[error("invalid numeric literal '{lexeme}'")]
    InvalidNumber { lexeme: String, span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Expected { span, .. }
            | SyntaxError::UnexpectedTopLevel { span, .. }
            | SyntaxError::InvalidNumber { span, .. } => *span,
        }
    }

    /// `false` only for errors the top-level loop recovers from.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SyntaxError::UnexpectedTopLevel { .. })
    }
}

/// A parse that stopped on a fatal [`SyntaxError`].
///
/// `diagnostics` holds the recovered top-level errors reported before the
/// failure, so callers can still show them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{error}")]
pub struct ParseFailure {
    pub error: SyntaxError,
    pub diagnostics: Vec<SyntaxError>,
}

/// The source file could not be read.
#[derive(Debug, thiserror::Error)]
#[error("could not load source file {}", path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A renderable report about a location in the source.
///
/// Detection code produces [`LexicalError`] and [`SyntaxError`]; this is
/// the presentation-side form built from either of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Stable code (`E_LEX`, `E_SYNTAX`, `W_TOPLEVEL`).
    pub code: &'static str,

    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(
        code: &'static str,
        severity: Severity,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Attach a help message to the diagnostic (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&LexicalError> for Diagnostic {
    fn from(error: &LexicalError) -> Self {
        Diagnostic::new("E_LEX", Severity::Error, error.to_string(), error.span())
            .with_help("the character was skipped")
    }
}

impl From<&SyntaxError> for Diagnostic {
    fn from(error: &SyntaxError) -> Self {
        match error {
            SyntaxError::UnexpectedTopLevel { .. } => Diagnostic::new(
                "W_TOPLEVEL",
                Severity::Warning,
                error.to_string(),
                error.span(),
            )
            .with_help("only `fun` declarations may appear at the top level"),
            _ => Diagnostic::new("E_SYNTAX", Severity::Error, error.to_string(), error.span()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_names_both_kinds() {
        let err = SyntaxError::Expected {
            expected: TokenKind::BracketR,
            found: TokenKind::CurlyL,
            span: Span::new(1, 8, 7, 1),
        };
        assert_eq!(err.to_string(), "expected BRACKET_R, got CURLY_L");
        assert!(err.is_fatal());
    }

    #[test]
    fn top_level_becomes_warning() {
        let err = SyntaxError::UnexpectedTopLevel {
            found: TokenKind::BracketR,
            span: Span::new(2, 3, 5, 1),
        };
        assert!(!err.is_fatal());

        let diagnostic = Diagnostic::from(&err);
        assert_eq!(diagnostic.code, "W_TOPLEVEL");
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(
            diagnostic.message,
            "unexpected BRACKET_R token at 2:3 (expected function)"
        );
    }

    #[test]
    fn lexical_error_message() {
        let err = LexicalError {
            character: '$',
            line: 4,
            column: 2,
            offset: 17,
        };
        assert_eq!(err.to_string(), "unexpected character '$' on line 4");
        assert_eq!(Diagnostic::from(&err).span.column, 2);
    }
}
