/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      lexer/token.rs
 * Purpose:   Defines the lexical token types shared by the Bramble lexer
 *            and parser.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// The **category of a lexical token** in Bramble.
///
/// This is a closed set: the lexer only ever produces these kinds and the
/// parser only ever matches on them.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → Program
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Never produced by the lexer. Reserved for callers that need a
    /// placeholder kind.
    Invalid,

    /// `=`
    Equal,
    /// `/` when not the start of a `//` comment.
    Divide,
    /// `(`
    BracketL,
    /// `)`
    BracketR,
    /// `{`
    CurlyL,
    /// `}`
    CurlyR,

    /// A numeric literal: `42`, `3.14`, `7.`
    NumLit,

    /// A user-defined name (function or variable).
    Identity,

    /// The `fun` keyword.
    KeyFun,
    /// The `var` keyword.
    KeyVar,

    /// End-of-file marker.
    ///
    /// Always appended as the **final token** during lexing, with a length
    /// of zero.
    EndOfFile,
}

impl TokenKind {
    /// The stable upper-case name of the kind, as printed in token tables
    /// and syntax errors.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Invalid => "INVALID",
            TokenKind::Equal => "EQUAL",
            TokenKind::Divide => "DIVIDE",
            TokenKind::BracketL => "BRACKET_L",
            TokenKind::BracketR => "BRACKET_R",
            TokenKind::CurlyL => "CURLY_L",
            TokenKind::CurlyR => "CURLY_R",
            TokenKind::NumLit => "NUM_LIT",
            TokenKind::Identity => "IDENTITY",
            TokenKind::KeyFun => "KEY_FUN",
            TokenKind::KeyVar => "KEY_VAR",
            TokenKind::EndOfFile => "END_OF_FILE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A **single lexical token** produced by the Bramble lexer.
///
/// # Example Tokens
/// ```text
/// fun   →  { kind: KeyFun,   lexeme: "fun",  span: 1:1 }
/// main  →  { kind: Identity, lexeme: "main", span: 1:5 }
/// 5     →  { kind: NumLit,   lexeme: "5",    span: 1:20 }
/// ```
///
/// The lexeme is owned, so a token (and anything built from it) stays
/// valid after the source text is dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token. Empty for
    /// `EndOfFile`.
    pub lexeme: String,

    /// Where the token was scanned from.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    /// Prints only the lexeme. Use `{:?}` for the full structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
