/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      lexer/lexer.rs
 * Purpose:   Character scanner that turns Bramble source text into an
 *            ordered token stream with position metadata.
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

use tracing::{debug, trace};

use crate::error::LexicalError;
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Everything produced by one lexing pass.
#[derive(Debug, Clone, Default)]
pub struct LexOutput {
    /// Tokens in source order. Always ends with exactly one `EndOfFile`.
    pub tokens: Vec<Token>,

    /// Unrecognized characters, in the order they were skipped.
    pub errors: Vec<LexicalError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lexes `source` in a single pass.
///
/// Never fails: unrecognized characters are recorded in
/// [`LexOutput::errors`] and skipped one at a time.
pub fn tokenize(source: &str) -> LexOutput {
    Lexer::new(source).finish()
}

/// Scanner state for a single source text.
///
/// The cursor (`current`, `line`, `column`) is private to one lexing pass.
/// Outside the crate, [`tokenize`] is the only way in.
pub(crate) struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,

    /// Position of the first character of the token being scanned.
    start: usize,
    start_line: usize,
    start_column: usize,

    tokens: Vec<Token>,
    errors: Vec<LexicalError>,
}

impl Lexer {
    /// Creates a lexer positioned at line 1, column 1.
    pub(crate) fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
            start: 0,
            start_line: 1,
            start_column: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scans the whole input, then appends the `EndOfFile` marker at the
    /// final cursor position.
    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::EndOfFile,
            "",
            Span::new(self.line, self.column, self.current, 0),
        ));
    }

    /// Runs the single scan and consumes the lexer, handing back tokens and
    /// diagnostics.
    pub(crate) fn finish(mut self) -> LexOutput {
        self.scan_tokens();
        LexOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Scans from the current character, emitting at most one token.
    fn scan_token(&mut self) {
        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;

        let ch = self.advance();

        match ch {
            ' ' | '\t' | '\n' => {}

            '/' => {
                if self.match_char('/') {
                    self.line_comment();
                } else {
                    self.emit(TokenKind::Divide);
                }
            }

            '=' => self.emit(TokenKind::Equal),
            '(' => self.emit(TokenKind::BracketL),
            ')' => self.emit(TokenKind::BracketR),
            '{' => self.emit(TokenKind::CurlyL),
            '}' => self.emit(TokenKind::CurlyR),

            '0'..='9' => self.number(),

            'a'..='z' | 'A'..='Z' | '_' => self.word(),

            other => {
                debug!(
                    character = ?other,
                    line = self.start_line,
                    column = self.start_column,
                    "unexpected character"
                );
                self.errors.push(LexicalError {
                    character: other,
                    line: self.start_line,
                    column: self.start_column,
                    offset: self.start,
                });
            }
        }
    }

    /// Skips the rest of a `//` comment, including the terminating newline.
    fn line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }

        if !self.is_at_end() {
            self.advance();
        }
    }

    /// Digits, then optionally a single `.` and more digits.
    ///
    /// The fractional digit run may be empty, so `7.` is one literal.
    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        self.emit(TokenKind::NumLit);
    }

    /// Identifiers and keywords.
    fn word(&mut self) {
        while is_word_char(self.peek()) {
            self.advance();
        }

        let text = self.lexeme();
        let kind = keyword_kind(&text).unwrap_or(TokenKind::Identity);
        self.push(kind, text);
    }

    fn emit(&mut self, kind: TokenKind) {
        let text = self.lexeme();
        self.push(kind, text);
    }

    fn push(&mut self, kind: TokenKind, lexeme: String) {
        let span = Span::new(
            self.start_line,
            self.start_column,
            self.start,
            self.current - self.start,
        );
        trace!(%kind, %span, lexeme = %lexeme, "token");
        self.tokens.push(Token::new(kind, lexeme, span));
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Consumes one character, keeping line/column in step.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        ch
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_source_is_only_eof() {
        let out = tokenize("");
        assert_eq!(out.tokens.len(), 1);
        assert_eq!(out.tokens[0].kind, TokenKind::EndOfFile);
        assert_eq!(out.tokens[0].span, Span::new(1, 1, 0, 0));
        assert!(!out.has_errors());
    }

    #[test]
    fn finishing_a_fresh_lexer_scans_once() {
        let out = Lexer::new("x").finish();
        let kinds: Vec<TokenKind> = out.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Identity, TokenKind::EndOfFile]);
    }

    #[test]
    fn symbols_are_single_tokens() {
        assert_eq!(
            kinds("= ( ) { } /"),
            vec![
                TokenKind::Equal,
                TokenKind::BracketL,
                TokenKind::BracketR,
                TokenKind::CurlyL,
                TokenKind::CurlyR,
                TokenKind::Divide,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn numbers_take_one_fraction() {
        let out = tokenize("12.5.3 7.");
        let lexemes: Vec<&str> = out.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["12.5", "3", "7.", ""]);
        // the second '.' is not a token start
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].character, '.');
    }

    #[test]
    fn comment_runs_to_end_of_input() {
        assert_eq!(kinds("1 // trailing"), vec![TokenKind::NumLit, TokenKind::EndOfFile]);
    }

    #[test]
    fn comment_consumes_newline() {
        let out = tokenize("// x\n123");
        assert_eq!(out.tokens[0].kind, TokenKind::NumLit);
        assert_eq!(out.tokens[0].span.line, 2);
        assert_eq!(out.tokens[0].span.column, 1);
    }

    #[test]
    fn carriage_return_is_not_whitespace() {
        let out = tokenize("x\r\ny");
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].character, '\r');
        assert_eq!(out.errors[0].line, 1);
        assert_eq!(out.errors[0].column, 2);
    }

    #[test]
    fn non_ascii_is_skipped_one_char_at_a_time() {
        let out = tokenize("é1");
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.tokens[0].kind, TokenKind::NumLit);
        assert_eq!(out.tokens[0].span.offset, 1);
        assert_eq!(out.tokens[0].span.column, 2);
        assert_eq!(out.tokens[1].span.offset, 2);
    }
}
