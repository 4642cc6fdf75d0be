/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      parser/helpers.rs
 * Purpose:   Token lookahead, consumption and expect-or-fail helpers
 *            shared by every grammar rule.
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

use crate::error::SyntaxError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::span::Span;

impl<'t> Parser<'t> {
    /// The lookahead token, if the cursor is still inside the stream.
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    /// Kind of the lookahead token.
    ///
    /// Running off the end of the stream reads as `EndOfFile`, so a token
    /// slice without its sentinel still terminates.
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().map_or(TokenKind::EndOfFile, |t| t.kind)
    }

    /// Span of the lookahead token, or of the last token when the cursor
    /// is past the end.
    pub fn peek_span(&self) -> Span {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|t| t.span)
            .unwrap_or_default()
    }

    /// Checks the lookahead kind without consuming it.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Returns true if the parser is at EOF.
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::EndOfFile)
    }

    /// Advances one token forward, returning the token that was current.
    ///
    /// Never moves past the end of the stream.
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek();
        if token.is_some() {
            self.current += 1;
        }
        token
    }

    /// Consumes the lookahead if it has the given kind.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a mandatory token or fails the rule.
    ///
    /// On mismatch nothing is consumed and the error names both the
    /// expected kind and the kind actually found.
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'t Token, SyntaxError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.current += 1;
                Ok(token)
            }
            _ => Err(SyntaxError::Expected {
                expected: kind,
                found: self.peek_kind(),
                span: self.peek_span(),
            }),
        }
    }
}
