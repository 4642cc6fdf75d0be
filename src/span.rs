/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Source positions shared by tokens, lexical errors and
 *            syntax diagnostics.
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

use serde::Serialize;
use std::fmt;

/// A region of source text.
///
/// `line` and `column` are both 1-based. `offset` and `length` are counted
/// in characters (not bytes), so a span can be used to slice the character
/// sequence of the source it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    /// 1-based line number.
    pub line: usize,

    /// 1-based column, counted in characters since the last newline.
    pub column: usize,

    /// Character offset of the first character of the span.
    pub offset: usize,

    /// Number of characters covered.
    pub length: usize,
}

impl Span {
    pub fn new(line: usize, column: usize, offset: usize, length: usize) -> Self {
        Self {
            line,
            column,
            offset,
            length,
        }
    }

    /// Character offset one past the last character of the span.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

impl fmt::Display for Span {
    /// Formats as `line:column`, the form used by the token table and
    /// diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
