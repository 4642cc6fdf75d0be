/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver used to turn a token stream into entities inside a `Program`.
 *
 * The grammar itself is split across multiple modules:
 * - `declarations.rs` → functions, blocks and variable declarations
 * - `expressions.rs`  → expressions
 * - `helpers.rs`      → lookahead, consumption and expect-or-fail
 *
 * This file serves as the **root coordinator** of the parsing process.
 *
 * --------------------------------------------------------------------------
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

use tracing::debug;

use crate::error::{ParseFailure, SyntaxError};
use crate::lexer::token::{Token, TokenKind};
use crate::program::Program;

/// The core Bramble recursive-descent parser.
///
/// This structure maintains:
/// - The token stream produced by the lexer (borrowed, never retained by
///   any entity)
/// - The current cursor position into that stream
/// - The `Program` being populated
/// - Recovered diagnostics from the top-level loop
///
/// The grammar rules live in extension modules (`declarations`,
/// `expressions`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser<'t> {
    pub(crate) tokens: &'t [Token],
    pub(crate) current: usize,
    pub(crate) program: Program,
    pub(crate) diagnostics: Vec<SyntaxError>,
}

/// A successfully parsed source unit.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub program: Program,

    /// Recovered top-level errors. Never fatal.
    pub diagnostics: Vec<SyntaxError>,
}

/// Public entry point for the Bramble parsing phase.
///
/// Parses `tokens` into `program` and hands the program back.
///
/// # Returns
/// - `Ok(Parsed)` when the whole unit parsed, possibly with recovered
///   top-level diagnostics.
/// - `Err(ParseFailure)` on the first fatal syntax error. The partially
///   built program is dropped.
///
/// # Bramble Compilation Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → Program → Dump
/// ```
///
/// # Example
/// ```rust
/// use bramble::lexer::tokenize;
/// use bramble::parser::parse;
/// use bramble::program::Program;
///
/// let lexed = tokenize("fun main() { var x = 5 }");
/// let parsed = parse(&lexed.tokens, Program::new()).unwrap();
/// assert_eq!(parsed.program.function_count(), 1);
/// ```
pub fn parse(tokens: &[Token], program: Program) -> Result<Parsed, ParseFailure> {
    let mut parser = Parser::new(tokens, program);

    match parser.parse_source() {
        Ok(()) => Ok(parser.finish()),
        Err(error) => Err(ParseFailure {
            error,
            diagnostics: parser.diagnostics,
        }),
    }
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], program: Program) -> Self {
        Self {
            tokens,
            current: 0,
            program,
            diagnostics: Vec::new(),
        }
    }

    /// Runs the top-level loop until `EndOfFile`.
    ///
    /// # Behavior
    /// - `fun` starts a function declared in the root scope.
    /// - Any other token is reported as a recovered diagnostic and exactly
    ///   one token is skipped, so every iteration makes progress.
    /// - A fatal error inside a declaration is returned immediately.
    pub fn parse_source(&mut self) -> Result<(), SyntaxError> {
        let root = self.program.root();
        debug!(tokens = self.tokens.len(), "parsing source");

        while !self.is_at_end() {
            if self.check(TokenKind::KeyFun) {
                self.function_declaration(root)?;
            } else {
                let error = SyntaxError::UnexpectedTopLevel {
                    found: self.peek_kind(),
                    span: self.peek_span(),
                };
                debug!(%error, "skipping token");
                self.diagnostics.push(error);
                self.advance();
            }
        }

        Ok(())
    }

    /// Recovered diagnostics gathered so far.
    pub fn diagnostics(&self) -> &[SyntaxError] {
        &self.diagnostics
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn finish(self) -> Parsed {
        Parsed {
            program: self.program,
            diagnostics: self.diagnostics,
        }
    }
}
