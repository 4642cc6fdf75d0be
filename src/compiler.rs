/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      compiler.rs
 * Purpose:   Runs the front-end pipeline (lex, then parse) over one
 *            source unit.
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

use tracing::info;

use crate::error::{Diagnostic, LexicalError, ParseFailure, SyntaxError};
use crate::parser::parse;
use crate::program::Program;
use crate::source::SourceFile;

/// Result of running the front end over one source unit.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub program: Program,
    pub lexical_errors: Vec<LexicalError>,
    pub syntax_diagnostics: Vec<SyntaxError>,
}

impl Compilation {
    /// Every non-fatal problem, lexical first, as renderable diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lexical_errors
            .iter()
            .map(Diagnostic::from)
            .chain(self.syntax_diagnostics.iter().map(Diagnostic::from))
            .collect()
    }
}

/// A fatal parse, along with everything reported before it.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{failure}")]
pub struct CompileError {
    pub failure: ParseFailure,
    pub lexical_errors: Vec<LexicalError>,
}

impl CompileError {
    /// Lexical errors, recovered syntax diagnostics, then the fatal error.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lexical_errors
            .iter()
            .map(Diagnostic::from)
            .chain(self.failure.diagnostics.iter().map(Diagnostic::from))
            .chain(std::iter::once(Diagnostic::from(&self.failure.error)))
            .collect()
    }
}

/// Lexes `source` (keeping its tokens) and parses it into a fresh
/// `Program`.
pub fn compile(source: &mut SourceFile) -> Result<Compilation, CompileError> {
    let lexical_errors = source.lex();
    info!(
        source = %source.display_name(),
        tokens = source.tokens().len(),
        lexical_errors = lexical_errors.len(),
        "lexed"
    );

    match parse(source.tokens(), Program::new()) {
        Ok(parsed) => Ok(Compilation {
            program: parsed.program,
            lexical_errors,
            syntax_diagnostics: parsed.diagnostics,
        }),
        Err(failure) => Err(CompileError {
            failure,
            lexical_errors,
        }),
    }
}
