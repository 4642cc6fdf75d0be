/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      diagnostics.rs
 * Purpose:   Compiler-style rendering of diagnostics and the token table.
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

use std::fmt::Write;

use crate::error::Diagnostic;
use crate::lexer::token::Token;
use crate::source::SourceFile;
use crate::span::Span;

/// Renders human-friendly, compiler-style diagnostics for one source file.
///
/// This printer:
/// - Formats diagnostics with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact position using a caret (`^`)
/// - Optionally shows a follow-up hint
///
/// The output is modelled on `rustc` diagnostics, simplified and readable
/// without color.
pub struct DiagnosticPrinter<'s> {
    source: &'s SourceFile,
}

impl<'s> DiagnosticPrinter<'s> {
    pub fn new(source: &'s SourceFile) -> Self {
        Self { source }
    }

    /// Renders one diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[E_SYNTAX]: expected BRACKET_R, got CURLY_L
    ///   --> main.bramble:1:8
    ///    |
    ///   1 | fun f( { }
    ///    |        ^
    /// ```
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let Span { line, column, .. } = diagnostic.span;
        let src_line = self.source.line(line).unwrap_or("");

        let mut out = String::new();

        // Formatting into a String cannot fail.
        let _ = writeln!(
            out,
            "{}[{}]: {}\n  --> {}:{}:{}",
            diagnostic.severity.label(),
            diagnostic.code,
            diagnostic.message,
            self.source.display_name(),
            line,
            column
        );
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);

        // column is 1-based
        let underline = format!("{}^", " ".repeat(column.saturating_sub(1)));
        let _ = writeln!(out, "   | {}", underline);

        if let Some(help) = &diagnostic.help {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Prints a rendered diagnostic to stderr.
    pub fn print(&self, diagnostic: &Diagnostic) {
        eprint!("{}", self.render(diagnostic));
    }
}

/// Renders the token table: kind, `line:column` and lexeme, tab separated,
/// one token per line.
pub fn token_table(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{}\t{}\t{}\t", token.kind, token.span, token.lexeme);
    }
    out
}
