/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      source.rs
 * Purpose:   Source units: raw text, where it came from, and its tokens
 *            once lexed.
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

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LexicalError, LoadError};
use crate::lexer::{tokenize, Token};
use crate::span::Span;

/// One unit of source text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: Option<PathBuf>,
    content: String,
    tokens: Vec<Token>,
}

/// Reads a whole file into a [`SourceFile`].
pub fn load_source_file(path: impl AsRef<Path>) -> Result<SourceFile, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "loaded source file");

    Ok(SourceFile {
        path: Some(path.to_path_buf()),
        content,
        tokens: Vec::new(),
    })
}

impl SourceFile {
    /// A source unit that did not come from disk.
    pub fn from_string(content: impl Into<String>) -> Self {
        Self {
            path: None,
            content: content.into(),
            tokens: Vec::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name for diagnostics, or `<input>` for in-memory sources.
    pub fn display_name(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in characters. This is where `EndOfFile` sits.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Lexes the content and keeps the tokens.
    ///
    /// Returns the lexical errors for the caller to report.
    pub fn lex(&mut self) -> Vec<LexicalError> {
        let output = tokenize(&self.content);
        self.tokens = output.tokens;
        output.errors
    }

    /// Tokens from the last [`SourceFile::lex`] call. Empty before lexing.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The text covered by `span`, taken from the content by character
    /// offset.
    pub fn slice(&self, span: Span) -> String {
        self.content
            .chars()
            .skip(span.offset)
            .take(span.length)
            .collect()
    }

    /// One line of content (1-based), without its newline.
    pub fn line(&self, line: usize) -> Option<&str> {
        self.content.split('\n').nth(line.checked_sub(1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;
    use std::io::Write;

    #[test]
    fn lex_stores_tokens() {
        let mut source = SourceFile::from_string("fun main");
        assert!(source.tokens().is_empty());

        let errors = source.lex();
        assert!(errors.is_empty());
        assert_eq!(source.tokens().len(), 3);
        assert_eq!(source.tokens()[2].kind, TokenKind::EndOfFile);
        assert_eq!(source.tokens()[2].span.offset, source.len());
    }

    #[test]
    fn slice_uses_character_offsets() {
        let mut source = SourceFile::from_string("é var x");
        source.lex();
        let var = &source.tokens()[0];
        assert_eq!(var.kind, TokenKind::KeyVar);
        assert_eq!(source.slice(var.span), "var");
    }

    #[test]
    fn lines_are_one_based() {
        let source = SourceFile::from_string("a\nb\n");
        assert_eq!(source.line(1), Some("a"));
        assert_eq!(source.line(2), Some("b"));
        assert_eq!(source.line(0), None);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "fun f() {{ var n }}").unwrap();

        let source = load_source_file(file.path()).unwrap();
        assert_eq!(source.content(), "fun f() { var n }");
        assert_eq!(source.path(), Some(file.path()));
    }

    #[test]
    fn load_failure_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.bramble");

        let err = load_source_file(&missing).unwrap_err();
        assert_eq!(err.path, missing);
        assert!(err.to_string().starts_with("could not load source file"));
    }
}
