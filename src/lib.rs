/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      lib.rs
 * Purpose:   Crate root. Source text → tokens → program model → dump.
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

pub mod compiler;
pub mod diagnostics;
pub mod dump;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod program;
pub mod source;
pub mod span;

pub use compiler::{compile, CompileError, Compilation};
pub use error::{Diagnostic, LexicalError, LoadError, ParseFailure, SyntaxError};
pub use source::{load_source_file, SourceFile};
