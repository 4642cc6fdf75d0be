/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the Bramble lexer.
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

/// Character scanner and the `tokenize` entry point.
pub mod lexer;

/// Reserved words.
pub mod keywords;

/// `Token` and `TokenKind`.
pub mod token;

pub use lexer::{tokenize, LexOutput};
pub use token::{Token, TokenKind};
