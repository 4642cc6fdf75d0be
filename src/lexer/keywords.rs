/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      lexer/keywords.rs
 * Purpose:   Defines all reserved keywords of the Bramble language.
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

use crate::lexer::token::TokenKind;

/// Maps a scanned word to its **keyword token kind**, if it is one.
///
/// Only exact matches count:
/// ```text
/// fun       -> KeyFun
/// var       -> KeyVar
/// funx      -> None (identifier)
/// variable  -> None (identifier)
/// ```
///
/// Any future language keywords should be added here.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "fun" => Some(TokenKind::KeyFun),
        "var" => Some(TokenKind::KeyVar),
        _ => None,
    }
}
