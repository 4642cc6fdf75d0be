/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the Bramble recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic and the top-level loop
 *   - Declaration parsing (functions, blocks, variables)
 *   - Expression parsing
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse(tokens, program)` entry point
pub mod parser;

/// Declaration-level parsing:
/// - function declarations
/// - blocks
/// - variable declarations
pub mod declarations;

/// Expression-level parsing (numeric literals).
pub mod expressions;

/// Shared parser helpers:
/// - lookahead checks
/// - token consumption
/// - expect-or-fail
pub mod helpers;

pub use parser::{parse, Parsed, Parser};
