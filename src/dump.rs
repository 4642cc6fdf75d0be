/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      dump.rs
 * Purpose:   Structured JSON rendering of the entity graph and token
 *            stream, for inspection and test comparison.
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

use serde_json::{json, Value as JsonValue};

use crate::lexer::token::Token;
use crate::program::{ExpressionId, FunctionId, Program, ScopeId, VariableId};

/// Output layout for dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpStyle {
    /// One line, no extra whitespace.
    #[default]
    Compact,
    /// Indented, one member per line.
    Pretty,
}

/// Converts an entity handle into JSON, looking it up in `program`.
///
/// Entities refer to each other by handle, so the conversion needs the
/// owning program rather than deriving `Serialize` on the records.
pub trait ToJson {
    fn to_json(&self, program: &Program) -> JsonValue;
}

impl ToJson for ExpressionId {
    /// The bare number. Non-finite values become `null`.
    fn to_json(&self, program: &Program) -> JsonValue {
        serde_json::Number::from_f64(program.expression(*self).value)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }
}

impl ToJson for VariableId {
    fn to_json(&self, program: &Program) -> JsonValue {
        json!({ "name": program.variable(*self).name })
    }
}

impl ToJson for ScopeId {
    /// Only the scope's own variables. The parent chain is left out.
    fn to_json(&self, program: &Program) -> JsonValue {
        json!({ "variables": program.scope(*self).variables.to_json(program) })
    }
}

impl ToJson for FunctionId {
    fn to_json(&self, program: &Program) -> JsonValue {
        let function = program.function(*self);
        json!({
            "name": function.name,
            "scope": function.scope.to_json(program),
        })
    }
}

impl<T: ToJson> ToJson for Option<T> {
    /// An absent entity renders as `null`.
    fn to_json(&self, program: &Program) -> JsonValue {
        match self {
            Some(entity) => entity.to_json(program),
            None => JsonValue::Null,
        }
    }
}

impl<T: ToJson> ToJson for [T] {
    fn to_json(&self, program: &Program) -> JsonValue {
        JsonValue::Array(self.iter().map(|e| e.to_json(program)).collect())
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self, program: &Program) -> JsonValue {
        self.as_slice().to_json(program)
    }
}

/// The whole program: its functions and its root scope.
pub fn program_to_json(program: &Program) -> JsonValue {
    let functions: Vec<FunctionId> = program.functions().map(|(id, _)| id).collect();
    json!({
        "functions": functions.to_json(program),
        "root": program.root().to_json(program),
    })
}

pub fn dump_program(program: &Program, style: DumpStyle) -> String {
    render(&program_to_json(program), style)
}

/// Dumps a single entity (or `Option`/list of entities) of `program`.
pub fn dump_entity<T: ToJson + ?Sized>(entity: &T, program: &Program, style: DumpStyle) -> String {
    render(&entity.to_json(program), style)
}

/// Dumps a token stream with kinds, spans and lexemes.
pub fn dump_tokens(tokens: &[Token], style: DumpStyle) -> Result<String, serde_json::Error> {
    match style {
        DumpStyle::Compact => serde_json::to_string(tokens),
        DumpStyle::Pretty => serde_json::to_string_pretty(tokens),
    }
}

fn render(value: &JsonValue, style: DumpStyle) -> String {
    match style {
        DumpStyle::Compact => value.to_string(),
        DumpStyle::Pretty => format!("{:#}", value),
    }
}
