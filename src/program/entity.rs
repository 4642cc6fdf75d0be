/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      program/entity.rs
 * Purpose:   Entity records stored in the program arena and the typed
 *            handles used to refer to them.
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

use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Position of the entity in its arena list.
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Handle to an [`Expression`] owned by a `Program`.
    ExpressionId,
    "expr"
);
entity_id!(
    /// Handle to a [`Variable`] owned by a `Program`.
    VariableId,
    "var"
);
entity_id!(
    /// Handle to a [`Scope`] owned by a `Program`.
    ScopeId,
    "scope"
);
entity_id!(
    /// Handle to a [`Function`] owned by a `Program`.
    FunctionId,
    "fun"
);

/// A numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub value: f64,
}

/// A declared variable.
///
/// Names are not unique: redeclaring a name in the same scope produces a
/// second, distinct variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
}

/// A lexical container of variable declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Enclosing scope. `None` only for the program root.
    pub parent: Option<ScopeId>,

    /// Variables declared directly in this scope, in declaration order.
    pub variables: Vec<VariableId>,
}

/// A function declaration and its body scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub scope: ScopeId,
}
