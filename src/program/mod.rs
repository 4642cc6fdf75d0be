/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      program/mod.rs
 * Purpose:   The program model: an arena that owns every entity created
 *            while parsing one compilation unit.
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

pub mod entity;

pub use entity::{
    Expression, ExpressionId, Function, FunctionId, Scope, ScopeId, Variable, VariableId,
};

use tracing::trace;

/// Owner of the entity graph for one compilation unit.
///
/// Each entity kind lives in its own flat list and is addressed by a typed
/// handle. Relations between entities (scope parent, scope variables,
/// function body) are stored as handles, so the arena is the only owner
/// and there is no cyclic ownership.
///
/// Entities are never removed. The only mutation after creation is
/// appending a variable to a scope.
///
/// Handles are only meaningful for the `Program` that created them;
/// looking up a handle from another program panics when out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    functions: Vec<Function>,
    expressions: Vec<Expression>,
    variables: Vec<Variable>,
    scopes: Vec<Scope>,

    root: ScopeId,
}

impl Program {
    /// Creates an empty program holding only its root scope.
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
            expressions: Vec::new(),
            variables: Vec::new(),
            scopes: vec![Scope {
                parent: None,
                variables: Vec::new(),
            }],
            root: ScopeId(0),
        }
    }

    /// The top-level scope. It has no parent.
    pub fn root(&self) -> ScopeId {
        self.root
    }

    // ------------------------------------------------------------
    // CREATION
    // ------------------------------------------------------------

    pub fn create_expression(&mut self, value: f64) -> ExpressionId {
        let id = ExpressionId(self.expressions.len());
        self.expressions.push(Expression { value });
        trace!(%id, value, "created expression");
        id
    }

    /// Creates a function bound to an already-created body scope.
    pub fn create_function(&mut self, name: impl Into<String>, scope: ScopeId) -> FunctionId {
        let id = FunctionId(self.functions.len());
        self.functions.push(Function {
            name: name.into(),
            scope,
        });
        trace!(%id, %scope, "created function");
        id
    }

    /// Creates a variable and appends it to `scope`.
    ///
    /// No uniqueness check is made against the scope's existing variables.
    pub fn create_variable(&mut self, scope: ScopeId, name: impl Into<String>) -> VariableId {
        let id = VariableId(self.variables.len());
        self.variables.push(Variable { name: name.into() });
        self.scopes[scope.0].variables.push(id);
        trace!(%id, %scope, "created variable");
        id
    }

    /// Creates a child scope of `parent`.
    ///
    /// The parent is linked from the child only; the parent itself is left
    /// untouched.
    pub fn create_scope(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            parent: Some(parent),
            variables: Vec::new(),
        });
        trace!(%id, %parent, "created scope");
        id
    }

    // ------------------------------------------------------------
    // LOOKUP
    // ------------------------------------------------------------

    pub fn expression(&self, id: ExpressionId) -> &Expression {
        &self.expressions[id.0]
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.0]
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    pub fn function(&self, id: FunctionId) -> &Function {
        &self.functions[id.0]
    }

    /// All functions, in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = (FunctionId, &Function)> + '_ {
        self.functions
            .iter()
            .enumerate()
            .map(|(i, f)| (FunctionId(i), f))
    }

    pub fn expressions(&self) -> impl Iterator<Item = (ExpressionId, &Expression)> + '_ {
        self.expressions
            .iter()
            .enumerate()
            .map(|(i, e)| (ExpressionId(i), e))
    }

    /// Every variable in the program, regardless of scope.
    pub fn variables(&self) -> impl Iterator<Item = (VariableId, &Variable)> + '_ {
        self.variables
            .iter()
            .enumerate()
            .map(|(i, v)| (VariableId(i), v))
    }

    pub fn scopes(&self) -> impl Iterator<Item = (ScopeId, &Scope)> + '_ {
        self.scopes
            .iter()
            .enumerate()
            .map(|(i, s)| (ScopeId(i), s))
    }

    /// Walks from `scope` up through its parents, ending at the root.
    ///
    /// The first item is `scope` itself.
    pub fn ancestors(&self, scope: ScopeId) -> Ancestors<'_> {
        Ancestors {
            program: self,
            next: Some(scope),
        }
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn expression_count(&self) -> usize {
        self.expressions.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`Program::ancestors`].
pub struct Ancestors<'p> {
    program: &'p Program,
    next: Option<ScopeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ScopeId;

    fn next(&mut self) -> Option<ScopeId> {
        let current = self.next?;
        self.next = self.program.scope(current).parent;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_program_has_only_root() {
        let program = Program::new();
        assert_eq!(program.scope_count(), 1);
        assert_eq!(program.scope(program.root()).parent, None);
        assert_eq!(program.function_count(), 0);
    }

    #[test]
    fn variables_are_linked_into_their_scope() {
        let mut program = Program::new();
        let body = program.create_scope(program.root());
        let x = program.create_variable(body, "x");
        let y = program.create_variable(body, "y");

        assert_eq!(program.scope(body).variables, vec![x, y]);
        assert!(program.scope(program.root()).variables.is_empty());
        assert_eq!(program.variable_count(), 2);
        assert_eq!(program.variable(y).name, "y");
    }

    #[test]
    fn creating_a_scope_leaves_parent_untouched() {
        let mut program = Program::new();
        let before = program.scope(program.root()).clone();
        program.create_scope(program.root());
        assert_eq!(program.scope(program.root()), &before);
    }

    #[test]
    fn duplicate_names_are_kept() {
        let mut program = Program::new();
        let root = program.root();
        let a = program.create_variable(root, "n");
        let b = program.create_variable(root, "n");
        assert_ne!(a, b);
        assert_eq!(program.scope(root).variables.len(), 2);
    }

    #[test]
    fn ancestors_end_at_root() {
        let mut program = Program::new();
        let outer = program.create_scope(program.root());
        let inner = program.create_scope(outer);

        let chain: Vec<ScopeId> = program.ancestors(inner).collect();
        assert_eq!(chain, vec![inner, outer, program.root()]);
    }

    #[test]
    fn functions_keep_declaration_order() {
        let mut program = Program::new();
        let s1 = program.create_scope(program.root());
        let s2 = program.create_scope(program.root());
        program.create_function("first", s1);
        program.create_function("second", s2);

        let names: Vec<&str> = program.functions().map(|(_, f)| f.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn expressions_store_values() {
        let mut program = Program::new();
        let id = program.create_expression(2.5);
        assert_eq!(program.expression(id).value, 2.5);
        assert_eq!(program.expressions().count(), 1);
    }
}
