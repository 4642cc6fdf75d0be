/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      parser/declarations.rs
 * Purpose:   Grammar rules for function declarations, blocks and
 *            variable declarations.
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

use tracing::debug;

use crate::error::SyntaxError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::program::{FunctionId, ScopeId, VariableId};

impl Parser<'_> {
    /// Parses a function declaration into `scope`.
    ///
    /// ```text
    /// fun name ( ) { block }
    /// ```
    ///
    /// The body gets a fresh child scope of `scope`. Nothing between the
    /// parentheses is parsed: parameters are not part of the grammar yet.
    pub fn function_declaration(&mut self, scope: ScopeId) -> Result<FunctionId, SyntaxError> {
        self.expect(TokenKind::KeyFun)?;
        let name = self.expect(TokenKind::Identity)?;
        debug!(name = %name.lexeme, "function declaration");

        self.expect(TokenKind::BracketL)?;
        // TODO: parse a parameter list once parameters have entities
        self.expect(TokenKind::BracketR)?;

        let body = self.program.create_scope(scope);
        let function = self.program.create_function(name.lexeme.as_str(), body);

        self.block(body)?;

        Ok(function)
    }

    /// Parses a block into `scope`.
    ///
    /// A block currently holds exactly one statement, and that statement is
    /// always a variable declaration. Empty blocks and multiple statements
    /// are rejected.
    pub fn block(&mut self, scope: ScopeId) -> Result<(), SyntaxError> {
        self.expect(TokenKind::CurlyL)?;
        self.variable_declaration(scope)?;
        self.expect(TokenKind::CurlyR)?;
        Ok(())
    }

    /// Parses `var name` with an optional `= expression`.
    ///
    /// The initializer is parsed and stored as an expression entity, but it
    /// is not attached to the variable.
    pub fn variable_declaration(&mut self, scope: ScopeId) -> Result<VariableId, SyntaxError> {
        self.expect(TokenKind::KeyVar)?;
        let name = self.expect(TokenKind::Identity)?;
        debug!(name = %name.lexeme, %scope, "variable declaration");

        let variable = self.program.create_variable(scope, name.lexeme.as_str());

        if self.match_kind(TokenKind::Equal) {
            self.expression()?;
        }

        Ok(variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::program::Program;

    #[test]
    fn function_scope_is_child_of_declaring_scope() {
        let lexed = tokenize("fun f() { var a }");
        let mut parser = Parser::new(&lexed.tokens, Program::new());
        let root = parser.program().root();

        let id = parser.function_declaration(root).unwrap();
        let program = parser.finish().program;
        let function = program.function(id);

        assert_eq!(function.name, "f");
        assert_eq!(program.scope(function.scope).parent, Some(root));
    }

    #[test]
    fn initializer_is_created_but_not_attached() {
        let lexed = tokenize("var x = 5");
        let mut parser = Parser::new(&lexed.tokens, Program::new());
        let root = parser.program().root();

        let id = parser.variable_declaration(root).unwrap();
        let program = parser.finish().program;

        assert_eq!(program.variable(id).name, "x");
        assert_eq!(program.expression_count(), 1);
        assert_eq!(program.scope(root).variables, vec![id]);
    }

    #[test]
    fn empty_block_is_rejected() {
        let lexed = tokenize("{ }");
        let mut parser = Parser::new(&lexed.tokens, Program::new());
        let root = parser.program().root();

        let err = parser.block(root).unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::Expected {
                expected: TokenKind::KeyVar,
                found: TokenKind::CurlyR,
                ..
            }
        ));
    }

    #[test]
    fn second_statement_is_rejected() {
        let lexed = tokenize("{ var a var b }");
        let mut parser = Parser::new(&lexed.tokens, Program::new());
        let root = parser.program().root();

        let err = parser.block(root).unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::Expected {
                expected: TokenKind::CurlyR,
                found: TokenKind::KeyVar,
                ..
            }
        ));
    }
}
