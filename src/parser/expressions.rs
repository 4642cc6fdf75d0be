/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      parser/expressions.rs
 * Purpose:   Expression grammar. Only numeric literals exist so far.
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

use crate::error::SyntaxError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::program::ExpressionId;

impl Parser<'_> {
    /// Parses one expression: a single `NUM_LIT`.
    pub fn expression(&mut self) -> Result<ExpressionId, SyntaxError> {
        let literal = self.expect(TokenKind::NumLit)?;

        // Overflowing literals parse to infinity; reject them like bad text.
        let value = literal
            .lexeme
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| SyntaxError::InvalidNumber {
                lexeme: literal.lexeme.clone(),
                span: literal.span,
            })?;

        Ok(self.program.create_expression(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::Token;
    use crate::lexer::tokenize;
    use crate::program::Program;
    use crate::span::Span;

    #[test]
    fn trailing_dot_literal() {
        let lexed = tokenize("7.");
        let mut parser = Parser::new(&lexed.tokens, Program::new());
        let id = parser.expression().unwrap();
        assert_eq!(parser.program().expression(id).value, 7.0);
    }

    #[test]
    fn identifier_is_not_an_expression() {
        let lexed = tokenize("y");
        let mut parser = Parser::new(&lexed.tokens, Program::new());
        let err = parser.expression().unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::Expected {
                expected: TokenKind::NumLit,
                found: TokenKind::Identity,
                ..
            }
        ));
    }

    #[test]
    fn malformed_literal_is_reported() {
        let tokens = vec![
            Token::new(TokenKind::NumLit, "1..2", Span::new(1, 1, 0, 4)),
            Token::new(TokenKind::EndOfFile, "", Span::new(1, 5, 4, 0)),
        ];
        let mut parser = Parser::new(&tokens, Program::new());
        let err = parser.expression().unwrap_err();
        assert_eq!(
            err,
            SyntaxError::InvalidNumber {
                lexeme: "1..2".to_string(),
                span: Span::new(1, 1, 0, 4),
            }
        );
        assert_eq!(parser.program().expression_count(), 0);
    }

    #[test]
    fn overflowing_literal_is_reported() {
        let digits = "9".repeat(400);
        let lexed = tokenize(&digits);
        assert_eq!(lexed.tokens[0].kind, TokenKind::NumLit);

        let mut parser = Parser::new(&lexed.tokens, Program::new());
        let err = parser.expression().unwrap_err();
        assert_eq!(
            err,
            SyntaxError::InvalidNumber {
                lexeme: digits.clone(),
                span: Span::new(1, 1, 0, 400),
            }
        );
        assert_eq!(parser.program().expression_count(), 0);
    }
}
