//! Statement parsing implementation
//!
//! This module handles parsing of the three Soma statement forms:
//!
//! - Declarations: `const a = 1;`, `var b = a * 2;`
//! - Re-assignments: `b = b + 1;`
//! - Expression statements: `1 + 2;` (literal-led only)
//!
//! # Grammar
//!
//! ```text
//! statement ::= ('const' | 'var') IDENT '=' expression ';'
//!             | IDENT '=' expression ';'
//!             | expression ';'            (first token a numeric literal)
//! ```
//!
//! An identifier at statement position always begins a re-assignment; bare
//! expression statements must start with a numeric literal.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::error::CompileError;
use crate::parser::ast::Node;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, SyntaxError};

impl<I: Iterator<Item = char>> Parser<I> {
    /// Parse a single statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Node, CompileError> {
        match self.current.kind {
            TokenKind::Const | TokenKind::Var => self.parse_declaration(),

            TokenKind::Identifier => self.parse_reassignment(),

            TokenKind::IntegerLiteral | TokenKind::FloatLiteral => {
                let expression = self.parse_expression(0)?;
                self.expect(TokenKind::Semicolon, ";")?;
                Ok(expression)
            }

            _ => Err(SyntaxError::UnexpectedToken {
                found: self.current.lexeme.clone(),
                expected: "statement",
            }
            .into()),
        }
    }

    /// Parse a `const`/`var` declaration statement.
    fn parse_declaration(&mut self) -> Result<Node, CompileError> {
        let keyword = self.advance()?;
        let is_constant = keyword.kind == TokenKind::Const;

        let name = self.expect_identifier()?;
        self.expect(TokenKind::Assign, "=")?;
        let value = self.parse_expression(0)?;
        self.expect(TokenKind::Semicolon, ";")?;

        Ok(Node::Assignment {
            name,
            value: Box::new(value),
            is_declaration: true,
            is_constant,
        })
    }

    /// Parse a plain re-assignment to an already-declared name.
    fn parse_reassignment(&mut self) -> Result<Node, CompileError> {
        let name = self.expect_identifier()?;
        self.expect(TokenKind::Assign, "=")?;
        let value = self.parse_expression(0)?;
        self.expect(TokenKind::Semicolon, ";")?;

        Ok(Node::Assignment {
            name,
            value: Box::new(value),
            is_declaration: false,
            is_constant: false,
        })
    }
}
