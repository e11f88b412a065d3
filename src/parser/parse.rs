//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the syntax error type, token-window helpers, and the
//! [`Parser::parse_program`] entry point.
//!
//! # Parser Architecture
//!
//! The parser pulls tokens from the lexer one at a time and keeps a single
//! `current` token of lookahead; each consumed token is dropped as soon as
//! its AST contribution is built. Parsing methods are split across files
//! using `impl Parser` blocks:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: Parsing declarations, re-assignments, expression statements
//! - `expressions`: Parsing expressions with precedence climbing
//!
//! Parsing is not resumable: the first syntax error aborts the compilation
//! unit.

use crate::error::CompileError;
use crate::parser::ast::Program;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Unexpected token: {found}. Expected: {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },
    #[error("Expected expression but found: {found}")]
    ExpectedExpression { found: String },
}

/// Recursive descent parser for Soma programs.
pub struct Parser<I: Iterator<Item = char>> {
    lexer: Lexer<I>,
    pub(crate) current: Token,
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Create a parser over the given lexer, pulling the first token.
    pub fn new(mut lexer: Lexer<I>) -> Result<Self, CompileError> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire program: statements until end-of-input.
    pub fn parse_program(&mut self) -> Result<Program, CompileError> {
        let mut program = Program::new();

        while self.current.kind != TokenKind::Eof {
            program.statements.push(self.parse_statement()?);
        }

        Ok(program)
    }

    // ===== Helper methods =====

    /// Consume the current token, pulling the next one from the lexer.
    pub(crate) fn advance(&mut self) -> Result<Token, CompileError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consume the current token if it has the expected kind, otherwise fail
    /// with the `expected` label echoed in the diagnostic.
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token, CompileError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(SyntaxError::UnexpectedToken {
                found: self.current.lexeme.clone(),
                expected,
            }
            .into())
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, CompileError> {
        Ok(self.expect(TokenKind::Identifier, "ID")?.lexeme)
    }
}
