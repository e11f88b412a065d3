//! Expression parsing implementation
//!
//! Arithmetic expressions are parsed by precedence climbing: a primary is
//! parsed first, then binary operators at or above the minimum precedence
//! consume their right operand recursively with the minimum raised one past
//! their own precedence, which makes every operator left-associative.
//!
//! # Operator table
//!
//! | Operators | Precedence |
//! |-----------|------------|
//! | `+` `-`   | 7          |
//! | `*` `/`   | 8          |
//!
//! No unary or right-associative forms exist in the grammar.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::error::CompileError;
use crate::parser::ast::{BinOp, Node};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, SyntaxError};

/// Look up a token in the binary operator table, yielding the AST operator
/// and its precedence.
fn binary_operator(kind: TokenKind) -> Option<(BinOp, u8)> {
    match kind {
        TokenKind::Plus => Some((BinOp::Add, 7)),
        TokenKind::Minus => Some((BinOp::Sub, 7)),
        TokenKind::Multiply => Some((BinOp::Mul, 8)),
        TokenKind::Divide => Some((BinOp::Div, 8)),
        _ => None,
    }
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Parse an expression whose operators all bind at least as tightly as
    /// `min_precedence`.
    pub(crate) fn parse_expression(
        &mut self,
        min_precedence: u8,
    ) -> Result<Node, CompileError> {
        let mut left = self.parse_primary()?;

        while let Some((op, precedence)) = binary_operator(self.current.kind) {
            if precedence < min_precedence {
                break;
            }
            self.advance()?;

            let right = self.parse_expression(precedence + 1)?;
            left = Node::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse a primary: a literal, an identifier, or a parenthesized
    /// sub-expression.
    fn parse_primary(&mut self) -> Result<Node, CompileError> {
        match self.current.kind {
            TokenKind::IntegerLiteral => {
                Ok(Node::IntLiteral(self.advance()?.lexeme))
            }
            TokenKind::FloatLiteral => {
                Ok(Node::FloatLiteral(self.advance()?.lexeme))
            }
            TokenKind::Identifier => {
                Ok(Node::Identifier(self.advance()?.lexeme))
            }
            TokenKind::LeftParenthesis => {
                self.advance()?;
                let expression = self.parse_expression(0)?;
                self.expect(TokenKind::RightParenthesis, ")")?;
                Ok(expression)
            }
            _ => Err(SyntaxError::ExpectedExpression {
                found: self.current.lexeme.clone(),
            }
            .into()),
        }
    }
}
