//! Type inference rules
//!
//! Expression types are inferred bottom-up over a statement's right-hand
//! side:
//!
//! - Integer literals are `Int`, float literals are `Float`
//! - Identifiers take the type recorded in their symbol entry
//! - `+ - *` produce the wider of their operand types (`Float` over `Int`)
//! - `/` always produces `Float`, whatever its operands

use crate::parser::ast::{BinOp, Node};
use crate::semantics::analyzer::SemanticAnalyzer;
use crate::semantics::symbol_table::SymbolType;

impl SemanticAnalyzer {
    /// Infer the type of an expression subtree.
    pub(crate) fn infer_type(&self, node: &Node) -> SymbolType {
        match node {
            Node::IntLiteral(_) => SymbolType::Int,

            Node::FloatLiteral(_) => SymbolType::Float,

            Node::Identifier(name) => self
                .symbols
                .find(name)
                .map_or(SymbolType::Unknown, |data| data.ty()),

            Node::BinaryOp { op: BinOp::Div, .. } => SymbolType::Float,

            Node::BinaryOp { left, right, .. } => {
                // SymbolType orders by width, so the wider type is the max.
                self.infer_type(left).max(self.infer_type(right))
            }

            // Assignments are statements, not expressions; the grammar never
            // nests one inside a right-hand side.
            Node::Assignment { .. } => SymbolType::Unknown,
        }
    }
}
