//! Constant folding
//!
//! A binary operator node whose children are both literals is replaced by a
//! single literal holding the computed result; the child subtrees are
//! dropped with the replaced node. Folding works bottom-up, so nested
//! all-literal subtrees collapse in one walk.
//!
//! Arithmetic is computed in `f64` regardless of operand kinds. The result
//! is a float literal iff the operator is `/` or either operand is a float
//! literal; otherwise the value is truncated toward zero and rendered as an
//! integer literal. The truncation (never rounding) is load-bearing for
//! downstream consumers.

use crate::optimizer::Optimizer;
use crate::parser::ast::{BinOp, Node};

impl Optimizer {
    /// Fold every all-literal subtree of `node`, bottom-up.
    pub(crate) fn fold(node: &mut Node) {
        let Node::BinaryOp { op, left, right } = node else {
            return;
        };

        Self::fold(left);
        Self::fold(right);

        let (Some(lhs), Some(rhs)) = (literal_value(left), literal_value(right))
        else {
            return;
        };

        let result = match op {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => lhs / rhs,
        };

        let is_float = *op == BinOp::Div
            || matches!(**left, Node::FloatLiteral(_))
            || matches!(**right, Node::FloatLiteral(_));

        *node = if is_float {
            Node::FloatLiteral(result.to_string())
        } else {
            Node::IntLiteral((result as i64).to_string())
        };
    }
}

/// Numeric value of a literal node, `None` for anything else.
fn literal_value(node: &Node) -> Option<f64> {
    match node {
        Node::IntLiteral(text) | Node::FloatLiteral(text) => Some(
            text.parse()
                .expect("literal text was validated by the scanner"),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(text: &str) -> Node {
        Node::IntLiteral(text.to_string())
    }

    fn float(text: &str) -> Node {
        Node::FloatLiteral(text.to_string())
    }

    fn binary(op: BinOp, left: Node, right: Node) -> Node {
        Node::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn folded(mut node: Node) -> Node {
        Optimizer::fold(&mut node);
        node
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(folded(binary(BinOp::Add, int("1"), int("2"))), int("3"));
        assert_eq!(folded(binary(BinOp::Sub, int("2"), int("5"))), int("-3"));
        assert_eq!(folded(binary(BinOp::Mul, int("4"), int("6"))), int("24"));
    }

    #[test]
    fn test_division_is_always_float() {
        // Even an exact integral quotient stays a float literal.
        assert_eq!(
            folded(binary(BinOp::Div, int("4"), int("2"))),
            float("2")
        );
        assert_eq!(
            folded(binary(BinOp::Div, int("7"), int("2"))),
            float("3.5")
        );
    }

    #[test]
    fn test_float_operand_widens_result() {
        assert_eq!(
            folded(binary(BinOp::Add, int("1"), float("2.5"))),
            float("3.5")
        );
        assert_eq!(
            folded(binary(BinOp::Mul, float("1.5"), int("2"))),
            float("3")
        );
    }

    #[test]
    fn test_nested_folding() {
        // (1 + 2) * (10 - 4) collapses bottom-up to 18.
        let tree = binary(
            BinOp::Mul,
            binary(BinOp::Add, int("1"), int("2")),
            binary(BinOp::Sub, int("10"), int("4")),
        );
        assert_eq!(folded(tree), int("18"));
    }

    #[test]
    fn test_float_kind_spreads_upward() {
        // The inner division makes its literal a float, so the outer
        // multiplication is float too.
        let tree = binary(
            BinOp::Mul,
            binary(BinOp::Div, int("4"), int("2")),
            int("3"),
        );
        assert_eq!(folded(tree), float("6"));
    }

    #[test]
    fn test_identifier_blocks_folding() {
        let tree = binary(
            BinOp::Add,
            binary(BinOp::Mul, int("2"), int("3")),
            Node::Identifier("a".to_string()),
        );
        let result = folded(tree);

        // The literal half folded, the identifier half survived.
        assert_eq!(
            result,
            binary(BinOp::Add, int("6"), Node::Identifier("a".to_string()))
        );
    }

    #[test]
    fn test_scientific_notation_operands() {
        assert_eq!(
            folded(binary(BinOp::Mul, float("2e1"), int("3"))),
            float("60")
        );
    }

    #[test]
    fn test_fold_is_a_no_op_on_literals() {
        assert_eq!(folded(int("42")), int("42"));
        assert_eq!(folded(float("4.2")), float("4.2"));
    }
}
