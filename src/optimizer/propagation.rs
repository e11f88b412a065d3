//! Value propagation
//!
//! Forward, per-variable substitution: as the optimizer walks statements in
//! program order it remembers which names currently hold a known literal
//! value, and every identifier reference to such a name is replaced by a
//! copy of that literal. An assignment whose right-hand side does not reduce
//! to a literal evicts its target, so stale values never cross a
//! reassignment.

use crate::optimizer::Optimizer;
use crate::parser::ast::Node;

impl Optimizer {
    /// Replace identifier references in `node` with their known literal
    /// values. Each substituted literal is a fresh copy owned by the slot it
    /// lands in.
    pub(crate) fn propagate(&self, node: &mut Node) {
        match node {
            Node::Identifier(name) => {
                if let Some(value) = self.known.get(name.as_str()) {
                    *node = value.clone();
                }
            }
            Node::BinaryOp { left, right, .. } => {
                self.propagate(left);
                self.propagate(right);
            }
            _ => {}
        }
    }
}
