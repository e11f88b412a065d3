//! Tree-rewriting optimizer for Soma programs
//!
//! The optimizer runs after semantic analysis and mutates the AST in place,
//! one assignment statement at a time, in program order:
//! - [`propagation`]: known literal values are substituted for identifier
//!   references in the assignment's right-hand side
//! - [`folding`]: operator subtrees whose children are both literals collapse
//!   into single literal nodes
//!
//! Propagation runs before folding within each statement, so a substituted
//! value folds immediately; whatever the statement's right-hand side reduces
//! to then becomes (or invalidates) the target's known value for the
//! statements after it. The whole pass is idempotent: running it twice
//! leaves the tree exactly as one run does.
//!
//! The optimizer has no failure mode of its own: literal text was validated
//! by the scanner, and finding it malformed here is an internal invariant
//! violation, not a user error.

pub mod folding;
pub mod propagation;

use crate::parser::ast::{Node, Program};
use rustc_hash::FxHashMap;

/// In-place optimizer over one compilation unit.
pub struct Optimizer {
    /// Names whose current value is a known literal, keyed to a copy of that
    /// literal node. A non-literal assignment to a name evicts it.
    known: FxHashMap<String, Node>,
}

impl Optimizer {
    pub fn new() -> Self {
        Self {
            known: FxHashMap::default(),
        }
    }

    /// Optimize every assignment in the program, in program order.
    pub fn optimize(&mut self, program: &mut Program) {
        for statement in &mut program.statements {
            if let Node::Assignment { name, value, .. } = statement {
                self.propagate(value);
                Self::fold(value);

                if value.is_literal() {
                    self.known.insert(name.clone(), (**value).clone());
                } else {
                    self.known.remove(name.as_str());
                }
            }
        }
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}
