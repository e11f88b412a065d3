//! Semantic analysis
//!
//! This module validates a parsed program against the declaration rules and
//! populates the symbol table:
//!
//! 1. Declarations create fresh entries; redeclaring a name is an error.
//! 2. Re-assignments require an existing, non-constant entry.
//! 3. Every identifier in a right-hand side must already be defined by an
//!    earlier statement; forward references are always errors.
//! 4. Each target's type is inferred from its right-hand side (see
//!    [`types`](super::types)) and stored in the entry.
//!
//! Statements are processed in program order, so a statement only ever sees
//! the definitions made strictly before it.

use crate::parser::ast::{Node, Program};
use crate::semantics::errors::SemanticError;
use crate::semantics::symbol_table::{SymbolFlags, SymbolTable};

/// Single-pass semantic checker over one compilation unit.
pub struct SemanticAnalyzer {
    pub(crate) symbols: SymbolTable,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
        }
    }

    /// Analyze a program, returning the populated symbol table on success.
    ///
    /// The table is constructed by this call and handed to the caller; it is
    /// never shared between analysis runs.
    pub fn analyze(
        mut self,
        program: &Program,
    ) -> Result<SymbolTable, SemanticError> {
        for statement in &program.statements {
            if let Node::Assignment {
                name,
                value,
                is_declaration,
                is_constant,
            } = statement
            {
                self.check_assignment(
                    name,
                    value,
                    *is_declaration,
                    *is_constant,
                )?;
            }
        }

        Ok(self.symbols)
    }

    /// Validate one assignment statement and finalize its symbol entry.
    fn check_assignment(
        &mut self,
        name: &str,
        value: &Node,
        is_declaration: bool,
        is_constant: bool,
    ) -> Result<(), SemanticError> {
        if is_declaration {
            if self.symbols.find(name).is_some() {
                return Err(SemanticError::RedefineVariable(name.to_string()));
            }
            self.symbols.insert(name);
        } else {
            let data = self
                .symbols
                .find(name)
                .ok_or_else(|| {
                    SemanticError::UndefinedVariable(name.to_string())
                })?;
            if data.flags().contains(SymbolFlags::CONSTANT) {
                return Err(SemanticError::ReassignConstant(name.to_string()));
            }
        }

        if is_constant {
            self.symbols.insert(name).flags_mut().set(SymbolFlags::CONSTANT);
        }

        self.check_operands(value)?;
        let ty = self.infer_type(value);

        let data = self.symbols.insert(name);
        data.set_type(ty);
        data.flags_mut().set(SymbolFlags::DEFINED);

        Ok(())
    }

    /// Walk a right-hand subtree; every identifier in it must name an entry
    /// that is already defined. The current target is not yet defined while
    /// its own right-hand side is checked, so `var a = a;` fails here.
    fn check_operands(&self, node: &Node) -> Result<(), SemanticError> {
        match node {
            Node::Identifier(name) => {
                let defined = self
                    .symbols
                    .find(name)
                    .is_some_and(|data| {
                        data.flags().contains(SymbolFlags::DEFINED)
                    });
                if defined {
                    Ok(())
                } else {
                    Err(SemanticError::UndefinedVariable(name.clone()))
                }
            }
            Node::BinaryOp { left, right, .. } => {
                self.check_operands(left)?;
                self.check_operands(right)
            }
            _ => Ok(()),
        }
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
