//! Semantic error types for the Soma front end
//!
//! This module defines [`SemanticError`], covering every way a parsed
//! program can violate the declaration rules: referencing a name that was
//! never declared (or not yet defined), declaring a name twice, and
//! assigning to a constant.
//!
//! All semantic errors are fatal: analysis stops at the first one and the
//! compilation unit produces no output.

use thiserror::Error;

/// Semantic rule violations detected while analyzing a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// A reference to, or re-assignment of, a name with no prior definition.
    #[error("Variable '{0}' is not defined")]
    UndefinedVariable(String),

    /// A `const`/`var` declaration of a name that is already declared.
    #[error("Variable '{0}' is already defined")]
    RedefineVariable(String),

    /// An assignment targeting a name flagged constant.
    #[error("Cannot reassign constant '{0}'")]
    ReassignConstant(String),
}
