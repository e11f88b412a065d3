//! # Introduction
//!
//! Soma is a compiler front end for a minimal expression-oriented language:
//! `const`/`var` declarations, re-assignments, and arithmetic over integer
//! and float literals. It turns source text into a validated, partially
//! optimized AST plus a typed symbol table. There is no code generation or
//! execution backend.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Semantic Analysis → Optimizer
//! ```
//!
//! 1. [`parser::lexer`] — pull-based tokenizer over a character stream.
//! 2. [`parser`] — recursive descent with precedence climbing; builds a
//!    [`parser::ast::Program`] of statements in program order.
//! 3. [`semantics`] — validates declarations and usages, infers `Int`/`Float`
//!    types, and populates a per-run [`semantics::symbol_table::SymbolTable`].
//! 4. [`optimizer`] — rewrites the tree in place: constant folding plus
//!    forward value propagation.
//!
//! Every failure is a typed [`CompileError`]; the library never prints, and
//! the first error ends the compilation unit.
//!
//! ## Example
//!
//! ```
//! let (program, symbols) = soma::compile("const a = 1 + 2; var b = a * 3;")
//!     .expect("valid program");
//!
//! assert_eq!(program.statements.len(), 2);
//! assert_eq!(symbols.len(), 2);
//! ```

pub mod error;
pub mod optimizer;
pub mod parser;
pub mod semantics;

pub use error::CompileError;

use crate::optimizer::Optimizer;
use crate::parser::ast::Program;
use crate::parser::lexer::Lexer;
use crate::parser::parse::Parser;
use crate::semantics::analyzer::SemanticAnalyzer;
use crate::semantics::symbol_table::SymbolTable;

/// Compile one unit of Soma source: lex, parse, analyze, optimize.
///
/// On success, returns the optimized program together with the symbol table
/// populated during analysis (types and definition flags per name). On
/// failure, returns the first error any stage produced.
pub fn compile(source: &str) -> Result<(Program, SymbolTable), CompileError> {
    let lexer = Lexer::new(source.chars());
    let mut parser = Parser::new(lexer)?;
    let mut program = parser.parse_program()?;

    let symbols = SemanticAnalyzer::new().analyze(&program)?;
    Optimizer::new().optimize(&mut program);

    Ok((program, symbols))
}
