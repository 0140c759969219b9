//! Generates the `Expr` and `Stmt` AST enums for the pseudocode interpreter
//! from compact variant specs (see `schemas`).
pub mod cli;
pub mod codegen;
pub mod compile;
pub mod error;
pub mod ir;
pub mod lower;
pub mod parse;
pub mod schemas;

pub use compile::compile;
pub use error::{Error, Result};
