//! Crate root: wires together the compilation pipeline.
//!
//! The stages are intentionally small and composable so they can be evolved
//! independently:
//! - `tokenizer` performs lexical analysis and produces a flat token stream.
//! - `codegen` walks that stream once, emitting ARM64 assembly as it goes;
//!   the grammar is a left-associative `+`/`-` chain, so no tree is needed.
//! - `error` centralises reporting utilities shared by the other modules.

pub mod error;
pub mod tokenizer;

mod codegen;

pub use error::{CompileError, CompileResult};

/// Compile a source expression into an ARM64 assembly routine.
pub fn generate_assembly(expr: &str) -> CompileResult<String> {
  let tokens = tokenizer::tokenize(expr)?;
  codegen::generate(tokens, expr)
}
