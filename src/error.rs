//! Shared error utilities used across the compilation pipeline.
//!
//! Diagnostics are kept lightweight on purpose – these routines format
//! messages in a style reminiscent of chibicc, repeating the source line
//! and pointing at the offending byte with a caret.

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Snafu)]
pub enum CompileError {
  #[snafu(display("{message}"))]
  Plain { message: String },
  #[snafu(display("{expr_line}\n{marker} {message}"))]
  WithLocation {
    expr_line: String,
    marker: String,
    message: String,
  },
}

impl CompileError {
  /// Construct an error with no source position attached.
  pub fn plain(message: impl Into<String>) -> Self {
    Self::Plain {
      message: message.into(),
    }
  }

  /// Construct an error anchored at a specific byte offset in the source.
  pub fn at(expr: &str, loc: usize, message: impl Into<String>) -> Self {
    let safe_loc = loc.min(expr.len());
    let char_offset = expr[..safe_loc].chars().count();
    let marker = format!("{}^", " ".repeat(char_offset));
    Self::WithLocation {
      expr_line: expr.to_string(),
      marker,
      message: message.into(),
    }
  }
}
