//! Stream consumption and code emission, fused into one linear pass.
//!
//! The grammar is a strictly left-associative chain of `+`/`-` over
//! integer literals, so no tree is built: instructions are appended as
//! each (operator, number) pair is consumed. The running value lives in
//! `x0` and the routine returns it.

use crate::error::{CompileError, CompileResult};
use crate::tokenizer::{Token, TokenKind, describe_token, token_text};

/// Forward-only cursor over the token vector. The position only ever
/// advances, mirroring the single left-to-right pass over the input.
struct TokenStream<'a> {
  tokens: Vec<Token>,
  source: &'a str,
  pos: usize,
}

impl<'a> TokenStream<'a> {
  fn new(tokens: Vec<Token>, source: &'a str) -> Self {
    Self {
      tokens,
      source,
      pos: 0,
    }
  }

  fn peek(&self) -> Option<&Token> {
    self.tokens.get(self.pos)
  }

  /// Consume the current token if it matches the provided punctuator.
  fn equal(&mut self, op: &str) -> bool {
    if let Some(token) = self.peek()
      && token.kind == TokenKind::Punctuator
      && token.len == op.len()
      && token_text(token, self.source) == op
    {
      self.pos += 1;
      return true;
    }
    false
  }

  /// Like `equal`, but a mismatch is an error naming the missing symbol.
  /// No source position is attached; the caller knows which operator the
  /// chain structure demanded.
  fn skip(&mut self, s: &str) -> CompileResult<()> {
    if self.equal(s) {
      Ok(())
    } else {
      let got = describe_token(self.peek(), self.source);
      Err(CompileError::plain(format!(
        "expected \"{s}\", but got \"{got}\""
      )))
    }
  }

  /// Consume the current token as an integer literal and return its value.
  fn get_number(&mut self) -> CompileResult<i64> {
    if let Some(token) = self.peek()
      && token.kind == TokenKind::Num
    {
      let loc = token.loc;
      let value = token.value.ok_or_else(|| {
        CompileError::at(self.source, loc, "internal error: numeric token missing value")
      })?;
      self.pos += 1;
      return Ok(value);
    }

    let (loc, got) = match self.peek() {
      Some(token) => (token.loc, describe_token(Some(token), self.source)),
      None => (self.source.len(), "EOF".to_string()),
    };
    Err(CompileError::at(
      self.source,
      loc,
      format!("expected a number, but got \"{got}\""),
    ))
  }

  fn is_eof(&self) -> bool {
    matches!(self.peek().map(|token| token.kind), Some(TokenKind::Eof))
  }
}

/// Walk the token stream once and emit the complete assembly routine.
///
/// The first token must be a number; after that, each iteration consumes
/// exactly one operator and one number or fails, so the `Eof` terminator
/// guarantees termination.
pub fn generate(tokens: Vec<Token>, source: &str) -> CompileResult<String> {
  let mut stream = TokenStream::new(tokens, source);

  let mut asm = String::new();
  asm.push_str(".globl main\n");
  asm.push_str("main:\n");

  let first = stream.get_number()?;
  asm.push_str(&format!("  mov x0, {first}\n"));

  while !stream.is_eof() {
    if stream.equal("+") {
      let value = stream.get_number()?;
      asm.push_str(&format!("  add x0, x0, {value}\n"));
      continue;
    }

    stream.skip("-")?;
    let value = stream.get_number()?;
    asm.push_str(&format!("  sub x0, x0, {value}\n"));
  }

  asm.push_str("  ret\n");
  Ok(asm)
}
