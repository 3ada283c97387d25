use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn compiles_simple_sum() -> Result<(), Box<dyn std::error::Error>> {
  let mut cmd = Command::cargo_bin("exprcc")?;
  cmd
    .arg("3+4")
    .assert()
    .success()
    .stdout(".globl main\nmain:\n  mov x0, 3\n  add x0, x0, 4\n  ret\n");
  Ok(())
}

#[test]
fn compiles_chain_with_whitespace() -> Result<(), Box<dyn std::error::Error>> {
  let mut cmd = Command::cargo_bin("exprcc")?;
  cmd.arg(" 12 + 34 - 5").assert().success().stdout(
    predicate::str::contains("  mov x0, 12\n  add x0, x0, 34\n  sub x0, x0, 5\n  ret\n"),
  );
  Ok(())
}

#[test]
fn no_arguments_is_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
  let mut cmd = Command::cargo_bin("exprcc")?;
  cmd
    .assert()
    .failure()
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("usage"));
  Ok(())
}

#[test]
fn extra_arguments_are_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
  let mut cmd = Command::cargo_bin("exprcc")?;
  cmd
    .arg("1+2")
    .arg("3+4")
    .assert()
    .failure()
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("usage"));
  Ok(())
}

#[test]
fn invalid_character_gets_a_caret_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
  let mut cmd = Command::cargo_bin("exprcc")?;
  cmd
    .arg("1 * 2")
    .assert()
    .failure()
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("1 * 2\n  ^ invalid token: '*'"));
  Ok(())
}

#[test]
fn dangling_operator_gets_a_caret_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
  let mut cmd = Command::cargo_bin("exprcc")?;
  cmd
    .arg("1 + ")
    .assert()
    .failure()
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("    ^ expected a number"));
  Ok(())
}
