//! Custom cargo commands for the quizbank crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask data      - Validate the bundled question data
//!   cargo xtask check     - Quick check (cargo check + tests + clippy)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("data") => data()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + data validation)
  test      Run all Rust tests
  data      Validate the fixture banks (and ./data if present)
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Quizbank Verification Suite");
    println!("==========================================\n");

    println!("[1/3] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/3] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/3] Validating question data...");
    data()?;
    println!("✓ Question data valid\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// The clean fixtures must validate; the invalid ones must not.
fn data() -> Result<()> {
    let root = project_root()?;

    validate(&root.join("data/fixtures"), true)?;
    validate(&root.join("data/fixtures-invalid"), false)?;

    let live = root.join("data/quizzes");
    if live.exists() {
        validate(&root.join("data"), true)?;
    } else {
        println!("  (no live data tree, skipping)");
    }

    Ok(())
}

fn validate(dir: &std::path::Path, expect_clean: bool) -> Result<()> {
    let dir_str = dir.to_string_lossy();
    let status = Command::new("cargo")
        .args(["run", "--quiet", "--", "validate", "--data", &dir_str])
        .current_dir(project_root()?)
        .status()
        .with_context(|| format!("Failed to validate {}", dir_str))?;

    match (status.success(), expect_clean) {
        (true, true) | (false, false) => Ok(()),
        (false, true) => bail!("{} has validation errors", dir_str),
        (true, false) => bail!("{} was expected to fail validation", dir_str),
    }
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
