//! Custom cargo commands for the sortnet crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask fuzz      - Run every fuzz target briefly
//!   cargo xtask check     - Quick check (no Kani)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["verify_differential", "compare_exchange", "network_parsing"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz()?,
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
  verify    Run full verification suite (tests + clippy + kernel copy + Kani)
  test      Run all Rust tests
  kani      Run Kani proofs only
  fuzz      Run each fuzz target for 60 seconds (needs cargo-fuzz)
  check     Quick check (cargo test + clippy, no Kani)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Sortnet Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract call sites...");
    check_contract_calls()?;
    println!("✓ Contracts wired into the engine\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Checking the proof crate's kernel copy...");
    verify_kernel_copy()?;
    println!("✓ Kernel copy in sync\n");

    println!("[5/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs pass\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Run the standalone proof crate: its unit tests always, Kani when installed.
fn kani() -> Result<()> {
    let proofs = project_root()?.join("kani-proofs");
    if !proofs.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }

    run_in(&proofs, "cargo", &["test", "--quiet"])?;

    let has_kani = Command::new("cargo")
        .args(["kani", "--version"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    if !has_kani {
        println!("  (cargo-kani not installed, ran unit tests only)");
        return Ok(());
    }
    run_in(&proofs, "cargo", &["kani"])
}

fn fuzz() -> Result<()> {
    let root = project_root()?;
    for target in FUZZ_TARGETS {
        println!("fuzzing {} ...", target);
        run_in(
            &root,
            "cargo",
            &["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"],
        )?;
    }
    Ok(())
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

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
        Err(_) => env::current_dir().context("no working directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_in(&project_root()?, "cargo", args)
}

fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run {} {:?}", program, args))?;

    if !status.success() {
        bail!("{} {:?} failed", program, args);
    }

    Ok(())
}

/// The kernel and merge paths must keep calling their debug contracts.
fn check_contract_calls() -> Result<()> {
    let engine = project_root()?.join("src/engine");

    let output = Command::new("grep")
        .args(["-r", "check_", "--include=*.rs", "-h"])
        .current_dir(&engine)
        .output()
        .context("Failed to run grep")?;

    let calls = String::from_utf8_lossy(&output.stdout);
    for contract in ["check_patterns_sorted", "check_cluster_partition"] {
        if !calls.contains(&format!("{}(", contract)) {
            bail!("{} is no longer called from src/engine", contract);
        }
    }

    Ok(())
}

/// The proof crate carries its own copy of `is_sorted_pattern`; its body must
/// match the engine's.
fn verify_kernel_copy() -> Result<()> {
    let root = project_root()?;

    let engine = std::fs::read_to_string(root.join("src/engine/patterns.rs"))
        .context("Failed to read src/engine/patterns.rs")?;
    let proofs_path = root.join("kani-proofs/src/lib.rs");
    if !proofs_path.exists() {
        println!("  (no kani-proofs crate, skipping kernel check)");
        return Ok(());
    }
    let proofs = std::fs::read_to_string(&proofs_path).context("Failed to read kani-proofs")?;

    let ours = extract_fn_body(&engine, "is_sorted_pattern");
    let theirs = extract_fn_body(&proofs, "is_sorted_pattern");
    match (ours, theirs) {
        (Some(a), Some(b)) if a == b => Ok(()),
        (Some(a), Some(b)) => bail!("is_sorted_pattern differs:\n  engine: {}\n  proofs: {}", a, b),
        _ => bail!("is_sorted_pattern not found in both crates"),
    }
}

/// Body lines of `fn name`, whitespace-normalized, up to the closing brace.
fn extract_fn_body(content: &str, name: &str) -> Option<String> {
    let signature = format!("fn {}(", name);
    let mut lines = content.lines().skip_while(|l| !l.contains(&signature));
    lines.next()?;
    let body: Vec<&str> = lines
        .take_while(|l| l.trim() != "}")
        .map(str::trim)
        .collect();
    Some(body.join(" "))
}
