//! Preflight checks for the staging pipeline.
//!
//! Validates host tools and project inputs before any filesystem side
//! effect. Run with `debstage preflight` or implicitly by `debstage build`.

mod host_tools;
mod project;
mod types;

use std::path::Path;

use anyhow::{bail, Result};

use crate::config::Config;

pub use types::PreflightReport;

/// Run all preflight checks.
pub fn run_preflight(project_root: &Path, config: &Config) -> PreflightReport {
    let mut checks = Vec::new();

    println!("Running preflight checks...\n");

    println!("Checking host tools...");
    checks.extend(host_tools::check_host_tools());

    println!("Checking project inputs...");
    checks.extend(project::check_project_inputs(project_root, config));

    println!();

    PreflightReport { checks }
}

/// Run preflight and bail if any checks fail.
pub fn run_preflight_or_fail(project_root: &Path, config: &Config) -> Result<()> {
    let report = run_preflight(project_root, config);
    report.print();

    if !report.all_passed() {
        bail!(
            "Preflight failed: {} check(s) failed. Fix the issues above before staging.",
            report.fail_count()
        );
    }

    println!("All preflight checks passed!\n");
    Ok(())
}
