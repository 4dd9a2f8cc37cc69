//! Build command - runs the full staging pipeline.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::preflight;
use crate::stager::PackageStager;

/// Execute the build command.
pub fn cmd_build(project_root: &Path, config: &Config, skip_preflight: bool) -> Result<()> {
    if skip_preflight {
        println!("Skipping preflight checks.");
    } else {
        preflight::run_preflight_or_fail(project_root, config)?;
    }

    let stager = PackageStager::new(project_root, config)?;
    stager.run()
}
