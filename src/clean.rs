//! Staging artifact cleaning.

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::StageError;
use crate::identity::PackageIdentity;
use crate::layout::StagingLayout;

/// Remove the staging root and any stray dist tarball left at the
/// project root by an aborted run.
pub fn clean_staging(project_root: &Path, config: &Config) -> Result<()> {
    let identity = PackageIdentity::load(&project_root.join(&config.version_file))?;
    let layout = StagingLayout::new(project_root, &identity, &config.build_dir);

    let mut cleaned = false;

    if layout.build_root.exists() {
        println!("Removing {}...", layout.build_root.display());
        fs::remove_dir_all(&layout.build_root).map_err(|e| {
            StageError::fs(
                format!("Failed to remove {}", layout.build_root.display()),
                e,
            )
        })?;
        cleaned = true;
    }

    if layout.raw_archive.exists() {
        println!("Removing {}...", layout.raw_archive.display());
        fs::remove_file(&layout.raw_archive).map_err(|e| {
            StageError::fs(format!("Failed to remove {}", layout.raw_archive.display()), e)
        })?;
        cleaned = true;
    }

    if cleaned {
        println!("Clean complete.");
    } else {
        println!("Nothing to clean.");
    }
    Ok(())
}
