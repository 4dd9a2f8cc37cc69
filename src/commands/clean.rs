//! Clean command - removes staging artifacts.

use anyhow::Result;
use std::path::Path;

use crate::clean;
use crate::config::Config;

/// Execute the clean command.
pub fn cmd_clean(project_root: &Path, config: &Config) -> Result<()> {
    clean::clean_staging(project_root, config)
}
