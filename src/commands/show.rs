//! Show command - displays information.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::stager::PackageStager;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show resolved configuration, identity and staging layout
    Config,
}

/// Execute the show command.
pub fn cmd_show(project_root: &Path, config: &Config, target: ShowTarget) -> Result<()> {
    match target {
        ShowTarget::Config => {
            config.print();
            println!();
            match PackageStager::new(project_root, config) {
                Ok(stager) => {
                    println!(
                        "Package: {} {}",
                        stager.identity().name,
                        stager.identity().version
                    );
                    stager.layout().print();
                }
                Err(e) => {
                    println!("Package identity unavailable: {:#}", e);
                }
            }
        }
    }
    Ok(())
}
