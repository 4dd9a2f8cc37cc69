//! Project input checks: version descriptor and metadata overlay.

use std::path::Path;

use super::types::CheckResult;
use crate::config::Config;
use crate::identity::PackageIdentity;

/// Check the project supplies what the pipeline needs.
pub fn check_project_inputs(project_root: &Path, config: &Config) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let version_file = project_root.join(&config.version_file);
    match PackageIdentity::load(&version_file) {
        Ok(identity) => results.push(CheckResult::pass_with(
            "version descriptor",
            &format!("{} {}", identity.name, identity.version),
        )),
        Err(e) => results.push(CheckResult::fail("version descriptor", &format!("{:#}", e))),
    }

    let metadata_dir = project_root.join(&config.metadata_dir);
    if metadata_dir.is_dir() {
        results.push(CheckResult::pass_with(
            "metadata overlay",
            &metadata_dir.display().to_string(),
        ));
    } else {
        results.push(CheckResult::fail(
            "metadata overlay",
            &format!(
                "{} not found - the overlay step needs the project's debian/ files",
                metadata_dir.display()
            ),
        ));
    }

    if config.packager_name.is_none() || config.packager_email.is_none() {
        results.push(CheckResult::warn(
            "packager identity",
            "DEBFULLNAME/DEBEMAIL unset - generated metadata will use tool defaults",
        ));
    } else {
        results.push(CheckResult::pass("packager identity"));
    }

    results
}
