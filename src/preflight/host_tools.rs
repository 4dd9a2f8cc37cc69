//! Host tool availability checks.

use super::types::CheckResult;
use crate::stager::{BUILD_TOOL, EXTRACT_TOOL, PACKAGE_BUILD_TOOL, SKELETON_TOOL};

/// Check the external tools the pipeline sequences are installed.
pub fn check_host_tools() -> Vec<CheckResult> {
    let required_tools = [
        (BUILD_TOOL, "make", "Required to build the source distribution"),
        (EXTRACT_TOOL, "tar", "Required to extract the orig tarball"),
        (SKELETON_TOOL, "dh-make", "Required to scaffold debian/ metadata"),
        (
            PACKAGE_BUILD_TOOL,
            "devscripts",
            "Required to drive the package build",
        ),
    ];

    required_tools
        .into_iter()
        .map(|(tool, package, purpose)| check_tool_exists(tool, package, purpose))
        .collect()
}

/// Check if a tool exists in PATH.
fn check_tool_exists(tool: &str, package: &str, purpose: &str) -> CheckResult {
    match which::which(tool) {
        Ok(path) => CheckResult::pass_with(tool, &path.display().to_string()),
        Err(_) => CheckResult::fail(
            tool,
            &format!("Not found. Install '{}' package. {}", package, purpose),
        ),
    }
}
