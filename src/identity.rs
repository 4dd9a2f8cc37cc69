//! Package identity: the (name, version) pair that determines every
//! derived artifact and directory name.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Identity of the package being staged, read from the project's
/// version descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageIdentity {
    pub name: String,
    pub version: String,
}

impl PackageIdentity {
    /// Load and validate the identity from a JSON version descriptor:
    /// `{ "name": "foo", "version": "1.0" }`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| {
            format!("Failed to read version descriptor {}", path.display())
        })?;
        let identity: Self = serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse version descriptor {}", path.display())
        })?;
        identity.validate()?;
        Ok(identity)
    }

    /// Reject values that would corrupt derived paths or tool arguments.
    fn validate(&self) -> Result<()> {
        for (field, value) in [("name", &self.name), ("version", &self.version)] {
            if value.is_empty() {
                bail!("version descriptor: '{}' must not be empty", field);
            }
            if value.contains('/') || value.contains("..") {
                bail!(
                    "version descriptor: '{}' must not contain path separators: {:?}",
                    field,
                    value
                );
            }
            if value.chars().any(char::is_whitespace) {
                bail!(
                    "version descriptor: '{}' must not contain whitespace: {:?}",
                    field,
                    value
                );
            }
        }
        Ok(())
    }
}
