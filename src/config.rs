//! Configuration management for debstage.
//!
//! Reads configuration from a .env file in the project root and from
//! environment variables. Environment variables take precedence over the
//! .env file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default staging root directory name.
pub const DEFAULT_BUILD_DIR: &str = "deb_dist";

/// Default version descriptor file name.
pub const DEFAULT_VERSION_FILE: &str = "version.json";

/// Default metadata overlay directory name.
pub const DEFAULT_METADATA_DIR: &str = "debian";

/// Debstage configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Packager full name, injected as DEBFULLNAME into dh_make/debuild.
    pub packager_name: Option<String>,
    /// Packager email, injected as DEBEMAIL into dh_make/debuild.
    pub packager_email: Option<String>,
    /// Staging root directory name (default: deb_dist).
    pub build_dir: String,
    /// Version descriptor file, relative to the project root.
    pub version_file: String,
    /// Metadata overlay directory, relative to the project root.
    pub metadata_dir: String,
}

impl Config {
    /// Load configuration from a .env file and the environment.
    ///
    /// The .env file is looked up in the project root only; shell
    /// environment variables override anything it sets.
    pub fn load(project_root: &Path) -> Self {
        let mut env_vars = HashMap::new();

        let env_path = project_root.join(".env");
        if env_path.exists() {
            if let Ok(content) = fs::read_to_string(&env_path) {
                for line in content.lines() {
                    let line = line.trim();
                    // Skip comments and empty lines
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    // Parse KEY=value
                    if let Some((key, value)) = line.split_once('=') {
                        let key = key.trim();
                        let value = value.trim();
                        // Remove quotes if present
                        let value = value.trim_matches('"').trim_matches('\'');
                        env_vars.insert(key.to_string(), value.to_string());
                    }
                }
            }
        }

        // Environment variables override .env file
        for (key, value) in std::env::vars() {
            env_vars.insert(key, value);
        }

        let packager_name = env_vars.get("DEBFULLNAME").cloned().filter(|s| !s.is_empty());
        let packager_email = env_vars.get("DEBEMAIL").cloned().filter(|s| !s.is_empty());

        let build_dir = env_vars
            .get("DEB_BUILD_DIR")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BUILD_DIR.to_string());

        let version_file = env_vars
            .get("VERSION_FILE")
            .cloned()
            .unwrap_or_else(|| DEFAULT_VERSION_FILE.to_string());

        let metadata_dir = env_vars
            .get("DEB_METADATA_DIR")
            .cloned()
            .unwrap_or_else(|| DEFAULT_METADATA_DIR.to_string());

        Self {
            packager_name,
            packager_email,
            build_dir,
            version_file,
            metadata_dir,
        }
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!(
            "  DEBFULLNAME: {}",
            self.packager_name.as_deref().unwrap_or("(unset)")
        );
        println!(
            "  DEBEMAIL: {}",
            self.packager_email.as_deref().unwrap_or("(unset)")
        );
        println!("  DEB_BUILD_DIR: {}", self.build_dir);
        println!("  VERSION_FILE: {}", self.version_file);
        println!("  DEB_METADATA_DIR: {}", self.metadata_dir);
    }
}
