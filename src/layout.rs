//! Staging layout: every path the pipeline touches, computed once from
//! the project root, the package identity, and the staging root name.

use std::path::{Path, PathBuf};

use crate::identity::PackageIdentity;

/// Derived paths for one staging run. Pure function of its inputs;
/// nothing here is mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingLayout {
    /// Absolute staging root, e.g. `<project>/deb_dist`.
    pub build_root: PathBuf,
    /// The build tool's default dist tarball name, `<name>-<version>.tar.gz`.
    pub raw_archive_name: String,
    /// Where `make dist` leaves the tarball: `<project>/<raw_archive_name>`.
    pub raw_archive: PathBuf,
    /// Canonical orig tarball name, `<name>_<version>.orig.tar.gz`.
    pub source_archive_name: String,
    /// The staged orig tarball: `<build_root>/<source_archive_name>`.
    pub staged_archive: PathBuf,
    /// Relative extracted directory name, `<name>-<version>`.
    pub package_dir: String,
    /// Absolute extracted source tree: `<build_root>/<package_dir>`.
    pub extracted_source_dir: PathBuf,
}

impl StagingLayout {
    pub fn new(project_root: &Path, identity: &PackageIdentity, build_dir: &str) -> Self {
        let build_root = project_root.join(build_dir);
        let package_dir = format!("{}-{}", identity.name, identity.version);
        let raw_archive_name = format!("{}.tar.gz", package_dir);
        let source_archive_name =
            format!("{}_{}.orig.tar.gz", identity.name, identity.version);

        Self {
            raw_archive: project_root.join(&raw_archive_name),
            staged_archive: build_root.join(&source_archive_name),
            extracted_source_dir: build_root.join(&package_dir),
            build_root,
            raw_archive_name,
            source_archive_name,
            package_dir,
        }
    }

    /// Print the derived layout for debugging.
    pub fn print(&self) {
        println!("Staging layout:");
        println!("  build root:       {}", self.build_root.display());
        println!("  dist tarball:     {}", self.raw_archive.display());
        println!("  orig tarball:     {}", self.staged_archive.display());
        println!(
            "  extracted source: {}",
            self.extracted_source_dir.display()
        );
    }
}
