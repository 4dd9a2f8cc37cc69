//! The staging pipeline: seven sequential steps that turn a source tree
//! into a Debian source/binary package.
//!
//! Every step is fail-fast. A failure aborts the run and leaves the
//! staging directory in whatever partial state the failed step produced,
//! so the user can inspect and resume manually. Each external tool is
//! given an explicit working directory; the process CWD is never changed,
//! so the stager is safe to invoke more than once per process.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::StageError;
use crate::identity::PackageIdentity;
use crate::layout::StagingLayout;
use crate::process::Cmd;

/// External tools the pipeline sequences. Resolved through PATH.
pub const BUILD_TOOL: &str = "make";
pub const EXTRACT_TOOL: &str = "tar";
pub const SKELETON_TOOL: &str = "dh_make";
pub const PACKAGE_BUILD_TOOL: &str = "debuild";

/// Runs the staging pipeline for one project.
pub struct PackageStager {
    project_root: PathBuf,
    config: Config,
    identity: PackageIdentity,
    layout: StagingLayout,
}

impl PackageStager {
    /// Load the package identity and compute the staging layout.
    ///
    /// No filesystem side effects happen here; an invalid version
    /// descriptor aborts before anything is created.
    pub fn new(project_root: &Path, config: &Config) -> Result<Self> {
        let identity = PackageIdentity::load(&project_root.join(&config.version_file))?;
        let layout = StagingLayout::new(project_root, &identity, &config.build_dir);

        Ok(Self {
            project_root: project_root.to_path_buf(),
            config: config.clone(),
            identity,
            layout,
        })
    }

    pub fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    pub fn layout(&self) -> &StagingLayout {
        &self.layout
    }

    /// Run all seven steps in order.
    pub fn run(&self) -> Result<()> {
        println!(
            "Staging {} {} into {}",
            self.identity.name,
            self.identity.version,
            self.layout.build_root.display()
        );

        self.ensure_staging_dir()?;
        self.build_source_artifact()?;
        self.stage_artifact()?;
        self.extract_artifact()?;
        self.generate_skeleton()?;
        self.overlay_metadata()?;
        self.run_package_build()?;

        println!(
            "Done. Package artifacts are in {}",
            self.layout.build_root.display()
        );
        Ok(())
    }

    /// Step 1: create the extraction target directory (and ancestors).
    ///
    /// Idempotent: a directory surviving from a prior partial run is
    /// reused, not an error. Anything else (a file in the way,
    /// permissions) is fatal.
    pub fn ensure_staging_dir(&self) -> Result<()> {
        let dir = &self.layout.extracted_source_dir;
        fs::create_dir_all(dir).map_err(|e| {
            StageError::fs(format!("Failed to create staging directory {}", dir.display()), e)
        })?;
        Ok(())
    }

    /// Step 2: `make dist` in the project root.
    pub fn build_source_artifact(&self) -> Result<()> {
        println!("Building source distribution...");
        let status = Cmd::new(BUILD_TOOL)
            .arg("dist")
            .dir(&self.project_root)
            .allow_fail()
            .run_interactive()?;

        if !status.success() {
            return Err(StageError::BuildTool {
                code: status.code().unwrap_or(-1),
            }
            .into());
        }

        // Don't trust the exit code alone; a dist target that builds the
        // wrong artifact name would otherwise surface as a confusing
        // rename failure later.
        if !self.layout.raw_archive.is_file() {
            return Err(StageError::MissingArtifact {
                step: "`make dist`",
                path: self.layout.raw_archive.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Step 3: move the dist tarball to its canonical orig-tarball name
    /// under the staging root.
    ///
    /// Rename first; fall back to copy+remove when the staging root is on
    /// a different filesystem.
    pub fn stage_artifact(&self) -> Result<()> {
        let src = &self.layout.raw_archive;
        let dst = &self.layout.staged_archive;

        if !src.is_file() {
            return Err(StageError::fs(
                format!("Source archive {} is missing", src.display()),
                std::io::Error::from(std::io::ErrorKind::NotFound),
            )
            .into());
        }

        println!(
            "Staging {} as {}",
            self.layout.raw_archive_name, self.layout.source_archive_name
        );

        if fs::rename(src, dst).is_err() {
            fs::copy(src, dst).map_err(|e| {
                StageError::fs(
                    format!("Failed to copy {} to {}", src.display(), dst.display()),
                    e,
                )
            })?;
            fs::remove_file(src).map_err(|e| {
                StageError::fs(format!("Failed to remove {}", src.display()), e)
            })?;
        }
        Ok(())
    }

    /// Step 4: unpack the staged orig tarball inside the staging root.
    pub fn extract_artifact(&self) -> Result<()> {
        println!("Extracting {}...", self.layout.source_archive_name);
        let status = Cmd::new(EXTRACT_TOOL)
            .arg("-xzvf")
            .arg(&self.layout.source_archive_name)
            .dir(&self.layout.build_root)
            .allow_fail()
            .run_interactive()?;

        if !status.success() {
            return Err(StageError::Extraction {
                archive: self.layout.source_archive_name.clone(),
                code: status.code().unwrap_or(-1),
            }
            .into());
        }

        if !self.layout.extracted_source_dir.is_dir() {
            return Err(StageError::MissingArtifact {
                step: "extraction",
                path: self.layout.extracted_source_dir.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Step 5: scaffold debian/ metadata with dh_make (single binary,
    /// non-interactive, BSD copyright).
    ///
    /// Policy for re-runs: if debian/ already exists in the extracted
    /// tree, skip dh_make entirely. The overlay step refreshes every
    /// file the project actually cares about.
    pub fn generate_skeleton(&self) -> Result<()> {
        let debian_dir = self.layout.extracted_source_dir.join("debian");
        if debian_dir.is_dir() {
            println!("debian/ already present, skipping skeleton generation.");
            return Ok(());
        }

        println!("Generating packaging skeleton...");
        let result = self
            .packager_cmd(SKELETON_TOOL)
            .args(["--single", "--yes", "--copyright", "bsd"])
            .dir(&self.layout.extracted_source_dir)
            .allow_fail()
            .run()?;

        if !result.success() {
            let mut diagnostics = result.stderr_trimmed().to_string();
            if diagnostics.is_empty() {
                diagnostics = result.stdout.trim().to_string();
            }
            return Err(StageError::SkeletonGeneration {
                code: result.code(),
                diagnostics,
            }
            .into());
        }

        if !debian_dir.is_dir() {
            return Err(StageError::MissingArtifact {
                step: "dh_make",
                path: debian_dir,
            }
            .into());
        }
        Ok(())
    }

    /// Step 6: copy project-supplied metadata files over the skeleton.
    ///
    /// One directory level, regular files only. Same-named skeleton files
    /// are overwritten; skeleton files without an overlay counterpart are
    /// left alone. A copy failure partway through is surfaced as-is, not
    /// rolled back.
    pub fn overlay_metadata(&self) -> Result<()> {
        let overlay_src = self.project_root.join(&self.config.metadata_dir);
        let overlay_dst = self.layout.extracted_source_dir.join("debian");

        println!("Overlaying packaging metadata from {}...", overlay_src.display());

        let entries = fs::read_dir(&overlay_src).map_err(|e| {
            StageError::fs(
                format!("Failed to read metadata directory {}", overlay_src.display()),
                e,
            )
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                StageError::fs(
                    format!("Failed to read metadata directory {}", overlay_src.display()),
                    e,
                )
            })?;
            let src = entry.path();
            if !src.is_file() {
                continue;
            }
            let dst = overlay_dst.join(entry.file_name());
            // fs::copy carries permission bits along with the contents.
            fs::copy(&src, &dst).map_err(|e| {
                StageError::fs(
                    format!("Failed to copy {} to {}", src.display(), dst.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// Step 7: run the package build driver in the extracted tree.
    ///
    /// debuild is the slowest and most failure-prone step; its output
    /// goes straight to the terminal.
    pub fn run_package_build(&self) -> Result<()> {
        println!("Running {}...", PACKAGE_BUILD_TOOL);
        let status = self
            .packager_cmd(PACKAGE_BUILD_TOOL)
            .dir(&self.layout.extracted_source_dir)
            .allow_fail()
            .run_interactive()?;

        if !status.success() {
            return Err(StageError::PackageBuild {
                code: status.code().unwrap_or(-1),
            }
            .into());
        }
        Ok(())
    }

    /// Command builder with packager identity in the tool's environment.
    fn packager_cmd(&self, program: &str) -> Cmd {
        let mut cmd = Cmd::new(program);
        if let Some(name) = &self.config.packager_name {
            cmd = cmd.env("DEBFULLNAME", name);
        }
        if let Some(email) = &self.config.packager_email {
            cmd = cmd.env("DEBEMAIL", email);
        }
        cmd
    }
}
