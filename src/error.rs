//! Error taxonomy for the staging pipeline.
//!
//! Every pipeline failure is fatal; these variants exist so the CLI can
//! report which step failed and with what exit code, while the external
//! tool's own output reaches the user unmodified.

use std::path::PathBuf;
use thiserror::Error;

/// A fatal staging pipeline error.
#[derive(Debug, Error)]
pub enum StageError {
    /// Directory creation, rename, or copy failed.
    #[error("{context}")]
    Filesystem {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// `make dist` exited non-zero.
    #[error("`make dist` failed with exit code {code}")]
    BuildTool { code: i32 },

    /// Tarball extraction exited non-zero.
    #[error("extraction of {archive} failed with exit code {code}")]
    Extraction { archive: String, code: i32 },

    /// `dh_make` exited non-zero.
    #[error("dh_make failed with exit code {code}:\n{diagnostics}")]
    SkeletonGeneration { code: i32, diagnostics: String },

    /// `debuild` exited non-zero.
    #[error("debuild failed with exit code {code}")]
    PackageBuild { code: i32 },

    /// An external step exited zero but its declared output is missing.
    #[error("{step} did not produce {path}")]
    MissingArtifact { step: &'static str, path: PathBuf },
}

impl StageError {
    /// Wrap an I/O error with a description of the operation that failed.
    pub fn fs(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Filesystem {
            context: context.into(),
            source,
        }
    }
}
