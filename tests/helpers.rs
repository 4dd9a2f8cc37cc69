//! Shared test utilities for debstage tests.

#![allow(dead_code)]

use std::env;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use debstage::config::Config;
use debstage::stager::PackageStager;

/// Test environment: a temporary project root with a version descriptor,
/// a metadata overlay directory, and a bin directory for stub tools.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Simulated project root
    pub project_root: PathBuf,
    /// Directory for stub external tools, to be prepended to PATH
    pub stub_bin: PathBuf,
}

impl TestEnv {
    /// Create a project for the given package identity, with overlay
    /// metadata files `control` and `rules` already in place.
    pub fn new(name: &str, version: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let project_root = temp_dir.path().join("project");
        let stub_bin = temp_dir.path().join("bin");

        fs::create_dir_all(&project_root).expect("Failed to create project root");
        fs::create_dir_all(&stub_bin).expect("Failed to create stub bin dir");

        fs::write(
            project_root.join("version.json"),
            format!(r#"{{ "name": "{}", "version": "{}" }}"#, name, version),
        )
        .expect("Failed to write version descriptor");

        let overlay = project_root.join("debian");
        fs::create_dir_all(&overlay).expect("Failed to create overlay dir");
        fs::write(overlay.join("control"), "Source: overlay\n").expect("Failed to write control");
        fs::write(overlay.join("rules"), "overlay-rules\n").expect("Failed to write rules");

        Self {
            _temp_dir: temp_dir,
            project_root,
            stub_bin,
        }
    }

    /// Configuration matching the test project.
    pub fn config(&self) -> Config {
        Config {
            packager_name: Some("Test Packager".to_string()),
            packager_email: Some("packaging@example.com".to_string()),
            build_dir: "deb_dist".to_string(),
            version_file: "version.json".to_string(),
            metadata_dir: "debian".to_string(),
        }
    }

    /// Build a stager for the test project.
    pub fn stager(&self) -> PackageStager {
        PackageStager::new(&self.project_root, &self.config()).expect("Failed to create stager")
    }
}

/// Write an executable shell script stub.
pub fn write_stub(path: &Path, script: &str) {
    fs::write(path, script).expect("Failed to write stub tool");
    let mut perms = fs::metadata(path)
        .expect("Failed to stat stub tool")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod stub tool");
}

/// Install working stubs for make, dh_make and debuild.
///
/// The make stub honours only the `dist` target and produces a real
/// gzipped tarball named `<name>-<version>.tar.gz` in its working
/// directory, so the pipeline's tar extraction runs for real.
pub fn install_stub_tools(env: &TestEnv, name: &str, version: &str) {
    let pkg = format!("{}-{}", name, version);
    write_stub(
        &env.stub_bin.join("make"),
        &format!(
            "#!/bin/sh\nset -e\n[ \"$1\" = dist ] || exit 2\nrm -rf {pkg}\nmkdir {pkg}\necho hello > {pkg}/hello.txt\ntar czf {pkg}.tar.gz {pkg}\nrm -rf {pkg}\n"
        ),
    );
    write_stub(
        &env.stub_bin.join("dh_make"),
        "#!/bin/sh\nmkdir -p debian\nprintf 'Source: skeleton\\n' > debian/control\nprintf 'skeleton-changelog\\n' > debian/changelog\nprintf '%s\\n' \"$DEBFULLNAME\" > debian/packager\n",
    );
    write_stub(
        &env.stub_bin.join("debuild"),
        "#!/bin/sh\npwd > debuild-ran-here.txt\nprintf '%s\\n' \"$DEBEMAIL\" > debuild-email.txt\n",
    );
}

/// Prepends a directory to PATH and restores the old value on drop.
///
/// Tests using this must be marked #[serial]: PATH is process-global.
pub struct PathGuard {
    original: OsString,
}

impl PathGuard {
    pub fn prepend(dir: &Path) -> Self {
        let original = env::var_os("PATH").unwrap_or_default();
        let mut paths = vec![dir.to_path_buf()];
        paths.extend(env::split_paths(&original));
        let joined = env::join_paths(paths).expect("Failed to join PATH");
        env::set_var("PATH", &joined);
        Self { original }
    }
}

impl Drop for PathGuard {
    fn drop(&mut self) {
        env::set_var("PATH", &self.original);
    }
}
