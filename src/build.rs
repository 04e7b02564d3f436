use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::artifact;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("build toolchain not found: {0}")]
    ToolchainMissing(String),

    #[error("build command failed: {0}")]
    Command(String),

    #[error("failed to install built artifact: {0}")]
    Copy(String),
}

/// The compiler toolchain used to build the tool from a source checkout.
///
/// A narrow seam over subprocess invocation so tests can substitute fakes.
pub trait Toolchain {
    /// Cheap availability check, run before attempting a real build.
    fn probe(&self) -> Result<(), String>;

    /// Run a release build in `dir`, streaming output to the console.
    fn build_release(&self, dir: &Path) -> Result<(), String>;
}

pub struct CargoToolchain;

impl Toolchain for CargoToolchain {
    fn probe(&self) -> Result<(), String> {
        let status = Command::new("cargo")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| format!("could not run cargo: {e}"))?;

        if status.success() {
            Ok(())
        } else {
            Err(format!("cargo --version exited with {status}"))
        }
    }

    fn build_release(&self, dir: &Path) -> Result<(), String> {
        // Inherited stdio: the user watches the compile live.
        let status = Command::new("cargo")
            .args(["build", "--release"])
            .current_dir(dir)
            .status()
            .map_err(|e| format!("could not run cargo build: {e}"))?;

        if status.success() {
            Ok(())
        } else {
            Err(format!("cargo build --release exited with {status}"))
        }
    }
}

/// Compile the tool in `package_root` and move the produced binary into
/// `<package_root>/bin`.
///
/// Nothing is cleaned up on failure; a stale or absent install location is
/// left for the user to resolve by re-running.
pub fn build_from_source(
    toolchain: &dyn Toolchain,
    package_root: &Path,
    exe_suffix: bool,
) -> Result<(), BuildError> {
    toolchain.probe().map_err(BuildError::ToolchainMissing)?;

    let bin_dir = package_root.join("bin");
    fs::create_dir_all(&bin_dir).map_err(|e| {
        BuildError::Copy(format!("failed to create {}: {e}", bin_dir.display()))
    })?;

    toolchain
        .build_release(package_root)
        .map_err(BuildError::Command)?;

    let file_name = artifact::binary_file_name(exe_suffix);
    let built = package_root
        .join("target")
        .join("release")
        .join(&file_name);
    let dest = bin_dir.join(&file_name);

    fs::copy(&built, &dest).map_err(|e| {
        BuildError::Copy(format!(
            "failed to copy {} to {}: {e}",
            built.display(),
            dest.display()
        ))
    })?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    struct FakeToolchain {
        probe_ok: bool,
        build_ok: bool,
        artifact_name: &'static str,
    }

    impl Toolchain for FakeToolchain {
        fn probe(&self) -> Result<(), String> {
            if self.probe_ok {
                Ok(())
            } else {
                Err("cargo not found".to_string())
            }
        }

        fn build_release(&self, dir: &Path) -> Result<(), String> {
            if !self.build_ok {
                return Err("compilation failed".to_string());
            }
            let out = dir.join("target").join("release");
            fs::create_dir_all(&out).map_err(|e| e.to_string())?;
            fs::write(out.join(self.artifact_name), b"built-binary")
                .map_err(|e| e.to_string())?;
            Ok(())
        }
    }

    #[test]
    fn build_copies_artifact_into_bin() {
        let tmp = tempfile::tempdir().unwrap();
        let toolchain = FakeToolchain {
            probe_ok: true,
            build_ok: true,
            artifact_name: "rusky",
        };

        build_from_source(&toolchain, tmp.path(), false).unwrap();

        let installed = tmp.path().join("bin").join("rusky");
        assert_eq!(fs::read(&installed).unwrap(), b"built-binary");
    }

    #[test]
    fn build_preserves_exe_suffix() {
        let tmp = tempfile::tempdir().unwrap();
        let toolchain = FakeToolchain {
            probe_ok: true,
            build_ok: true,
            artifact_name: "rusky.exe",
        };

        build_from_source(&toolchain, tmp.path(), true).unwrap();

        assert!(tmp.path().join("bin").join("rusky.exe").exists());
    }

    #[test]
    fn missing_toolchain_is_a_distinct_error() {
        let tmp = tempfile::tempdir().unwrap();
        let toolchain = FakeToolchain {
            probe_ok: false,
            build_ok: true,
            artifact_name: "rusky",
        };

        let err = build_from_source(&toolchain, tmp.path(), false).unwrap_err();
        assert!(matches!(err, BuildError::ToolchainMissing(_)));
    }

    #[test]
    fn failed_build_command_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let toolchain = FakeToolchain {
            probe_ok: true,
            build_ok: false,
            artifact_name: "rusky",
        };

        let err = build_from_source(&toolchain, tmp.path(), false).unwrap_err();
        assert!(matches!(err, BuildError::Command(_)));
    }

    #[test]
    fn missing_built_artifact_is_a_copy_error() {
        let tmp = tempfile::tempdir().unwrap();
        // Build "succeeds" but produces a differently named artifact.
        let toolchain = FakeToolchain {
            probe_ok: true,
            build_ok: true,
            artifact_name: "wrong-name",
        };

        let err = build_from_source(&toolchain, tmp.path(), false).unwrap_err();
        assert!(matches!(err, BuildError::Copy(_)));
    }

    #[test]
    fn bin_dir_creation_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("bin")).unwrap();
        let toolchain = FakeToolchain {
            probe_ok: true,
            build_ok: true,
            artifact_name: "rusky",
        };

        build_from_source(&toolchain, tmp.path(), false).unwrap();
        // Re-running overwrites in place.
        build_from_source(&toolchain, tmp.path(), false).unwrap();
    }
}
