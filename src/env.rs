use std::env;
use std::path::PathBuf;

/// Snapshot of the host details consulted during a run.
///
/// Built once at startup; components take this (or values derived from it)
/// as arguments instead of reading ambient process state, so tests can
/// construct arbitrary environments.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Raw OS identifier (`std::env::consts::OS` on a real host).
    pub os: String,
    /// Raw CPU architecture identifier (`std::env::consts::ARCH` on a real host).
    pub arch: String,
    /// Directory the package was unpacked into; install scripts run here.
    pub package_root: PathBuf,
    /// Working directory, consulted by the removal advisor.
    pub cwd: PathBuf,
}

impl Environment {
    pub fn from_host() -> Result<Self, String> {
        let cwd = env::current_dir()
            .map_err(|e| format!("could not determine working directory: {e}"))?;

        Ok(Self {
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            package_root: cwd.clone(),
            cwd,
        })
    }

    /// A `Cargo.toml` in the package root marks a development checkout,
    /// where building from source is preferred over downloading.
    #[must_use]
    pub fn is_dev_checkout(&self) -> bool {
        self.package_root.join("Cargo.toml").exists()
    }
}
