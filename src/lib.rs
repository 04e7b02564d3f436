mod artifact;
mod build;
mod env;
mod manifest;
mod platform;
mod provision;
mod transport;
mod uninstall;

pub use build::{BuildError, CargoToolchain, Toolchain};
pub use env::Environment;
pub use provision::{initial_phase, provision, Outcome, Phase};
pub use transport::{HttpTransport, Transport};
pub use uninstall::advise;

#[derive(Debug, thiserror::Error)]
pub enum InstallerError {
    #[error("platform detection failed: {0}")]
    UnsupportedPlatform(String),

    #[error("version lookup failed: {0}")]
    Metadata(String),

    #[error("build toolchain not found: {0}. Please make sure Rust is installed: https://rustup.rs/")]
    ToolchainMissing(String),

    #[error("build failed: {0}")]
    Build(String),
}

impl From<BuildError> for InstallerError {
    fn from(e: BuildError) -> Self {
        match e {
            BuildError::ToolchainMissing(msg) => Self::ToolchainMissing(msg),
            BuildError::Command(msg) | BuildError::Copy(msg) => Self::Build(msg),
        }
    }
}
