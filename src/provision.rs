use std::fs;
use std::path::Path;

use crate::artifact::{self, ArtifactDescriptor, BINARY_NAME};
use crate::build::{self, Toolchain};
use crate::env::Environment;
use crate::manifest;
use crate::platform::{self, Platform};
use crate::transport::Transport;
use crate::InstallerError;

/// Where the acquisition flow currently stands.
///
/// `Downloading` moves to `FallbackBuild` on transport failure; the other
/// phases are entry points into the build path and never move back to
/// downloading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    DevCheckout,
    Downloading,
    FallbackBuild,
}

impl Phase {
    #[must_use]
    pub const fn after_download_failure(self) -> Self {
        match self {
            Self::Downloading => Self::FallbackBuild,
            other => other,
        }
    }
}

/// How the binary ended up installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Downloaded,
    BuiltFromSource,
}

#[must_use]
pub const fn initial_phase(dev_checkout: bool) -> Phase {
    if dev_checkout {
        Phase::DevCheckout
    } else {
        Phase::Downloading
    }
}

/// Install the tool binary: try the prebuilt release first, fall back to a
/// source build, or build directly inside a development checkout.
///
/// Download failures are absorbed by the fallback; platform, metadata, and
/// build errors are terminal.
pub fn provision(
    env: &Environment,
    transport: &dyn Transport,
    toolchain: &dyn Toolchain,
) -> Result<Outcome, InstallerError> {
    println!("🐺 Installing {BINARY_NAME}...");

    let mut phase = initial_phase(env.is_dev_checkout());

    if phase == Phase::Downloading {
        let platform = platform::resolve(&env.os, &env.arch)
            .map_err(InstallerError::UnsupportedPlatform)?;
        let version = manifest::declared_version(&env.package_root)
            .map_err(InstallerError::Metadata)?;
        let desc = artifact::locate(platform, &version, &env.package_root);

        println!("📦 Downloading {BINARY_NAME} binary for {platform}...");

        match fetch_artifact(&desc, platform, transport) {
            Ok(()) => {
                println!("✅ {BINARY_NAME} binary installed successfully!");
                println!("🚀 Run \"{BINARY_NAME} init\" to get started.");
                return Ok(Outcome::Downloaded);
            }
            Err(e) => {
                eprintln!("❌ Failed to download {BINARY_NAME} binary: {e}");
                eprintln!("Falling back to building from source...");
                phase = phase.after_download_failure();
            }
        }
    }

    match phase {
        Phase::DevCheckout => {
            println!("🔨 Building {BINARY_NAME} from source (development checkout detected)...");
        }
        _ => println!("🔨 Building {BINARY_NAME} from source..."),
    }

    let exe_suffix = env.os == "windows";
    build::build_from_source(toolchain, &env.package_root, exe_suffix)?;

    println!("✅ {BINARY_NAME} built and installed successfully!");
    println!("🚀 Run \"{BINARY_NAME} init\" to get started.");
    Ok(Outcome::BuiltFromSource)
}

/// Fetch the release binary into the install location. Any error here is
/// recoverable via the build fallback.
fn fetch_artifact(
    desc: &ArtifactDescriptor,
    platform: Platform,
    transport: &dyn Transport,
) -> Result<(), String> {
    fs::create_dir_all(&desc.bin_dir)
        .map_err(|e| format!("failed to create {}: {e}", desc.bin_dir.display()))?;

    transport.fetch(&desc.url, &desc.dest)?;

    if !platform.is_windows() {
        make_executable(&desc.dest)?;
    }

    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), String> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| format!("failed to set permissions on {}: {e}", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), String> {
    Ok(())
}
