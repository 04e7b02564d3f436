use std::path::{Path, PathBuf};

use crate::platform::Platform;

pub const BINARY_NAME: &str = "rusky";
pub const REPO_URL: &str = "https://github.com/dan/rusky";

/// Where a release binary lives remotely and where it lands locally.
///
/// Derived from platform + version alone; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub url: String,
    pub bin_dir: PathBuf,
    pub dest: PathBuf,
    pub exe_suffix: bool,
}

/// Compute the release download URL and local destination for a platform
/// and declared version. Pure string/path computation, no I/O.
#[must_use]
pub fn locate(platform: Platform, version: &str, package_root: &Path) -> ArtifactDescriptor {
    let exe_suffix = platform.is_windows();
    let suffix = if exe_suffix { ".exe" } else { "" };

    // Remote names encode the platform token; the installed file never does.
    let url = format!("{REPO_URL}/releases/download/v{version}/{BINARY_NAME}-{platform}{suffix}");
    let bin_dir = package_root.join("bin");
    let dest = bin_dir.join(format!("{BINARY_NAME}{suffix}"));

    ArtifactDescriptor {
        url,
        bin_dir,
        dest,
        exe_suffix,
    }
}

/// Local file name for the installed binary, with the OS-specific suffix.
#[must_use]
pub fn binary_file_name(exe_suffix: bool) -> String {
    if exe_suffix {
        format!("{BINARY_NAME}.exe")
    } else {
        BINARY_NAME.to_string()
    }
}
