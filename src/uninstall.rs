use std::path::Path;

use crate::artifact::BINARY_NAME;

/// Inspect `cwd` for leftover hook state and print cleanup guidance.
///
/// Purely advisory: nothing is deleted here, and any inspection error is
/// downgraded to a warning so the surrounding package removal always
/// proceeds.
pub fn advise(cwd: &Path) {
    println!("🧹 Cleaning up {BINARY_NAME} hooks...");

    match marker_present(cwd) {
        Ok(found) => {
            if found {
                println!(
                    "Found .{BINARY_NAME} directory. You may want to run \"{BINARY_NAME} uninstall\" to clean up git hooks."
                );
            }
            println!("✅ {BINARY_NAME} uninstalled successfully!");
            println!(
                "💡 To completely remove git hooks, run \"{BINARY_NAME} uninstall\" before uninstalling the package."
            );
        }
        Err(e) => eprintln!("⚠️  Warning: Could not clean up hooks: {e}"),
    }
}

fn marker_present(cwd: &Path) -> Result<bool, String> {
    let marker = cwd.join(format!(".{BINARY_NAME}"));
    marker
        .try_exists()
        .map_err(|e| format!("could not inspect {}: {e}", marker.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn marker_absent() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!marker_present(tmp.path()).unwrap());
    }

    #[test]
    fn marker_detected() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join(".rusky")).unwrap();
        assert!(marker_present(tmp.path()).unwrap());
    }

    #[test]
    fn advise_never_panics_without_marker() {
        let tmp = tempfile::tempdir().unwrap();
        advise(tmp.path());
    }

    #[test]
    fn advise_never_panics_with_marker() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join(".rusky")).unwrap();
        advise(tmp.path());
    }

    #[test]
    fn advise_tolerates_missing_directory() {
        // A cwd that no longer exists must not abort the removal flow.
        advise(Path::new("/nonexistent/removed-during-uninstall"));
    }
}
