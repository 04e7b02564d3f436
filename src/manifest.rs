use std::fs;
use std::path::Path;

/// Read the declared tool version from the `package.json` shipped alongside
/// the installer.
pub fn declared_version(package_root: &Path) -> Result<String, String> {
    let path = package_root.join("package.json");

    let text = fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

    let manifest: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;

    manifest
        .get("version")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| format!("no \"version\" field in {}", path.display()))
}
