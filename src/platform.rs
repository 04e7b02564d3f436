use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Darwin,
    Linux,
    Windows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    Arm64,
}

/// Canonical platform token used in release asset names, e.g. `linux-x64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self.os, Os::Windows)
    }
}

impl Os {
    const fn tag(self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }
}

impl Arch {
    const fn tag(self) -> &'static str {
        match self {
            Self::X64 => "x64",
            Self::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os.tag(), self.arch.tag())
    }
}

/// Map raw host OS/arch identifiers to a release platform token.
///
/// Any architecture other than ARM64 is coerced to the `x64` bucket; an OS
/// outside the supported set is an error carrying both raw identifiers.
pub fn resolve(os: &str, arch: &str) -> Result<Platform, String> {
    let os = match os {
        "macos" => Os::Darwin,
        "linux" => Os::Linux,
        "windows" => Os::Windows,
        _ => return Err(format!("unsupported platform: {os}-{arch}")),
    };

    let arch = match arch {
        "aarch64" | "arm64" => Arch::Arm64,
        _ => Arch::X64,
    };

    Ok(Platform { os, arch })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn resolve_supported_matrix() {
        let cases = [
            ("macos", "x86_64", "darwin-x64"),
            ("macos", "aarch64", "darwin-arm64"),
            ("linux", "x86_64", "linux-x64"),
            ("linux", "aarch64", "linux-arm64"),
            ("windows", "x86_64", "windows-x64"),
            ("windows", "aarch64", "windows-arm64"),
        ];
        for (os, arch, token) in cases {
            assert_eq!(resolve(os, arch).unwrap().to_string(), token);
        }
    }

    #[test]
    fn resolve_unknown_arch_defaults_to_x64() {
        let platform = resolve("linux", "riscv64").unwrap();
        assert_eq!(platform.arch, Arch::X64);
        assert_eq!(platform.to_string(), "linux-x64");
    }

    #[test]
    fn resolve_node_style_arm_token() {
        let platform = resolve("macos", "arm64").unwrap();
        assert_eq!(platform.arch, Arch::Arm64);
    }

    #[test]
    fn resolve_unsupported_os_reports_both_identifiers() {
        let err = resolve("freebsd", "x86_64").unwrap_err();
        assert!(err.contains("freebsd"));
        assert!(err.contains("x86_64"));
    }

    #[test]
    fn resolve_is_deterministic() {
        assert_eq!(resolve("linux", "i686"), resolve("linux", "i686"));
    }

    #[test]
    fn windows_detection() {
        assert!(resolve("windows", "x86_64").unwrap().is_windows());
        assert!(!resolve("linux", "x86_64").unwrap().is_windows());
    }
}
