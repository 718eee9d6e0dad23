//! Build context - the (platform, arch, mode) triple an export is valid for.
//!
//! Every descriptor block is nested under the composite key
//! `{platform}_{arch}_{mode}` so a consumer can pick the block that matches
//! its own configuration.

use std::fmt;

/// Platform, architecture and build mode of an export.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildContext {
    /// Platform identifier (Windows, Linux, Macos, ...)
    pub platform: String,
    /// Architecture identifier (x86_64, armv8, ...)
    pub arch: String,
    /// Build mode identifier (Debug, Release, ...)
    pub mode: String,
}

impl BuildContext {
    /// Create a new build context.
    pub fn new(
        platform: impl Into<String>,
        arch: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        BuildContext {
            platform: platform.into(),
            arch: arch.into(),
            mode: mode.into(),
        }
    }

    /// Detect the host platform and architecture, using package manager
    /// setting names.
    pub fn host(mode: impl Into<String>) -> Self {
        let platform = match std::env::consts::OS {
            "linux" => "Linux",
            "macos" => "Macos",
            "windows" => "Windows",
            "freebsd" => "FreeBSD",
            "android" => "Android",
            "ios" => "iOS",
            other => other,
        };

        let arch = match std::env::consts::ARCH {
            "aarch64" => "armv8",
            "arm" => "armv7",
            other => other,
        };

        BuildContext::new(platform, arch, mode)
    }

    /// Composite key the descriptor block is nested under.
    ///
    /// Parts are joined as given. A part that is not a valid Lua identifier
    /// (`armv8.3`, `x86-64`) passes through unchanged and yields a key xmake
    /// cannot read as a bare table key.
    pub fn key(&self) -> String {
        format!("{}_{}_{}", self.platform, self.arch, self.mode)
    }
}

impl fmt::Display for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.platform, self.arch, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_key() {
        let ctx = BuildContext::new("Windows", "x86_64", "Release");
        assert_eq!(ctx.key(), "Windows_x86_64_Release");
        assert_eq!(ctx.to_string(), ctx.key());
    }

    #[test]
    fn test_context_key_is_not_sanitized() {
        let ctx = BuildContext::new("Linux", "armv8.3", "Release");
        assert_eq!(ctx.key(), "Linux_armv8.3_Release");
    }

    #[test]
    fn test_host_context() {
        let ctx = BuildContext::host("Debug");
        assert!(!ctx.platform.is_empty());
        assert!(!ctx.arch.is_empty());
        assert_eq!(ctx.mode, "Debug");
        assert!(ctx.key().ends_with("_Debug"));
    }
}
