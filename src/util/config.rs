//! Export configuration.
//!
//! The exporter reads an optional `xmake-buildinfo.toml`:
//!
//! ```toml
//! [output]
//! dir = "build/conan"
//! file_stem = "conanbuildinfo"
//! extension = "xmake.lua"
//!
//! [context]
//! platform = "Windows"
//! arch = "x86_64"
//! mode = "Release"
//! ```
//!
//! Every key is optional. A missing or malformed file falls back to the
//! defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::context::BuildContext;
use crate::generator::descriptor::{ArtifactNaming, DEFAULT_EXTENSION, DEFAULT_FILE_STEM};

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "xmake-buildinfo.toml";

/// Build mode used when neither the config nor the caller names one.
pub const DEFAULT_MODE: &str = "Release";

/// Exporter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where and how descriptors are written
    pub output: OutputConfig,

    /// Build context overrides
    pub context: ContextConfig,
}

/// Output location and file naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, relative paths resolve against the working directory
    pub dir: PathBuf,

    /// File stem shared by every descriptor
    pub file_stem: String,

    /// Descriptor extension, without the leading dot
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: PathBuf::from("."),
            file_stem: DEFAULT_FILE_STEM.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Build context overrides. Unset fields are detected from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Platform identifier
    pub platform: Option<String>,

    /// Architecture identifier
    pub arch: Option<String>,

    /// Build mode identifier
    pub mode: Option<String>,
}

impl ExportConfig {
    /// Create a configuration writing to `dir` with default naming.
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        let mut config = ExportConfig::default();
        config.output.dir = dir.into();
        config
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read export config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse export config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing
    /// or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to load export config from {}: {:#}",
                    path.display(),
                    e
                );
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize export config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write export config: {}", path.display()))
    }

    /// Descriptor file naming.
    pub fn naming(&self) -> ArtifactNaming {
        ArtifactNaming {
            file_stem: self.output.file_stem.clone(),
            extension: self.output.extension.clone(),
        }
    }

    /// Output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output.dir
    }

    /// Build context from the overrides, detecting unset parts from the host.
    pub fn build_context(&self) -> BuildContext {
        let mode = self.context.mode.as_deref().unwrap_or(DEFAULT_MODE);
        let mut ctx = BuildContext::host(mode);

        if let Some(ref platform) = self.context.platform {
            ctx.platform = platform.clone();
        }
        if let Some(ref arch) = self.context.arch {
            ctx.arch = arch.clone();
        }

        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = ExportConfig::default();
        assert_eq!(config.output_dir(), Path::new("."));
        assert_eq!(config.naming(), ArtifactNaming::default());
        assert_eq!(config.build_context().mode, DEFAULT_MODE);
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(CONFIG_FILE_NAME);

        std::fs::write(
            &config_path,
            r#"
[output]
dir = "out"
file_stem = "buildinfo"

[context]
platform = "Windows"
arch = "x86"
mode = "Debug"
"#,
        )
        .unwrap();

        let config = ExportConfig::load(&config_path).unwrap();
        assert_eq!(config.output_dir(), Path::new("out"));
        assert_eq!(config.output.file_stem, "buildinfo");
        // Not set, keeps the default
        assert_eq!(config.output.extension, "xmake.lua");
        assert_eq!(config.naming().root_file_name(), "buildinfo.xmake.lua");

        let ctx = config.build_context();
        assert_eq!(ctx.key(), "Windows_x86_Debug");
    }

    #[test]
    fn test_config_partial_context() {
        let mut config = ExportConfig::default();
        config.context.platform = Some("Linux".to_string());

        let ctx = config.build_context();
        assert_eq!(ctx.platform, "Linux");
        assert_eq!(ctx.arch, BuildContext::host(DEFAULT_MODE).arch);
        assert_eq!(ctx.mode, DEFAULT_MODE);
    }

    #[test]
    fn test_config_malformed_falls_back() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[output\ndir = ").unwrap();

        assert!(ExportConfig::load(&config_path).is_err());
        assert_eq!(
            ExportConfig::load_or_default(&config_path),
            ExportConfig::default()
        );
    }

    #[test]
    fn test_config_missing_falls_back() {
        let tmp = TempDir::new().unwrap();
        let config = ExportConfig::load_or_default(&tmp.path().join("absent.toml"));
        assert_eq!(config, ExportConfig::default());
    }

    #[test]
    fn test_config_save_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = ExportConfig::with_output_dir("deps");
        config.context.mode = Some("Debug".to_string());
        config.save(&config_path).unwrap();

        let loaded = ExportConfig::load(&config_path).unwrap();
        assert_eq!(loaded, config);
    }
}
