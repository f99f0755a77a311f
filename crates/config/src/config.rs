//! Configuration management
//!
//! This module handles loading shrink configuration from `.shrink.toml`.
//!
//! ```toml
//! [general]
//! root = "public"
//! color = true
//!
//! [minify]
//! removeComments = true
//! removeOptionalAttributeQuotes = true
//!
//! [run]
//! continueOnError = false
//! parallel = true
//! jobs = 4
//! ```

use crate::Result;
use serde::{Deserialize, Serialize};
use shrink_core::MinifyOptions;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory minified when nothing else is configured
pub const DEFAULT_ROOT: &str = "data";

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".shrink.toml";

/// General configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Root directory to walk
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root: None,
            color: default_color(),
        }
    }
}

/// Run policy section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// Attempt every file and report failures at the end instead of aborting
    #[serde(default)]
    pub continue_on_error: bool,

    /// Minify files on a thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Worker threads when running in parallel (rayon default when unset)
    #[serde(default)]
    pub jobs: Option<usize>,

    /// Minify in memory only, never write
    #[serde(default)]
    pub dry_run: bool,
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Options handed to the minifier
    #[serde(default)]
    pub minify: MinifyOptions,

    /// Error and concurrency policy
    #[serde(default)]
    pub run: RunConfig,
}

fn default_color() -> bool {
    true
}

impl Config {
    /// Load configuration from a file
    ///
    /// Relative paths inside the file are resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or TOML parsing fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            shrink_core::Error::Message(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| {
            shrink_core::Error::Message(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        if let Some(parent) = path.parent() {
            config.resolve_relative_paths(parent);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML string
    ///
    /// # Errors
    ///
    /// Returns error if TOML parsing fails
    pub fn from_toml_str(toml_content: &str, base_dir: &Path) -> Result<Self> {
        let mut config: Self = toml::from_str(toml_content)
            .map_err(|e| shrink_core::Error::Message(format!("Failed to parse config TOML: {e}")))?;

        config.resolve_relative_paths(base_dir);
        config.validate()?;
        Ok(config)
    }

    /// Load `.shrink.toml` from `dir`, falling back to defaults when absent
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn discover(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject settings that can never run
    ///
    /// # Errors
    ///
    /// Returns error for an empty root or a zero-thread pool
    pub fn validate(&self) -> Result<()> {
        if let Some(root) = &self.general.root
            && root.as_os_str().is_empty()
        {
            return Err(shrink_core::Error::Message(
                "general.root cannot be empty".to_string(),
            ));
        }
        if self.run.jobs == Some(0) {
            return Err(shrink_core::Error::Message(
                "run.jobs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn resolve_relative_paths(&mut self, base_dir: &Path) {
        if let Some(root) = self.general.root.take() {
            self.general.root = Some(if root.is_relative() {
                base_dir.join(root)
            } else {
                root
            });
        }
    }

    /// Root directory to walk, `data` when not configured
    pub fn root_dir(&self) -> PathBuf {
        self.general
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use tempfile::TempDir;

    fn create_test_config(toml_content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, toml_content).unwrap();
        (temp_dir, config_path)
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.general.color);
        assert!(config.general.root.is_none());
        assert_eq!(config.root_dir(), PathBuf::from("data"));
        assert_eq!(config.minify, MinifyOptions::default());
        assert!(!config.run.continue_on_error);
        assert!(!config.run.parallel);
        assert!(!config.run.dry_run);
    }

    #[test]
    fn test_load_empty_config() {
        let (_temp_dir, config_path) = create_test_config("");
        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.root_dir(), PathBuf::from("data"));
        assert!(config.minify.remove_comments);
    }

    #[test]
    fn test_load_relative_root_resolved_against_config_dir() {
        let (temp_dir, config_path) = create_test_config("[general]\nroot = \"public\"\n");
        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.root_dir(), temp_dir.path().join("public"));
    }

    #[test]
    fn test_load_absolute_root_unchanged() {
        let (_temp_dir, config_path) = create_test_config("[general]\nroot = \"/srv/www\"\n");
        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.root_dir(), PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_load_run_and_minify_sections() {
        let toml = r#"
[minify]
removeComments = false
minifyCss = true

[run]
continueOnError = true
parallel = true
jobs = 4
dryRun = true
"#;
        let (_temp_dir, config_path) = create_test_config(toml);
        let config = Config::load(&config_path).unwrap();

        assert!(!config.minify.remove_comments);
        assert!(config.minify.minify_css);
        assert!(config.minify.remove_all_empty_space);
        assert!(config.run.continue_on_error);
        assert!(config.run.parallel);
        assert_eq!(config.run.jobs, Some(4));
        assert!(config.run.dry_run);
    }

    #[test]
    fn test_load_invalid_toml_names_file() {
        let (_temp_dir, config_path) = create_test_config("[general\nroot = ");
        let err = Config::load(&config_path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config file"));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let err = Config::from_toml_str("[run]\njobs = 0\n", Path::new("/tmp")).unwrap_err();
        assert!(err.to_string().contains("run.jobs"));
    }

    #[test]
    fn test_empty_root_rejected() {
        let config = Config {
            general: GeneralConfig {
                root: Some(PathBuf::new()),
                color: true,
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::discover(temp_dir.path()).unwrap();
        assert_eq!(config.root_dir(), PathBuf::from(DEFAULT_ROOT));
    }

    #[test]
    fn test_discover_reads_file() {
        let (temp_dir, _config_path) = create_test_config("[general]\ncolor = false\n");
        let config = Config::discover(temp_dir.path()).unwrap();
        assert!(!config.general.color);
    }
}
