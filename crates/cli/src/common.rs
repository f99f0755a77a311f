//! Common utilities and types shared across CLI commands

use anyhow::{Context, Result};
use shrink_config::Config;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Runtime context for CLI commands
///
/// Holds the merged configuration (file settings with command-line overrides
/// applied) and the root directory the run walks.
///
/// # Examples
///
/// ```no_run
/// use shrink::common::RuntimeContext;
/// use shrink_config::Config;
///
/// let context = RuntimeContext::new(Config::default(), None);
/// assert_eq!(context.root(), std::path::Path::new("data"));
/// ```
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    /// Shared configuration (uses Arc to avoid cloning)
    pub config: Arc<Config>,
    root: PathBuf,
}

impl RuntimeContext {
    /// Create a new runtime context
    ///
    /// `root` from the command line (or `SHRINK_ROOT`) wins over the config
    /// file, which wins over the `data` default.
    pub fn new(config: Config, root: Option<&Path>) -> Self {
        let root = root.map_or_else(|| config.root_dir(), Path::to_path_buf);
        Self {
            config: Arc::new(config),
            root,
        }
    }

    /// Get the root directory to minify
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Load the config file named on the command line, or `.shrink.toml` from `cwd`
///
/// # Errors
///
/// Returns an error if an explicit file is missing, or any config file fails
/// to parse.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Config::discover(cwd).context("Failed to load .shrink.toml"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_root_defaults_to_data() {
        let context = RuntimeContext::new(Config::default(), None);
        assert_eq!(context.root(), Path::new("data"));
    }

    #[test]
    fn test_cli_root_wins_over_config() {
        let mut config = Config::default();
        config.general.root = Some(PathBuf::from("/srv/from-config"));

        let context = RuntimeContext::new(config, Some(Path::new("site")));
        assert_eq!(context.root(), Path::new("site"));
    }

    #[test]
    fn test_config_root_used_without_cli_root() {
        let mut config = Config::default();
        config.general.root = Some(PathBuf::from("/srv/from-config"));

        let context = RuntimeContext::new(config, None);
        assert_eq!(context.root(), Path::new("/srv/from-config"));
    }

    #[test]
    fn test_load_config_discovers_in_cwd() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".shrink.toml"),
            "[general]\nroot = \"public\"\n",
        )
        .unwrap();

        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config.root_dir(), temp.path().join("public"));
    }

    #[test]
    fn test_load_config_explicit_missing() {
        let temp = TempDir::new().unwrap();
        let err = load_config(Some(&temp.path().join("absent.toml")), temp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }
}
