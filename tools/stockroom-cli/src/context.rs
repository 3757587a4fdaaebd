//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use stockroom_core::store::DEFAULT_DATA_FILE;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for the menu session.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Directory of the loaded config file, if any.
    pub config_dir: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory containing the running executable.
    pub install_dir: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let install_dir = install_dir().unwrap_or_else(|| cwd.clone());

        let (config, config_dir) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, path.parent().map(Path::to_path_buf))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, path.parent().map(Path::to_path_buf)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_dir,
            output,
            cwd,
            install_dir,
        })
    }

    /// Resolve the data file.
    ///
    /// Precedence: `--data-file` (relative to the working directory), then
    /// `storage.data_file` (relative to the config file), then
    /// `data/sample-data.json` next to the executable.
    pub fn data_file(&self, flag: Option<&str>) -> PathBuf {
        if let Some(path) = flag {
            return resolve(&self.cwd, path);
        }
        if let Some(path) = self.config.storage.data_file.as_deref() {
            let base = self.config_dir.as_deref().unwrap_or(&self.cwd);
            return resolve(base, path);
        }
        self.install_dir.join(DEFAULT_DATA_FILE)
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

fn install_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Resolve a path relative to `base` unless it is already absolute.
fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
