//! Path management for the vending machine
//!
//! ## Path Resolution Order
//!
//! 1. `VENDING_MACHINE_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/vending-machine` or `~/.config/vending-machine`
//! 3. Windows: `%APPDATA%\vending-machine`

use std::path::{Path, PathBuf};

use crate::error::VendingError;

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "VENDING_MACHINE_CONFIG_DIR";

const APP_DIR_NAME: &str = "vending-machine";

/// Locates the files the vending machine reads
#[derive(Debug, Clone)]
pub struct VendingPaths {
    base_dir: PathBuf,
}

impl VendingPaths {
    /// Resolve the configuration directory for this platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application-data directory is known.
    pub fn new() -> Result<Self, VendingError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a fixed base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path to the optional settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, VendingError> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
    }

    let home = std::env::var_os("HOME")
        .ok_or_else(|| VendingError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join(APP_DIR_NAME))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, VendingError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| VendingError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VendingPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        let paths = VendingPaths::new().unwrap();
        env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }
}
