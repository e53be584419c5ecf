/// Configuration loading.
///
/// Settings come from a `phpgen.toml` file.  Every key is optional; a file
/// that only sets one value inherits the defaults for the rest.
///
/// ```toml
/// [printer]
/// indent-style = "space"
/// indent-width = 2
/// strict-types = true
/// bracketed-namespaces = false
/// ```
///
/// # Lookup order
///
///   1. An explicit path (`--config`).  A missing file is an error.
///   2. `phpgen.toml` in the working directory.
///   3. `<user config dir>/phpgen/config.toml`.
///   4. Built-in defaults.
use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "phpgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub printer: PrinterConfig,
}

/// How the printer lays out code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PrinterConfig {
    pub indent_style: IndentStyle,
    /// Spaces per level when `indent_style` is [`IndentStyle::Space`].
    pub indent_width: usize,
    /// Emit `declare(strict_types=1);` for every file.
    pub strict_types: bool,
    /// Always use `namespace X { ... }` blocks.
    pub bracketed_namespaces: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent_style: IndentStyle::Tab,
            indent_width: 4,
            strict_types: false,
            bracketed_namespaces: false,
        }
    }
}

impl PrinterConfig {
    /// One level of indentation.
    pub fn indent_unit(&self) -> String {
        match self.indent_style {
            IndentStyle::Tab => "\t".to_string(),
            IndentStyle::Space => " ".repeat(self.indent_width),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    #[default]
    Tab,
    Space,
}

impl Config {
    /// Parse configuration from TOML text.  `path` is only used for error
    /// messages.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read configuration from `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content, path)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve configuration following the lookup order described in the
    /// module docs.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidates = [Some(working_dir.join(CONFIG_FILE_NAME)), user_config_path()];
        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                return Self::from_file(&path);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }
}

/// `<config dir>/phpgen/config.toml`, or `None` when no home directory can
/// be determined.
pub fn user_config_path() -> Option<PathBuf> {
    let strategy = etcetera::choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("phpgen").join("config.toml"))
}
