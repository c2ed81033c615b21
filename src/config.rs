//! Configuration for the setdict binary.
//!
//! [`Config::load`] layers `~/.config/setdict/config.toml` over built-in
//! defaults, writing the default file on first run. [`Config::defaults`]
//! yields the same values without touching the filesystem, which is what
//! tests want.
//!
//! Output styling is deliberately not configured here: the sink strategy is
//! selected from the `EXPERIMENTAL_LOGGING` environment toggle.

use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"
[repl]
history_file = ""
max_history  = 1000
show_hint    = true
"#;

/// Top-level application configuration, loaded from
/// `~/.config/setdict/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repl: ReplConfig,
}

/// `[repl]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplConfig {
    /// History file path; the empty default resolves to `~/.setdict_history`.
    #[serde(default)]
    pub history_file: String,
    #[serde(default = "default_max_history")]
    pub max_history: usize,
    /// Whether startup prints the naming and command hints.
    #[serde(default = "default_show_hint")]
    pub show_hint: bool,
}

fn default_max_history() -> usize {
    1000
}
fn default_show_hint() -> bool {
    true
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_file: String::new(),
            max_history: default_max_history(),
            show_hint: default_show_hint(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the settings file, layered on top of the built-in defaults.
    /// A missing file is created with the defaults first.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

impl ReplConfig {
    /// The resolved history file location, if one can be determined.
    pub fn history_path(&self) -> Option<PathBuf> {
        if !self.history_file.is_empty() {
            return Some(PathBuf::from(&self.history_file));
        }
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".setdict_history"))
    }
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("setdict")
        .join("config.toml")
}
