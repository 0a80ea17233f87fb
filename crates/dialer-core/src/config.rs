//! Configuration for the dialer.
//!
//! Precedence: defaults < config file < environment. The file is YAML and
//! every key is optional; an explicitly named file that cannot be read is a
//! hard error, a missing default file is not.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use crate::dial::{CommandDialer, Dialer, LogDialer};

pub const ENV_LOG_LEVEL: &str = "DIALER_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "DIALER_LOG_FORMAT";
pub const ENV_OPENER: &str = "DIALER_OPENER";

pub const DEFAULT_OPENER: &str = "xdg-open";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub dialer: DialerConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "console".to_string(),
        }
    }
}

/// How dial requests reach the host.
#[derive(Debug, Clone)]
pub struct DialerConfig {
    /// `command` spawns `opener tel:<number>`; `log` only logs the request.
    pub mode: String,
    pub opener: String,
}

impl Default for DialerConfig {
    fn default() -> Self {
        Self {
            mode: "command".to_string(),
            opener: DEFAULT_OPENER.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub fixtures: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { fixtures: true }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        match self.logging.level.to_lowercase().trim() {
            "trace" | "debug" | "info" | "warn" | "warning" | "error" => {}
            _ => {
                return Err(
                    "logging.level must be one of trace, debug, info, warn, error".into(),
                )
            }
        }
        match self.logging.format.to_lowercase().trim() {
            "console" | "json" => {}
            _ => return Err("logging.format must be one of console, json".into()),
        }
        match self.dialer.mode.to_lowercase().trim() {
            "command" => {
                if self.dialer.opener.trim().is_empty() {
                    return Err("dialer.opener is required in command mode".into());
                }
            }
            "log" => {}
            _ => return Err("dialer.mode must be one of command, log".into()),
        }
        Ok(())
    }

    /// Build the dial capability this config describes.
    pub fn build_dialer(&self) -> Arc<dyn Dialer> {
        if self.dialer.mode.trim().eq_ignore_ascii_case("log") {
            Arc::new(LogDialer)
        } else {
            Arc::new(CommandDialer::new(self.dialer.opener.trim()))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    #[serde(default)]
    logging: PartialLoggingConfig,
    #[serde(default)]
    dialer: PartialDialerConfig,
    #[serde(default)]
    seed: PartialSeedConfig,
}

#[derive(Debug, Default, Deserialize)]
struct PartialLoggingConfig {
    #[serde(default)]
    level: String,
    #[serde(default)]
    format: String,
}

#[derive(Debug, Default, Deserialize)]
struct PartialDialerConfig {
    #[serde(default)]
    mode: String,
    #[serde(default)]
    opener: String,
}

#[derive(Debug, Default, Deserialize)]
struct PartialSeedConfig {
    #[serde(default)]
    fixtures: Option<bool>,
}

/// Load configuration, returning it with the file it came from (if any).
pub fn load_config(config_file: Option<&str>) -> Result<(Config, Option<PathBuf>), String> {
    load_config_with_env(config_file, |key| std::env::var(key).ok())
}

/// [`load_config`] with an injectable environment lookup.
pub fn load_config_with_env<F>(
    config_file: Option<&str>,
    env: F,
) -> Result<(Config, Option<PathBuf>), String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();

    let explicit = config_file
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);

    let (path_to_try, used) = if let Some(path) = explicit {
        (Some(path), true)
    } else {
        (default_config_path(&env), false)
    };

    let mut loaded_from = None;
    if let Some(path) = path_to_try {
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                let parsed = parse_partial(&text)?;
                apply_partial(&mut cfg, parsed);
                loaded_from = Some(path);
            }
            Err(err) => {
                if used {
                    return Err(format!("failed to load config file: {err}"));
                }
            }
        }
    }

    apply_env(&mut cfg, &env);
    cfg.validate()?;
    Ok((cfg, loaded_from))
}

fn parse_partial(text: &str) -> Result<PartialConfig, String> {
    if text.trim().is_empty() {
        return Ok(PartialConfig::default());
    }
    serde_yaml::from_str(text).map_err(|err| format!("parse config: {err}"))
}

fn default_config_path<F>(env: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(xdg) = env("XDG_CONFIG_HOME") {
        if !xdg.trim().is_empty() {
            return Some(PathBuf::from(xdg).join("dialer").join("config.yaml"));
        }
    }
    if let Some(home) = env("HOME") {
        if !home.trim().is_empty() {
            return Some(
                PathBuf::from(home)
                    .join(".config")
                    .join("dialer")
                    .join("config.yaml"),
            );
        }
    }
    None
}

fn apply_partial(cfg: &mut Config, partial: PartialConfig) {
    if !partial.logging.level.trim().is_empty() {
        cfg.logging.level = partial.logging.level.trim().to_string();
    }
    if !partial.logging.format.trim().is_empty() {
        cfg.logging.format = partial.logging.format.trim().to_string();
    }
    if !partial.dialer.mode.trim().is_empty() {
        cfg.dialer.mode = partial.dialer.mode.trim().to_string();
    }
    if !partial.dialer.opener.trim().is_empty() {
        cfg.dialer.opener = partial.dialer.opener.trim().to_string();
    }
    if let Some(fixtures) = partial.seed.fixtures {
        cfg.seed.fixtures = fixtures;
    }
}

fn apply_env<F>(cfg: &mut Config, env: &F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    if let Some(level) = non_blank(ENV_LOG_LEVEL) {
        cfg.logging.level = level;
    }
    if let Some(format) = non_blank(ENV_LOG_FORMAT) {
        cfg.logging.format = format;
    }
    if let Some(opener) = non_blank(ENV_OPENER) {
        cfg.dialer.opener = opener;
    }
}
