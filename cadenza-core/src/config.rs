//! TOML configuration: embedded defaults plus an optional user override.
//!
//! This is host-side convenience only — the engine itself takes an explicit
//! [`PlanContext`] on every call and never reads ambient state.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::plan::PlanContext;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    bpm: Option<f64>,
    beat_unit: Option<u32>,
    project_root: Option<String>,
}

pub struct Config {
    defaults: DefaultsConfig,
}

impl Config {
    /// Load the embedded defaults, merged with the user config file when one
    /// exists. A malformed or unreadable user config is logged and ignored.
    pub fn load() -> Self {
        let mut base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");

        if let Some(path) = user_config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => merge_defaults(&mut base.defaults, user.defaults),
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config { defaults: base.defaults }
    }

    /// Load from an explicit file, falling back to the embedded defaults for
    /// anything the file leaves unset.
    pub fn load_from(path: &Path) -> Self {
        let mut base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(user) => merge_defaults(&mut base.defaults, user.defaults),
                Err(e) => {
                    log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                }
            },
            Err(e) => {
                log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
            }
        }

        Config { defaults: base.defaults }
    }

    /// Build the default per-call context from the configured values.
    pub fn context(&self) -> PlanContext {
        let fallback = PlanContext::default();
        PlanContext {
            project_root: self
                .defaults
                .project_root
                .clone()
                .unwrap_or(fallback.project_root),
            bpm: self.defaults.bpm.unwrap_or(fallback.bpm),
            beat_unit: self.defaults.beat_unit.unwrap_or(fallback.beat_unit),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cadenza").join("config.toml"))
}

fn merge_defaults(base: &mut DefaultsConfig, user: DefaultsConfig) {
    if user.bpm.is_some() {
        base.bpm = user.bpm;
    }
    if user.beat_unit.is_some() {
        base.beat_unit = user.beat_unit;
    }
    if user.project_root.is_some() {
        base.project_root = user.project_root;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_parse() {
        let config: ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.defaults.bpm, Some(120.0));
        assert_eq!(config.defaults.beat_unit, Some(4));
    }

    #[test]
    fn context_uses_embedded_defaults_when_file_is_missing() {
        let config = Config::load_from(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.context(), PlanContext::default());
    }

    #[test]
    fn user_file_overrides_only_what_it_sets() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nbpm = 90.0").unwrap();
        let config = Config::load_from(file.path());
        let ctx = config.context();
        assert_eq!(ctx.bpm, 90.0);
        assert_eq!(ctx.beat_unit, 4);
        assert_eq!(ctx.project_root, "");
    }

    #[test]
    fn malformed_user_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [[[").unwrap();
        let config = Config::load_from(file.path());
        assert_eq!(config.context(), PlanContext::default());
    }
}
