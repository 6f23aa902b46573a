//! Configuration system: TOML file + env var overrides + smart defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{GovDirError, Result};

/// Full govdir configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub fixture: FixtureConfig,
    pub render: RenderConfig,
    pub paths: PathsConfig,
}

/// Fixture source and load-time validation behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FixtureConfig {
    /// Override path for the legislative fixture. `None` uses the bundled copy.
    pub legislative_path: Option<PathBuf>,
    /// Reject fixtures with validation errors at load time.
    pub validate_on_load: bool,
}

/// Terminal rendering knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Target line width for human output.
    pub text_width: usize,
    /// Character budget for two-line clamped fields (office, committee title).
    pub clamp_width: usize,
    /// Spaces per nesting level in human output.
    pub indent: usize,
}

/// Filesystem paths used by govdir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub config_file: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            legislative_path: None,
            validate_on_load: true,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            text_width: 80,
            clamp_width: 64,
            indent: 2,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let home_dir = env::var_os("HOME").map_or_else(
            || {
                eprintln!(
                    "[GOVDIR-CONFIG] WARNING: HOME not set, falling back to /tmp for config path"
                );
                PathBuf::from("/tmp")
            },
            PathBuf::from,
        );
        Self {
            config_file: home_dir.join(".config").join("govdir").join("config.toml"),
        }
    }
}

impl Config {
    /// Default configuration path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathsConfig::default().config_file
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from default path; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| GovDirError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(GovDirError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.paths.config_file = path_buf;
        cfg.apply_env_overrides()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(raw) = env_var("GOVDIR_FIXTURE_PATH") {
            self.fixture.legislative_path = Some(PathBuf::from(raw));
        }
        set_env_bool(
            "GOVDIR_FIXTURE_VALIDATE_ON_LOAD",
            &mut self.fixture.validate_on_load,
        )?;
        set_env_usize("GOVDIR_RENDER_TEXT_WIDTH", &mut self.render.text_width)?;
        set_env_usize("GOVDIR_RENDER_CLAMP_WIDTH", &mut self.render.clamp_width)?;
        set_env_usize("GOVDIR_RENDER_INDENT", &mut self.render.indent)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.render.text_width < 40 {
            return Err(GovDirError::InvalidConfig {
                details: format!(
                    "render.text_width must be >= 40, got {}",
                    self.render.text_width
                ),
            });
        }
        if self.render.clamp_width < 10 {
            return Err(GovDirError::InvalidConfig {
                details: format!(
                    "render.clamp_width must be >= 10, got {}",
                    self.render.clamp_width
                ),
            });
        }
        if self.render.clamp_width > self.render.text_width {
            return Err(GovDirError::InvalidConfig {
                details: format!(
                    "render.clamp_width ({}) must be <= render.text_width ({})",
                    self.render.clamp_width, self.render.text_width
                ),
            });
        }
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}

fn set_env_usize(name: &str, slot: &mut usize) -> Result<()> {
    if let Some(raw) = env_var(name) {
        *slot = raw
            .parse::<usize>()
            .map_err(|error| GovDirError::ConfigParse {
                context: "env",
                details: format!("{name}={raw:?}: {error}"),
            })?;
    }
    Ok(())
}

fn set_env_bool(name: &str, slot: &mut bool) -> Result<()> {
    if let Some(raw) = env_var(name) {
        *slot = match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            other => {
                return Err(GovDirError::ConfigParse {
                    context: "env",
                    details: format!("{name}={other:?}: expected a boolean"),
                });
            }
        };
    }
    Ok(())
}
