use crate::error::{EmailqlError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".emailql.toml";

const FORBIDDEN_PATH_CHARS: &[char] = &[':', '*', '{', '}'];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmailqlConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub graphql: GraphqlSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Schema and endpoint options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphqlSettings {
    #[serde(default = "default_path")]
    pub path: String,

    /// Serve the GraphiQL page on `GET <path>`.
    #[serde(default = "default_true")]
    pub graphiql: bool,

    #[serde(default = "default_true")]
    pub introspection: bool,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default = "default_max_complexity")]
    pub max_complexity: usize,
}

fn default_path() -> String {
    "/graphql".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_depth() -> usize {
    32
}

fn default_max_complexity() -> usize {
    1000
}

impl Default for GraphqlSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            graphiql: default_true(),
            introspection: default_true(),
            max_depth: default_max_depth(),
            max_complexity: default_max_complexity(),
        }
    }
}

impl EmailqlConfig {
    /// Loads the config from `explicit` if given, otherwise searches upward
    /// from `start_path`. Falls back to defaults when no file is found.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(EmailqlError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => Self::find_config_file(start_path),
        };

        match config_path {
            Some(path) => {
                let config = Self::from_file(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EmailqlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let path = &self.graphql.path;
        if !path.starts_with('/') {
            return Err(EmailqlError::Config(format!(
                "graphql.path must start with '/', got '{}'",
                path
            )));
        }
        // Router paths are static: no captures, wildcards or empty segments.
        if path.contains(FORBIDDEN_PATH_CHARS) || path.contains("//") {
            return Err(EmailqlError::Config(format!(
                "graphql.path must be a plain path without ':', '*', '{{', '}}' or '//', got '{}'",
                path
            )));
        }
        if self.graphql.max_depth == 0 {
            return Err(EmailqlError::Config(
                "graphql.max_depth must be greater than 0".to_string(),
            ));
        }
        if self.graphql.max_complexity == 0 {
            return Err(EmailqlError::Config(
                "graphql.max_complexity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Writes a default config into `dir`. Refuses to overwrite unless `force`.
    pub fn init(dir: &Path, force: bool) -> Result<PathBuf> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() && !force {
            return Err(EmailqlError::AlreadyInitialized(path.display().to_string()));
        }
        Self::default().save(&path)?;
        Ok(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
