use crate::error::{ExtFindError, Result};
use crate::scanner::{OneOrMany, SearchRequest};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Accepts a single path or a list.
    pub roots: OneOrMany<PathBuf>,
    /// Accepts a single extension or a list.
    pub extensions: OneOrMany<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            roots: OneOrMany::Many(vec![PathBuf::from(".")]),
            extensions: OneOrMany::Many(vec![".cpp".to_string()]),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ExtFindError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ExtFindError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ExtFindError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["extfind.toml", ".extfind.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref roots) = cli_args.roots {
            self.search.roots = OneOrMany::Many(roots.clone());
        }

        // Only surrounding whitespace is stripped; an empty extension still matches names ending in '.'
        if let Some(ref extensions) = cli_args.extensions {
            self.search.extensions =
                OneOrMany::Many(extensions.iter().map(|s| s.trim().to_string()).collect());
        }

        if let Some(ref log_file) = cli_args.log_file {
            self.output.log_file = Some(log_file.clone());
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| ExtFindError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| ExtFindError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn search_request(&self) -> SearchRequest {
        SearchRequest::new(self.search.roots.clone(), self.search.extensions.clone())
            .with_log_path(self.output.log_file.clone())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub roots: Option<Vec<PathBuf>>,
    pub extensions: Option<Vec<String>>,
    pub log_file: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roots(mut self, roots: Option<Vec<PathBuf>>) -> Self {
        self.roots = roots;
        self
    }

    pub fn with_extensions(mut self, extensions: Option<Vec<String>>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }
}
