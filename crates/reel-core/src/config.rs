use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelConfig {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Where the completion service lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Approximate word count the prompt asks for in the audio column.
    #[serde(default = "default_word_target")]
    pub word_target: usize,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8787".to_string()
}
fn default_timeout() -> u64 {
    120
}
fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}
fn default_max_tokens() -> usize {
    2048
}
fn default_word_target() -> usize {
    500
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            word_target: default_word_target(),
        }
    }
}

impl ReelConfig {
    /// Load config from ~/.config/reel/config.toml, creating defaults if missing.
    pub fn load() -> crate::error::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|e| {
                crate::error::ReelError::Config(format!("Failed to read config: {e}"))
            })?;
            let config: ReelConfig = toml::from_str(&contents).map_err(|e| {
                crate::error::ReelError::Config(format!("Failed to parse config: {e}"))
            })?;
            Ok(config)
        } else {
            let config = ReelConfig::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save config to disk.
    pub fn save(&self) -> crate::error::Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| {
            crate::error::ReelError::Config(format!("Failed to serialize config: {e}"))
        })?;
        std::fs::write(&config_path, contents)?;
        Ok(())
    }

    /// Get the config file path.
    pub fn config_path() -> crate::error::Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            crate::error::ReelError::Config("Could not determine config directory".into())
        })?;
        Ok(config_dir.join("reel").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = ReelConfig::default();
        assert_eq!(config.service.timeout_seconds, 120);
        assert_eq!(config.generation.word_target, 500);
        assert!(!config.generation.model.is_empty());
        assert!(config.service.base_url.starts_with("http"));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: ReelConfig = toml::from_str(
            r#"
            [service]
            base_url = "http://10.0.0.5:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.service.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.service.timeout_seconds, 120);
        assert_eq!(config.generation.max_tokens, 2048);
    }
}
