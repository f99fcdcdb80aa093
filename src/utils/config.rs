use std::path::PathBuf;
use std::sync::Arc;

use easy_config_store::ConfigStore;
use eyre::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub type Config = Arc<ConfigInner>;

pub fn config(path: PathBuf) -> Result<Config> {
    let config_store = ConfigStore::<ConfigInner>::read(path, "config".to_string())?;
    let inner = (*config_store).clone();

    info!("config parsing successful");
    debug!("loaded configuration:\n{}", toml::to_string_pretty(&inner.redacted())?);

    Ok(Arc::new(inner))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConfigInner {
    pub llm: LLMConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl ConfigInner {
    /// Copy with secrets masked, for logging.
    fn redacted(&self) -> Self {
        let mask = |s: &Option<String>| s.as_ref().map(|_| "***".to_string());

        let mut cfg = self.clone();
        cfg.llm.api_key = mask(&self.llm.api_key);
        cfg.github.token = mask(&self.github.token);
        cfg
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LLMConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct GithubConfig {
    pub token: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct RenderConfig {
    /// Drop blank contact fields (and their separators) from the header line.
    #[serde(default)]
    pub compact_header: bool,
}

fn default_llm_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_llm_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

impl Default for ConfigInner {
    fn default() -> Self {
        let cfg = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.default.toml",));

        toml::from_str(cfg).unwrap() // should be okay
    }
}
