use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "lander.config.json";

/// Lander configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one JSON file per campaign
    #[serde(default = "default_campaigns_dir")]
    pub campaigns_dir: String,

    /// Undo depth cap for edit scripts (0 = unlimited)
    #[serde(default)]
    pub history_limit: usize,

    /// Acting user when `--owner` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_owner: Option<String>,

    /// Indent rendered HTML
    #[serde(default = "default_pretty_html")]
    pub pretty_html: bool,
}

fn default_campaigns_dir() -> String {
    "campaigns".to_string()
}

fn default_pretty_html() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("reading {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", config_path.display()))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the campaigns directory
    pub fn get_campaigns_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.campaigns_dir)
    }

    /// Acting user: explicit flag first, then `defaultOwner`
    pub fn resolve_owner(&self, flag: Option<&str>) -> anyhow::Result<String> {
        flag.map(str::to_string)
            .or_else(|| self.default_owner.clone())
            .ok_or_else(|| {
                anyhow!(
                    "No acting user. Pass --owner or set defaultOwner in {}",
                    DEFAULT_CONFIG_NAME
                )
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            campaigns_dir: default_campaigns_dir(),
            history_limit: 0,
            default_owner: None,
            pretty_html: default_pretty_html(),
        }
    }
}
