use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::ladder::TieBreak;
use crate::model::asset::AssetProfile;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub gamma: GammaConfig,
    pub spot: SpotConfig,
    pub aggregate: AggregateConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub assets: Vec<AssetConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GammaConfig {
    pub base_url: String,
    /// Gamma tag id to query; 21 is the crypto tag.
    pub tag_id: u32,
    pub limit: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotConfig {
    pub rest_base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AggregateConfig {
    pub tie_break: TieBreak,
    /// How many markets to echo into the log, ranked by volume.
    pub top_markets: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    pub name: String,
    /// Spot ticker symbol for the live reference price, e.g. "BTCUSDT".
    pub spot_symbol: String,
    /// Lowercase title keywords that mark an event as belonging to this asset.
    pub keywords: Vec<String>,
    /// Lowercase title keywords that disqualify an event (short-horizon noise).
    #[serde(default)]
    pub skip_keywords: Vec<String>,
    pub min_valid_price: f64,
    pub max_valid_price: f64,
    /// Reference price used when the spot ticker is unreachable.
    pub fallback_price: f64,
}

impl AssetConfig {
    pub fn profile(&self) -> AssetProfile {
        AssetProfile {
            name: self.name.clone(),
            min_valid_price: self.min_valid_price,
            max_valid_price: self.max_valid_price,
            reference_price: self.fallback_price,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("asset name must not be empty");
        }
        if self.keywords.is_empty() {
            bail!("asset '{}' has no title keywords", self.name);
        }
        if !(self.min_valid_price > 0.0) {
            bail!("asset '{}': min_valid_price must be > 0", self.name);
        }
        if self.min_valid_price >= self.max_valid_price {
            bail!(
                "asset '{}': min_valid_price must be below max_valid_price",
                self.name
            );
        }
        if !(self.fallback_price > 0.0) {
            bail!("asset '{}': fallback_price must be > 0", self.name);
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(Path::new("config/default.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.assets.is_empty() {
            bail!("at least one [[assets]] entry is required");
        }
        for asset in &self.assets {
            asset.validate()?;
        }
        if self.gamma.limit == 0 {
            bail!("gamma.limit must be > 0");
        }
        if self.gamma.timeout_secs == 0 || self.spot.timeout_secs == 0 {
            bail!("HTTP timeouts must be > 0 seconds");
        }
        Ok(())
    }
}
