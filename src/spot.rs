use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::SpotConfig;

/// Deserialize exchange string-encoded numbers to f64.
fn string_to_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<f64>().map_err(serde::de::Error::custom)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TickerPriceResponse {
    #[allow(dead_code)]
    symbol: String,
    #[serde(deserialize_with = "string_to_f64")]
    price: f64,
}

/// Minimal client for the public spot ticker endpoint, used only to pin
/// the reference price for the residual mass. Unauthenticated; callers
/// fall back to the asset profile's reference price on any error.
pub struct SpotClient {
    http: reqwest::Client,
    base_url: String,
}

impl SpotClient {
    pub fn new(cfg: &SpotConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("building spot HTTP client")?;
        Ok(Self {
            http,
            base_url: cfg.rest_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn ticker_price(&self, symbol: &str) -> Result<f64> {
        let url = format!("{}/api/v3/ticker/price?symbol={}", self.base_url, symbol);
        let resp: TickerPriceResponse = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("ticker request for {} failed", symbol))?
            .error_for_status()
            .context("ticker returned error status")?
            .json()
            .await
            .context("decoding ticker payload")?;
        Ok(resp.price)
    }
}
