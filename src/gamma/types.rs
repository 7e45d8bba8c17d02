use serde::Deserialize;
use tracing::debug;

use crate::model::market::RawMarketEntry;

/// Deserialize Gamma's string-or-number volume fields to f64, null as 0.
pub fn string_or_number_to_f64_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    match v {
        serde_json::Value::Null => Ok(0.0),
        serde_json::Value::String(s) => s.parse::<f64>().map_err(serde::de::Error::custom),
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("invalid number")),
        _ => Err(serde::de::Error::custom("invalid numeric value")),
    }
}

/// One Gamma event: a question grouping one or more yes/no markets.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaEvent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub markets: Vec<GammaMarket>,
}

/// One market inside an event.
///
/// The Gamma API double-encodes `outcomes` and `outcomePrices` as JSON
/// strings of arrays ("[\"Yes\",\"No\"]"); both string and numeric array
/// elements occur in the wild.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaMarket {
    #[serde(default)]
    pub outcomes: Option<String>,
    #[serde(default)]
    pub outcome_prices: Option<String>,
    #[serde(default, deserialize_with = "string_or_number_to_f64_default")]
    pub volume: f64,
}

impl GammaMarket {
    /// Decode this market into a raw pipeline entry, labeled with the
    /// event title. `None` when either encoded array is missing,
    /// undecodable, or the two are misaligned; the record is skipped and
    /// the run continues.
    pub fn to_raw_entry(&self, title: &str) -> Option<RawMarketEntry> {
        let outcomes = decode_string_array(self.outcomes.as_deref()?)?;
        let probabilities = decode_number_array(self.outcome_prices.as_deref()?)?;
        if outcomes.is_empty() || outcomes.len() != probabilities.len() {
            return None;
        }
        Some(RawMarketEntry {
            label: title.to_string(),
            outcomes,
            outcome_probabilities: probabilities,
            volume: self.volume,
        })
    }
}

fn decode_string_array(raw: &str) -> Option<Vec<String>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw).ok()?;
    values
        .into_iter()
        .map(|v| match v {
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
        .collect()
}

fn decode_number_array(raw: &str) -> Option<Vec<f64>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw).ok()?;
    values
        .into_iter()
        .map(|v| match v {
            serde_json::Value::String(s) => s.parse::<f64>().ok(),
            serde_json::Value::Number(n) => n.as_f64(),
            _ => None,
        })
        .collect()
}

/// Filter events down to one asset's markets and decode them.
///
/// An event qualifies when its lowercased title contains one of the
/// asset's keywords and none of the skip keywords (short-horizon noise
/// markets like "up or down today" say nothing about price targets).
pub fn collect_entries(
    events: &[GammaEvent],
    keywords: &[String],
    skip_keywords: &[String],
) -> Vec<RawMarketEntry> {
    let mut entries = Vec::new();
    for event in events {
        let title_lower = event.title.to_lowercase();
        if !keywords.iter().any(|k| title_lower.contains(k.as_str())) {
            continue;
        }
        if skip_keywords
            .iter()
            .any(|k| title_lower.contains(k.as_str()))
        {
            debug!(title = %event.title, "skipping short-horizon market");
            continue;
        }
        for market in &event.markets {
            match market.to_raw_entry(&event.title) {
                Some(entry) => entries.push(entry),
                None => debug!(title = %event.title, "skipping malformed market record"),
            }
        }
    }
    entries
}
