use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::model::market::RawMarketEntry;
use crate::model::summary::SentimentSummary;
use crate::model::target::PriceTargetEntry;

/// The persisted output document for one asset.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentReport {
    pub asset: String,
    pub upside: Vec<PriceTargetEntry>,
    pub downside: Vec<PriceTargetEntry>,
    pub expected_high: Option<f64>,
    pub expected_low: Option<f64>,
    pub current_price: f64,
    pub last_updated: DateTime<Utc>,
}

impl SentimentReport {
    pub fn new(asset: impl Into<String>, summary: SentimentSummary) -> Self {
        Self {
            asset: asset.into(),
            upside: summary.upside,
            downside: summary.downside,
            expected_high: summary.expected_high,
            expected_low: summary.expected_low,
            current_price: summary.current_price,
            last_updated: Utc::now(),
        }
    }
}

/// Write the report as pretty JSON under `dir`, one file per asset.
pub fn save_report(dir: &Path, report: &SentimentReport) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating output dir {}", dir.display()))?;
    let path = dir.join(format!("{}_sentiment.json", report.asset.to_lowercase()));
    let json = serde_json::to_string_pretty(report).context("serializing sentiment report")?;
    std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Echo the highest-volume markets into the log for a quick read of what
/// drove the run.
pub fn log_top_markets(entries: &[RawMarketEntry], top_n: usize) {
    let mut ranked: Vec<&RawMarketEntry> = entries.iter().collect();
    ranked.sort_by(|a, b| {
        b.volume
            .partial_cmp(&a.volume)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for entry in ranked.iter().take(top_n) {
        let probability = entry
            .yes_probability_pct()
            .map(|p| format!("{:.1}%", p))
            .unwrap_or_else(|| "n/a".to_string());
        info!(volume = entry.volume, probability = %probability, label = %entry.label, "market");
    }
}
