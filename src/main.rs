use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use poly_ladder::aggregate::aggregate;
use poly_ladder::config::{AssetConfig, Config};
use poly_ladder::gamma::{collect_entries, GammaClient, GammaEvent};
use poly_ladder::report::{self, SentimentReport};
use poly_ladder::spot::SpotClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            eprintln!("Make sure config/default.toml exists");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .init();

    info!(
        gamma_url = %config.gamma.base_url,
        assets = config.assets.len(),
        "Starting poly-ladder run"
    );

    let gamma = GammaClient::new(&config.gamma)?;
    let spot = SpotClient::new(&config.spot)?;

    // One fetch feeds every configured asset; filtering is per asset.
    let events = gamma
        .fetch_events()
        .await
        .context("fetching gamma events")?;

    let mut failures = 0usize;
    for asset in &config.assets {
        if let Err(e) = run_asset(&config, &spot, &events, asset).await {
            warn!(asset = %asset.name, error = %format!("{:#}", e), "asset run failed");
            failures += 1;
        }
    }

    if failures == config.assets.len() {
        anyhow::bail!("all {} asset runs failed", failures);
    }
    Ok(())
}

async fn run_asset(
    config: &Config,
    spot: &SpotClient,
    events: &[GammaEvent],
    asset: &AssetConfig,
) -> Result<()> {
    let entries = collect_entries(events, &asset.keywords, &asset.skip_keywords);
    if entries.is_empty() {
        warn!(asset = %asset.name, "no matching markets in this fetch");
        return Ok(());
    }
    info!(asset = %asset.name, markets = entries.len(), "collected markets");
    report::log_top_markets(&entries, config.aggregate.top_markets);

    let profile = asset.profile();
    let current_price = match spot.ticker_price(&asset.spot_symbol).await {
        Ok(p) => p,
        Err(e) => {
            warn!(
                asset = %asset.name,
                fallback = profile.reference_price,
                error = %format!("{:#}", e),
                "spot ticker unavailable, using fallback reference price"
            );
            profile.reference_price
        }
    };

    let summary = aggregate(
        &entries,
        &profile,
        config.aggregate.tie_break,
        current_price,
    );
    info!(
        asset = %asset.name,
        upside_levels = summary.upside.len(),
        downside_levels = summary.downside.len(),
        expected_high = ?summary.expected_high,
        expected_low = ?summary.expected_low,
        "aggregated sentiment"
    );

    let report_doc = SentimentReport::new(asset.name.clone(), summary);
    let path = report::save_report(Path::new(&config.output.dir), &report_doc)?;
    info!(asset = %asset.name, path = %path.display(), "saved sentiment report");
    Ok(())
}
