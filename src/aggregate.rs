use tracing::debug;

use crate::ev::expected_value;
use crate::extract::{classify_direction, extract_price};
use crate::ladder::{dedupe, sorted_by_price, TieBreak};
use crate::model::asset::AssetProfile;
use crate::model::market::RawMarketEntry;
use crate::model::summary::SentimentSummary;
use crate::model::target::{Direction, PriceTargetEntry};

/// One aggregation pass: raw market records in, sentiment summary out.
///
/// Entries that fail any resolution step (no yes-quote, no in-range price,
/// no direction marker) are skipped one by one: routine behavior for a
/// noisy free-text feed, logged at debug and never fatal to the run.
pub fn aggregate(
    entries: &[RawMarketEntry],
    profile: &AssetProfile,
    tie_break: TieBreak,
    current_price: f64,
) -> SentimentSummary {
    let mut upside = Vec::new();
    let mut downside = Vec::new();

    for raw in entries {
        let probability = match raw.yes_probability_pct() {
            Some(p) => p,
            None => {
                debug!(label = %raw.label, "skipping market without a usable yes-quote");
                continue;
            }
        };
        let price = match extract_price(&raw.label, profile) {
            Some(p) => p,
            None => {
                debug!(label = %raw.label, "skipping market without an in-range price");
                continue;
            }
        };
        let direction = match classify_direction(&raw.label) {
            Some(d) => d,
            None => {
                debug!(label = %raw.label, "skipping market without a direction marker");
                continue;
            }
        };

        let entry = PriceTargetEntry {
            price,
            probability,
            direction,
            volume: raw.volume,
        };
        match direction {
            Direction::Up => upside.push(entry),
            Direction::Down => downside.push(entry),
        }
    }

    let upside = sorted_by_price(dedupe(upside, tie_break));
    let downside = sorted_by_price(dedupe(downside, tie_break));

    let expected_high = expected_value(&upside, Direction::Up, current_price);
    let expected_low = expected_value(&downside, Direction::Down, current_price);

    SentimentSummary {
        upside,
        downside,
        expected_high,
        expected_low,
        current_price,
    }
}
