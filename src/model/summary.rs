use serde::Serialize;

use crate::model::target::PriceTargetEntry;

/// Output of one aggregation run for one asset.
///
/// Both ladders are deduplicated and sorted ascending by price. Expected
/// values are `None` when the corresponding ladder is empty: "no data",
/// which callers must not conflate with zero dollars.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentSummary {
    pub upside: Vec<PriceTargetEntry>,
    pub downside: Vec<PriceTargetEntry>,
    pub expected_high: Option<f64>,
    pub expected_low: Option<f64>,
    pub current_price: f64,
}
