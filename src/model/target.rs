use serde::{Deserialize, Serialize};

/// Side of the current price a claim sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// A resolved, directioned price claim.
///
/// `probability` is cumulative in the market sense: the quoted percent
/// chance the asset touches `price` or beyond before expiry. `volume` is
/// carried from the raw entry so the volume tie-break has its signal.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriceTargetEntry {
    pub price: f64,
    /// Percent in [0, 100].
    pub probability: f64,
    pub direction: Direction,
    pub volume: f64,
}
