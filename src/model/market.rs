/// One prediction-market contract as received from the upstream feed.
///
/// Constructed fresh per fetch, consumed by a single aggregation pass.
#[derive(Debug, Clone)]
pub struct RawMarketEntry {
    /// Human-readable question, e.g. "Will Bitcoin reach $120,000?".
    pub label: String,
    /// Outcome names, typically ["Yes", "No"].
    pub outcomes: Vec<String>,
    /// Probabilities aligned with `outcomes`, each in [0, 1].
    pub outcome_probabilities: Vec<f64>,
    /// Trading volume, used as a deduplication tie-break weight.
    pub volume: f64,
}

impl RawMarketEntry {
    /// Percent chance the market resolves "Yes".
    ///
    /// Locates the outcome whose name contains "yes" (case-insensitive) and
    /// returns its aligned probability scaled to [0, 100]. `None` when the
    /// market has no yes outcome, the arrays are misaligned, or the quoted
    /// value is out of range; such records are skipped, never defaulted.
    pub fn yes_probability_pct(&self) -> Option<f64> {
        let idx = self
            .outcomes
            .iter()
            .position(|name| name.to_lowercase().contains("yes"))?;
        let p = *self.outcome_probabilities.get(idx)?;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return None;
        }
        Some(p * 100.0)
    }
}
