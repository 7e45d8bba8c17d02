/// Per-asset configuration for price extraction and aggregation.
///
/// Passed by value into every pipeline call so the core stays stateless;
/// there are no module-level asset constants anywhere.
#[derive(Debug, Clone)]
pub struct AssetProfile {
    pub name: String,
    /// Lowest price a listing for this asset can plausibly name.
    pub min_valid_price: f64,
    /// Highest price a listing for this asset can plausibly name.
    pub max_valid_price: f64,
    /// Fallback current price when no live quote is available.
    pub reference_price: f64,
}

impl AssetProfile {
    /// Bounds check used by the extractor. Inclusive on both ends.
    pub fn contains(&self, price: f64) -> bool {
        price.is_finite() && price >= self.min_valid_price && price <= self.max_valid_price
    }
}
