use std::sync::LazyLock;

use regex::Regex;

use crate::model::asset::AssetProfile;

// Market titles mix shorthand ("$100K") with explicit forms ("$100,000"),
// so candidates are scanned by an ordered rule list rather than one regex:
// the k-suffix form first, then currency-prefixed literals, then any bare
// number. The asset bounds reject accidental matches on unrelated numbers
// (dates, percentages) embedded in the same title.

static RE_K_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[$€£]?\s*(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)\s*k\b").unwrap()
});

static RE_CURRENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[$€£]\s*(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)").unwrap()
});

static RE_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)").unwrap()
});

/// A value this large next to a "k" is already a literal price; scaling
/// would misread "$150,000" in "$150,000k-adjacent" titles as 150,000k.
const K_LITERAL_FLOOR: f64 = 10_000.0;

fn scale_k(value: f64) -> f64 {
    if value >= K_LITERAL_FLOOR {
        value
    } else {
        value * 1_000.0
    }
}

fn literal(value: f64) -> f64 {
    value
}

fn rules() -> [(&'static Regex, fn(f64) -> f64); 3] {
    [
        (&RE_K_SUFFIX, scale_k),
        (&RE_CURRENCY, literal),
        (&RE_BARE, literal),
    ]
}

/// Extract the most plausible in-range price named by `text`.
///
/// Rules are tried in priority order, left-to-right within a rule; the
/// first candidate inside the profile's bounds wins. `None` means the
/// title names no plausible price; callers skip the entry, they never
/// treat this as zero.
pub fn extract_price(text: &str, profile: &AssetProfile) -> Option<f64> {
    for (pattern, normalize) in rules() {
        for caps in pattern.captures_iter(text) {
            let raw = match caps.get(1) {
                Some(m) => m.as_str(),
                None => continue,
            };
            let value = match raw.replace(',', "").parse::<f64>() {
                Ok(v) => v,
                Err(_) => continue,
            };
            let price = normalize(value);
            if profile.contains(price) {
                return Some(price);
            }
        }
    }
    None
}
