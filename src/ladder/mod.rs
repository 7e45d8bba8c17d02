use std::collections::{hash_map::Entry, HashMap};

use serde::Deserialize;

use crate::model::target::PriceTargetEntry;

/// Which signal wins when several raw entries resolve to the same price.
///
/// The upstream feed routinely lists the same threshold more than once
/// (restated questions, stale duplicates). Which duplicate best represents
/// the market is a caller judgement: volume trusts liquidity, probability
/// trusts the quote itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    Volume,
    Probability,
}

impl TieBreak {
    fn key(self, entry: &PriceTargetEntry) -> f64 {
        match self {
            TieBreak::Volume => entry.volume,
            TieBreak::Probability => entry.probability,
        }
    }
}

/// Collapse entries sharing a canonical price down to one per price,
/// keeping the entry that maximizes the tie-break projection.
///
/// Grouping is bit-exact on the canonicalized price, not on the source
/// text. Result order is unspecified; callers sort afterwards.
pub fn dedupe(entries: Vec<PriceTargetEntry>, tie_break: TieBreak) -> Vec<PriceTargetEntry> {
    dedupe_by_key(entries, |e| tie_break.key(e))
}

/// Generic form of [`dedupe`] for callers injecting their own projection.
pub fn dedupe_by_key<K>(entries: Vec<PriceTargetEntry>, key: K) -> Vec<PriceTargetEntry>
where
    K: Fn(&PriceTargetEntry) -> f64,
{
    let mut best: HashMap<u64, PriceTargetEntry> = HashMap::with_capacity(entries.len());
    for entry in entries {
        match best.entry(entry.price.to_bits()) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
            Entry::Occupied(mut slot) => {
                if key(&entry) > key(slot.get()) {
                    slot.insert(entry);
                }
            }
        }
    }
    best.into_values().collect()
}

/// Sort a deduplicated ladder ascending by price.
pub fn sorted_by_price(mut entries: Vec<PriceTargetEntry>) -> Vec<PriceTargetEntry> {
    entries.sort_by(|a, b| {
        a.price
            .partial_cmp(&b.price)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries
}
