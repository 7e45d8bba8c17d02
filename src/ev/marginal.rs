use crate::model::target::{Direction, PriceTargetEntry};

/// Probability mass assigned to one listed level being the actual extreme.
#[derive(Debug, Clone, Copy)]
pub struct MarginalLevel {
    pub price: f64,
    pub mass: f64,
}

/// Discrete distribution over "which listed level is the extreme", plus
/// the residual mass for "the extreme never reaches any listed level"
/// (attributed to the current reference price by the aggregator).
#[derive(Debug, Clone)]
pub struct MarginalDistribution {
    pub levels: Vec<MarginalLevel>,
    pub residual: f64,
}

impl MarginalDistribution {
    /// Total assigned mass. Exactly 1 when the cumulative quotes are
    /// consistent; inconsistent quotes can push it past 1, since the
    /// residual is measured against the first level's quote while the
    /// clamp keeps every later level's mass non-negative.
    pub fn total_mass(&self) -> f64 {
        self.residual + self.levels.iter().map(|l| l.mass).sum::<f64>()
    }
}

/// Reinterpret a ladder of cumulative yes-quotes as a probability mass
/// function over the extreme.
///
/// Each market answers "does the price touch this level or beyond"; the
/// events are nested thresholds, not mutually exclusive outcomes, so the
/// marginal mass at level i is the difference of adjacent cumulative
/// quotes once the ladder is ordered from easiest to hardest to reach
/// (ascending price for Up, descending for Down). Negative differences
/// come from stale or arbitraged quotes and are clamped to zero rather
/// than renormalized away.
pub fn to_marginal(ladder: &[PriceTargetEntry], direction: Direction) -> MarginalDistribution {
    if ladder.is_empty() {
        return MarginalDistribution {
            levels: Vec::new(),
            residual: 1.0,
        };
    }

    let mut ordered: Vec<&PriceTargetEntry> = ladder.iter().collect();
    ordered.sort_by(|a, b| {
        let cmp = a
            .price
            .partial_cmp(&b.price)
            .unwrap_or(std::cmp::Ordering::Equal);
        match direction {
            Direction::Up => cmp,
            Direction::Down => cmp.reverse(),
        }
    });

    let cumulative: Vec<f64> = ordered
        .iter()
        .map(|e| (e.probability / 100.0).clamp(0.0, 1.0))
        .collect();

    let mut levels = Vec::with_capacity(ordered.len());
    for (i, entry) in ordered.iter().enumerate() {
        let next = cumulative.get(i + 1).copied().unwrap_or(0.0);
        levels.push(MarginalLevel {
            price: entry.price,
            mass: (cumulative[i] - next).max(0.0),
        });
    }

    MarginalDistribution {
        levels,
        residual: (1.0 - cumulative[0]).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(price: f64, probability: f64, direction: Direction) -> PriceTargetEntry {
        PriceTargetEntry {
            price,
            probability,
            direction,
            volume: 0.0,
        }
    }

    #[test]
    fn consistent_up_ladder_masses_sum_to_one() {
        let ladder = vec![
            entry(100_000.0, 70.0, Direction::Up),
            entry(120_000.0, 55.0, Direction::Up),
            entry(150_000.0, 20.0, Direction::Up),
        ];
        let dist = to_marginal(&ladder, Direction::Up);
        assert!((dist.total_mass() - 1.0).abs() < 1e-12);
        // Hardest level keeps its own cumulative mass.
        assert!((dist.levels[2].mass - 0.20).abs() < 1e-12);
        assert!((dist.levels[1].mass - 0.35).abs() < 1e-12);
        assert!((dist.levels[0].mass - 0.15).abs() < 1e-12);
        assert!((dist.residual - 0.30).abs() < 1e-12);
    }

    #[test]
    fn down_ladder_orders_descending_by_price() {
        let ladder = vec![
            entry(60_000.0, 15.0, Direction::Down),
            entry(80_000.0, 60.0, Direction::Down),
        ];
        let dist = to_marginal(&ladder, Direction::Down);
        // Easiest-first for Down means highest price first.
        assert!((dist.levels[0].price - 80_000.0).abs() < f64::EPSILON);
        assert!((dist.levels[0].mass - 0.45).abs() < 1e-12);
        assert!((dist.levels[1].mass - 0.15).abs() < 1e-12);
        assert!((dist.residual - 0.40).abs() < 1e-12);
    }

    #[test]
    fn inconsistent_quotes_clamp_to_zero() {
        // Higher threshold quoted more probable than the lower one.
        let ladder = vec![
            entry(100_000.0, 40.0, Direction::Up),
            entry(120_000.0, 55.0, Direction::Up),
        ];
        let dist = to_marginal(&ladder, Direction::Up);
        assert!((dist.levels[0].mass - 0.0).abs() < 1e-12);
        assert!((dist.levels[1].mass - 0.55).abs() < 1e-12);
        // The clamp zeroes the out-of-order level; nothing is redistributed,
        // so the total drifts from 1 instead of being forced back onto it.
        assert!(dist.total_mass() >= 1.0 - 1e-12);
    }

    #[test]
    fn input_order_does_not_matter() {
        let shuffled = vec![
            entry(150_000.0, 20.0, Direction::Up),
            entry(100_000.0, 70.0, Direction::Up),
            entry(120_000.0, 55.0, Direction::Up),
        ];
        let dist = to_marginal(&shuffled, Direction::Up);
        assert!((dist.levels[0].price - 100_000.0).abs() < f64::EPSILON);
        assert!((dist.residual - 0.30).abs() < 1e-12);
    }

    #[test]
    fn empty_ladder_is_all_residual() {
        let dist = to_marginal(&[], Direction::Up);
        assert!(dist.levels.is_empty());
        assert!((dist.residual - 1.0).abs() < f64::EPSILON);
    }
}
