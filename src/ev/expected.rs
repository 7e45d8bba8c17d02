use crate::ev::marginal::to_marginal;
use crate::model::target::{Direction, PriceTargetEntry};

/// Expected extreme price for one ladder: the discrete expectation over
/// {residual mass at `reference_price`} ∪ {marginal mass at each level}.
///
/// `None` for an empty ladder: no data, which is not the same answer as
/// `reference_price`. Under inconsistent quotes the clamp leaves the
/// weights summing away from exactly 1 and the expectation carries a
/// slight bias; that is the accepted trade-off of clamping instead of
/// renormalizing, so test vectors stay exact against the quoted
/// probabilities.
pub fn expected_value(
    ladder: &[PriceTargetEntry],
    direction: Direction,
    reference_price: f64,
) -> Option<f64> {
    if ladder.is_empty() {
        return None;
    }
    let dist = to_marginal(ladder, direction);
    let mut ev = reference_price * dist.residual;
    for level in &dist.levels {
        ev += level.price * level.mass;
    }
    Some(ev)
}
