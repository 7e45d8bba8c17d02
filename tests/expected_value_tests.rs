use poly_ladder::ev::{expected_value, to_marginal};
use poly_ladder::model::target::{Direction, PriceTargetEntry};

fn entry(price: f64, probability: f64, direction: Direction) -> PriceTargetEntry {
    PriceTargetEntry {
        price,
        probability,
        direction,
        volume: 0.0,
    }
}

fn up(price: f64, probability: f64) -> PriceTargetEntry {
    entry(price, probability, Direction::Up)
}

#[test]
fn marginal_mass_sums_to_one_for_consistent_quotes() {
    // Non-increasing cumulative quotes as price rises: fully consistent.
    let ladders = [
        vec![up(100_000.0, 70.0), up(120_000.0, 55.0), up(150_000.0, 20.0)],
        vec![up(100_000.0, 100.0), up(110_000.0, 50.0)],
        vec![up(100_000.0, 5.0)],
    ];
    for ladder in &ladders {
        let dist = to_marginal(ladder, Direction::Up);
        assert!(
            (dist.total_mass() - 1.0).abs() < 1e-9,
            "mass {} for ladder of {} levels",
            dist.total_mass(),
            ladder.len()
        );
    }
}

#[test]
fn end_to_end_scenario_from_the_field() {
    // UP ladder [(100000, 70%), (120000, 55%), (150000, 20%)], ref 95000:
    // marginals 15/35/20 with 30 residual -> 115500.
    let ladder = vec![up(100_000.0, 70.0), up(120_000.0, 55.0), up(150_000.0, 20.0)];
    let dist = to_marginal(&ladder, Direction::Up);
    assert!((dist.residual - 0.30).abs() < 1e-12);
    let ev = expected_value(&ladder, Direction::Up, 95_000.0).unwrap();
    assert!((ev - 115_500.0).abs() < 1e-6);
}

#[test]
fn uniformly_bullish_shift_is_monotone_in_expectation() {
    let base = vec![up(100_000.0, 40.0), up(120_000.0, 25.0), up(150_000.0, 10.0)];
    let mut prev = expected_value(&base, Direction::Up, 95_000.0).unwrap();
    for shift in [5.0, 10.0, 20.0, 40.0] {
        let shifted: Vec<PriceTargetEntry> = base
            .iter()
            .map(|e| up(e.price, (e.probability + shift).min(100.0)))
            .collect();
        let ev = expected_value(&shifted, Direction::Up, 95_000.0).unwrap();
        assert!(
            ev >= prev - 1e-9,
            "shift {} lowered EV from {} to {}",
            shift,
            prev,
            ev
        );
        prev = ev;
    }
}

#[test]
fn empty_ladder_is_none_not_reference() {
    assert_eq!(expected_value(&[], Direction::Up, 95_000.0), None);
    assert_eq!(expected_value(&[], Direction::Down, 1.0), None);
}

#[test]
fn down_ladder_expectation_uses_descending_order() {
    // Cumulative quotes fall as the trough gets deeper.
    let ladder = vec![
        entry(80_000.0, 60.0, Direction::Down),
        entry(70_000.0, 30.0, Direction::Down),
        entry(60_000.0, 15.0, Direction::Down),
    ];
    // residual 0.40 at 95000, masses 0.30/0.15/0.15 at 80/70/60k.
    let ev = expected_value(&ladder, Direction::Down, 95_000.0).unwrap();
    let hand = 95_000.0 * 0.40 + 80_000.0 * 0.30 + 70_000.0 * 0.15 + 60_000.0 * 0.15;
    assert!((ev - hand).abs() < 1e-6);
}

#[test]
fn inconsistent_quotes_never_produce_negative_mass() {
    // Stale quote: the 120k threshold more probable than the 100k one.
    let ladder = vec![up(100_000.0, 30.0), up(120_000.0, 55.0), up(150_000.0, 10.0)];
    let dist = to_marginal(&ladder, Direction::Up);
    for level in &dist.levels {
        assert!(level.mass >= 0.0, "negative mass at {}", level.price);
    }
}

#[test]
fn clamped_level_keeps_no_mass_and_nothing_is_redistributed() {
    // 120k quoted more probable than 100k: the 100k level is the stale
    // one under cumulative semantics and ends up with zero mass.
    let ladder = vec![up(100_000.0, 30.0), up(120_000.0, 55.0)];
    let dist = to_marginal(&ladder, Direction::Up);
    assert!((dist.levels[0].mass - 0.0).abs() < 1e-12);
    assert!((dist.levels[1].mass - 0.55).abs() < 1e-12);
    assert!((dist.residual - 0.70).abs() < 1e-12);
    let ev = expected_value(&ladder, Direction::Up, 95_000.0).unwrap();
    // 95000×0.70 + 120000×0.55, no renormalization of the 1.25 total.
    assert!((ev - 132_500.0).abs() < 1e-6);
}
