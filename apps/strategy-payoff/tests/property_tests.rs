//! Property-based tests using proptest.
//!
//! These tests verify the algebraic properties of leg payoffs, the
//! aggregation engine and the strategy CSV codec across random inputs.

use proptest::prelude::*;
use strategy_payoff::{
    Leg, OptionLeg, OptionRight, Payoff, Portfolio, PositionSide, StockLeg, StockSide,
    compute_payoff_curve, deserialize_portfolio, serialize_portfolio,
};

fn option_right() -> impl Strategy<Value = OptionRight> {
    prop_oneof![Just(OptionRight::Call), Just(OptionRight::Put)]
}

fn position_side() -> impl Strategy<Value = PositionSide> {
    prop_oneof![Just(PositionSide::Long), Just(PositionSide::Short)]
}

fn stock_side() -> impl Strategy<Value = StockSide> {
    prop_oneof![Just(StockSide::Buy), Just(StockSide::Sell)]
}

fn leg() -> impl Strategy<Value = Leg> {
    prop_oneof![
        (position_side(), option_right(), 0.0_f64..500.0, 0.0_f64..50.0).prop_map(
            |(side, right, strike, premium)| {
                Leg::Option(OptionLeg::new(side, right, strike, premium).unwrap())
            }
        ),
        (stock_side(), 0.0_f64..500.0)
            .prop_map(|(side, entry)| Leg::Stock(StockLeg::new(side, entry).unwrap())),
    ]
}

// --- Property Test 1: long and short options cancel ---

proptest! {
    /// A long and a short option with identical terms sum to exactly zero.
    #[test]
    fn long_and_short_options_cancel(
        right in option_right(),
        strike in 0.0_f64..500.0,
        premium in 0.0_f64..50.0,
        spot in -100.0_f64..1000.0,
    ) {
        let long = OptionLeg::new(PositionSide::Long, right, strike, premium).unwrap();
        let short = OptionLeg::new(PositionSide::Short, right, strike, premium).unwrap();
        prop_assert_eq!(long.payoff(spot) + short.payoff(spot), 0.0);
    }
}

// --- Property Test 2: closed-form long payoffs ---

proptest! {
    /// Long call and long put match the intrinsic-minus-premium formulas.
    #[test]
    fn long_payoffs_match_closed_form(
        strike in 0.0_f64..500.0,
        premium in 0.0_f64..50.0,
        spot in 0.0_f64..1000.0,
    ) {
        let call = OptionLeg::long_call(strike, premium).unwrap();
        let put = OptionLeg::long_put(strike, premium).unwrap();
        prop_assert_eq!(call.payoff(spot), (spot - strike).max(0.0) - premium);
        prop_assert_eq!(put.payoff(spot), (strike - spot).max(0.0) - premium);
    }
}

// --- Property Test 3: buy and sell stock cancel ---

proptest! {
    /// Bought and sold stock at the same entry sum to exactly zero.
    #[test]
    fn buy_and_sell_stock_cancel(entry in 0.0_f64..500.0, spot in -100.0_f64..1000.0) {
        let buy = StockLeg::buy(entry).unwrap();
        let sell = StockLeg::sell(entry).unwrap();
        prop_assert_eq!(buy.payoff(spot) + sell.payoff(spot), 0.0);
    }
}

// --- Property Test 4: net curve ignores leg order ---

proptest! {
    /// Reversing and rotating the leg list leaves the net curve unchanged
    /// up to floating-point summation error.
    #[test]
    fn net_curve_is_order_invariant(
        legs in prop::collection::vec(leg(), 0..8),
        rotation in 0_usize..8,
    ) {
        let forward = compute_payoff_curve(&legs, 0.0, 600.0, 301).unwrap();

        let mut reversed = legs.clone();
        reversed.reverse();
        let backward = compute_payoff_curve(&reversed, 0.0, 600.0, 301).unwrap();

        let mut rotated = legs.clone();
        if !rotated.is_empty() {
            let shift = rotation % rotated.len();
            rotated.rotate_left(shift);
        }
        let shifted = compute_payoff_curve(&rotated, 0.0, 600.0, 301).unwrap();

        for i in 0..forward.net().len() {
            let a = forward.net()[i];
            prop_assert!((a - backward.net()[i]).abs() <= 1e-9 * (1.0 + a.abs()));
            prop_assert!((a - shifted.net()[i]).abs() <= 1e-9 * (1.0 + a.abs()));
        }
    }
}

// --- Property Test 5: CSV round trip ---

proptest! {
    /// Serializing and parsing a portfolio reconstructs it exactly.
    #[test]
    fn strategy_csv_round_trip(legs in prop::collection::vec(leg(), 0..12)) {
        let portfolio: Portfolio = legs.into_iter().collect();
        let parsed = deserialize_portfolio(&serialize_portfolio(&portfolio)).unwrap();
        prop_assert_eq!(parsed, portfolio);
    }
}

// --- Property Test 6: grid shape ---

proptest! {
    /// Every valid grid starts at s_min, ends at s_max and is increasing.
    #[test]
    fn grid_spans_bounds(
        s_min in -1000.0_f64..1000.0,
        width in 0.001_f64..1000.0,
        resolution in 2_usize..2000,
    ) {
        let s_max = s_min + width;
        prop_assume!(s_min < s_max);

        let curve = compute_payoff_curve(Vec::<Leg>::new(), s_min, s_max, resolution).unwrap();
        let spots = curve.spots();
        prop_assert_eq!(spots.len(), resolution);
        prop_assert_eq!(spots[0], s_min);
        prop_assert_eq!(spots[resolution - 1], s_max);
        prop_assert!(spots.windows(2).all(|w| w[0] <= w[1]));
    }
}
