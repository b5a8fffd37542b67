//! Integration tests for building, evaluating, saving and exporting
//! strategies through the public API.

use strategy_payoff::{
    CsvPayoffExporter, CsvStrategyStore, Leg, OptionLeg, OptionRight, Payoff, Portfolio,
    PositionSide, StockLeg, StockSide, StoreError, StrategyError, StrategySession,
    StrategyStorePort, compute_payoff_curve,
};
use test_case::test_case;

fn net_at(legs: &[Leg], spot: f64) -> f64 {
    legs.iter().map(|leg| leg.payoff(spot)).sum()
}

#[test_case(90.0, -5.0 ; "below strike")]
#[test_case(120.0, 15.0 ; "above strike")]
fn single_long_call(spot: f64, expected: f64) {
    let leg = OptionLeg::new(PositionSide::Long, OptionRight::Call, 100.0, 5.0).unwrap();
    assert_eq!(leg.payoff(spot), expected);
}

#[test]
fn bull_call_spread_at_105() {
    let legs: Vec<Leg> = vec![
        OptionLeg::long_call(100.0, 5.0).unwrap().into(),
        OptionLeg::short_call(110.0, 2.0).unwrap().into(),
    ];
    assert_eq!(net_at(&legs, 105.0), 2.0);
}

#[test_case(80.0, -8.0 ; "loss capped below strike")]
#[test_case(95.0, -8.0 ; "max loss at strike")]
#[test_case(130.0, 27.0 ; "stock gain minus premium")]
fn protective_put(spot: f64, expected: f64) {
    // Buy stock at 100, long 95 put for 3.
    let mut session = StrategySession::new();
    session.add_stock(StockSide::Buy, 100.0).unwrap();
    session
        .add_option(PositionSide::Long, OptionRight::Put, 95.0, 3.0)
        .unwrap();

    let legs: Vec<Leg> = session.portfolio().legs().collect();
    assert!((net_at(&legs, spot) - expected).abs() < 1e-12);
}

#[test]
fn default_grid_shape() {
    let curve = compute_payoff_curve(Vec::<Leg>::new(), 0.0, 200.0, 1001).unwrap();
    assert_eq!(curve.spots().len(), 1001);
    assert_eq!(curve.spots()[0], 0.0);
    assert_eq!(curve.spots()[1000], 200.0);
}

#[test_case(0 ; "zero")]
#[test_case(1 ; "one")]
fn resolution_below_two_is_invalid(resolution: usize) {
    let err = compute_payoff_curve(Vec::<Leg>::new(), 0.0, 200.0, resolution).unwrap_err();
    assert!(matches!(err, StrategyError::InvalidArgument { .. }));
}

#[test]
fn resolution_two_returns_bounds() {
    let curve = compute_payoff_curve(Vec::<Leg>::new(), 25.0, 75.0, 2).unwrap();
    assert_eq!(curve.spots(), &[25.0, 75.0]);
}

#[test]
fn overflowing_price_range_is_invalid() {
    let err = compute_payoff_curve(Vec::<Leg>::new(), -1e308, 1e308, 3).unwrap_err();
    assert!(matches!(err, StrategyError::InvalidArgument { .. }));
}

#[test]
fn session_seeded_with_portfolio_evaluates_its_legs() {
    let portfolio: Portfolio = [
        Leg::from(OptionLeg::long_put(95.0, 3.0).unwrap()),
        Leg::from(StockLeg::buy(100.0).unwrap()),
    ]
    .into_iter()
    .collect();
    let session = StrategySession::with_portfolio(portfolio.clone());
    assert_eq!(session.portfolio(), &portfolio);

    let curve = session.payoff_curve(50.0, 150.0, 11).unwrap();
    assert_eq!(curve.grid().len(), 11);
    assert_eq!(curve.grid().s_min(), 50.0);
    assert_eq!(curve.grid().s_max(), 150.0);
    assert_eq!(curve.grid().points(), curve.spots());
    // Floor of 95 - 100 - 3 below the strike.
    assert_eq!(curve.net()[0], -8.0);
}

#[test]
fn iron_condor_summary() {
    let mut session = StrategySession::new();
    session
        .add_option(PositionSide::Long, OptionRight::Put, 80.0, 1.0)
        .unwrap();
    session
        .add_option(PositionSide::Short, OptionRight::Put, 90.0, 3.0)
        .unwrap();
    session
        .add_option(PositionSide::Short, OptionRight::Call, 110.0, 3.0)
        .unwrap();
    session
        .add_option(PositionSide::Long, OptionRight::Call, 120.0, 1.0)
        .unwrap();

    // Credit 4, wings 10 wide.
    let curve = session.payoff_curve(60.0, 140.0, 81).unwrap();
    let summary = curve.summary();

    let best = summary.max_profit.unwrap();
    let worst = summary.max_loss.unwrap();
    assert!((best.value - 4.0).abs() < 1e-9);
    assert!((worst.value + 6.0).abs() < 1e-9);
    assert_eq!(summary.breakevens.len(), 2);
    assert!((summary.breakevens[0] - 86.0).abs() < 1e-9);
    assert!((summary.breakevens[1] - 114.0).abs() < 1e-9);
}

#[test]
fn save_load_and_export_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStrategyStore::new(dir.path().join("my_strategy.csv"));
    let exporter = CsvPayoffExporter::new(dir.path().join("payoff_data.csv"));

    let mut session = StrategySession::new();
    session
        .add_option(PositionSide::Short, OptionRight::Call, 110.0, 2.0)
        .unwrap();
    session.add_stock(StockSide::Buy, 100.0).unwrap();
    session.save(&store).unwrap();

    let saved = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(
        saved,
        "type,position,option_type,strike_or_entry,premium\n\
         option,short,call,110.0,2.0\n\
         stock,buy,,100.0,0\n"
    );

    let mut reloaded = StrategySession::new();
    assert_eq!(reloaded.load(&store).unwrap(), 2);
    assert_eq!(reloaded.labels(), session.labels());

    let curve = reloaded.payoff_curve(0.0, 200.0, 1001).unwrap();
    reloaded.export(&curve, &exporter).unwrap();

    let exported = std::fs::read_to_string(exporter.path()).unwrap();
    let lines: Vec<&str> = exported.lines().collect();
    assert_eq!(lines.len(), 1002);
    assert_eq!(lines[0], "Spot,Net_Payoff");
    // Covered call: stock -100 + premium 2 at spot 0.
    assert_eq!(lines[1], "0.0,-98.0");
    // Capped at (110 - 100) + 2 above the strike.
    assert_eq!(lines[1001], "200.0,12.0");
}

#[test]
fn malformed_file_leaves_session_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(
        &path,
        "type,position,option_type,strike_or_entry,premium\nbond,long,,100,0\n",
    )
    .unwrap();

    let mut session = StrategySession::new();
    session.add_stock(StockSide::Sell, 50.0).unwrap();
    let before = session.portfolio().clone();

    let err = session.load(&CsvStrategyStore::new(&path)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Strategy(StrategyError::MalformedRecord { line: 2, .. })
    ));
    assert_eq!(session.portfolio(), &before);
}

#[test]
fn store_location_is_the_path() {
    let store = CsvStrategyStore::new("my_strategy.csv");
    assert_eq!(store.location(), "my_strategy.csv");
}
