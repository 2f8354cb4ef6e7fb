//! Integration tests for portfolio construction and selection.
//!
//! These exercise the snapshot → ranking → selection → portfolio path the
//! way the report tooling drives it.

use ladder_bonds::{BondGroup, LoadPolicy, PaymentSource, RankBasis};
use ladder_core::config::{ScheduleHorizon, TaxPolicy};
use ladder_core::types::Date;
use ladder_portfolio::{
    fill_to_budget, recommend, BudgetPolicy, FillStatus, Portfolio, PortfolioItem,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn record(
    cusip: &str,
    description: &str,
    coupon: &str,
    maturity: &str,
    ask: &str,
    quantity_ask: &str,
) -> Vec<String> {
    [
        cusip,
        "TX",
        description,
        coupon,
        maturity,
        "N/A",
        "Aa2",
        "AA",
        "97.00",
        ask,
        "5.10",
        "5.00",
        "5.20",
        "100(10)",
        quantity_ask,
        "",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

fn ranked_group() -> BondGroup {
    let records = vec![
        record(
            "CUSIP0001",
            "ALPHA POWER AUTH 5.0%",
            "5.0",
            "06/15/2030",
            "98.50",
            "500(25)",
        ),
        record(
            "CUSIP0002",
            "BRAVO TRANSIT 4.5%",
            "4.5",
            "09/01/2031",
            "99.00",
            "200(10)",
        ),
        record(
            "CUSIP0003",
            "CHARLIE SCHOOLS 4.0%",
            "4.0",
            "12/01/2028",
            "96.50",
            "60(5)",
        ),
        record(
            "CUSIP0004",
            "DELTA WATER 3.5%",
            "3.5",
            "03/01/2029",
            "95.00",
            "8(5)",
        ),
    ];

    let mut group = BondGroup::new();
    group.load(
        records,
        &LoadPolicy::default(),
        &ScheduleHorizon::default(),
        &TaxPolicy::default(),
    );
    group.make_ranking_lists();
    group
}

// =============================================================================
// PORTFOLIO LIFECYCLE
// =============================================================================

#[test]
fn build_portfolio_from_ranked_bonds() {
    let group = ranked_group();
    let tax = TaxPolicy::default();
    let mut portfolio = Portfolio::with_title("test account");

    for bond in group.ranked(RankBasis::Composite).iter().take(2) {
        portfolio.add_bond(bond, 25, &tax);
    }

    assert_eq!(portfolio.len(), 2);
    assert_eq!(portfolio.total_par_value(), dec!(50_000));
    assert!(portfolio.changed());

    let expected_invested: Decimal = portfolio.iter().map(PortfolioItem::position_cost).sum();
    assert_eq!(portfolio.total_invested(), expected_invested);
}

#[test]
fn quantity_changes_flow_through_aggregates() {
    let group = ranked_group();
    let tax = TaxPolicy::default();
    let mut portfolio = Portfolio::new();
    portfolio.add_bond(group.find("CUSIP0001").unwrap(), 50, &tax);

    let invested_before = portfolio.total_invested();
    let income_before = portfolio.yearly_income();
    let unit_profit = portfolio.find_by_cusip("CUSIP0001").unwrap().profit();

    portfolio.increase("CUSIP0001", 10).unwrap();

    // Cost moves by ask/100 × Δ × 1000; per-unit profit is untouched.
    assert_eq!(
        portfolio.total_invested() - invested_before,
        dec!(98.50) / dec!(100) * dec!(10) * dec!(1000)
    );
    assert_eq!(
        portfolio.yearly_income() - income_before,
        dec!(50) * dec!(10)
    );
    assert_eq!(
        portfolio.find_by_cusip("CUSIP0001").unwrap().profit(),
        unit_profit
    );

    // Underflow reports and leaves everything alone.
    assert!(portfolio.decrease("CUSIP0001", 100).is_err());
    assert_eq!(portfolio.find_by_cusip("CUSIP0001").unwrap().quantity(), 60);
}

#[test]
fn combined_matrix_tracks_every_position() {
    let group = ranked_group();
    let tax = TaxPolicy::exempt();
    let mut portfolio = Portfolio::new();
    portfolio.add_bond(group.find("CUSIP0001").unwrap(), 50, &tax);
    portfolio.add_bond(group.find("CUSIP0003").unwrap(), 20, &tax);

    let combined = portfolio.combined_income_matrix();
    let horizon = ScheduleHorizon::default();

    // June 2030 only the 5% bond pays: 2.5% × 50 × 10.
    assert_eq!(
        combined.amount(horizon.offset_of(2030).unwrap(), 6),
        dec!(1250)
    );
    // June 2028 both pay: 1250 + 2.0% × 20 × 10.
    assert_eq!(
        combined.amount(horizon.offset_of(2028).unwrap(), 6),
        dec!(1250) + dec!(400)
    );

    let yearly = portfolio.yearly_interest(&horizon);
    let total_from_years: Decimal = yearly.iter().map(|(_, amount)| *amount).sum();
    assert_eq!(total_from_years, portfolio.total_interest());
}

#[test]
fn holdings_style_items_round_trip_aggregates() {
    // Items built from 7-field records, the holdings-export path.
    let horizon = ScheduleHorizon::default();
    let tax = TaxPolicy::exempt();
    let purchase = Date::parse_mdy("01/05/2024").unwrap();

    let fields: Vec<String> = [
        "912828XY2",
        "ACME WIDGETS CORP 5.0%",
        "06/15/2030",
        "5.0",
        "98.50",
        "AA",
        "0",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect();

    let item =
        PortfolioItem::from_record(&fields, 50, Some(purchase), &horizon, &tax).unwrap();
    let mut portfolio = Portfolio::new();
    portfolio.add_item(item);

    assert_eq!(portfolio.total_invested(), dec!(49_250));
    assert_eq!(portfolio.total_lop(), dec!(-750));
    assert_eq!(portfolio.yearly_income(), dec!(2_500));
}

#[test]
fn portfolio_serde_round_trip() {
    let group = ranked_group();
    let tax = TaxPolicy::exempt();
    let mut portfolio = Portfolio::with_title("ira");
    portfolio.add_bond(group.find("CUSIP0001").unwrap(), 50, &tax);

    let json = serde_json::to_string(&portfolio).unwrap();
    let parsed: Portfolio = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.title(), Some("ira"));
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.total_invested(), portfolio.total_invested());
    assert_eq!(
        parsed.combined_income_matrix(),
        portfolio.combined_income_matrix()
    );
    // The changed flag is session state, not part of the serialized form.
    assert!(!parsed.changed());
}

// =============================================================================
// SELECTION
// =============================================================================

#[test]
fn recommendation_walks_past_unusable_candidates() {
    let group = ranked_group();
    let tax = TaxPolicy::default();
    let ranked = group.ranked(RankBasis::Income);

    let mut portfolio = Portfolio::new();

    // Best bond gets added, so the next call must move on.
    let first = recommend(&ranked, &portfolio, 50).unwrap();
    assert_eq!(first.cusip(), "CUSIP0001");
    portfolio.add_bond(first, 50, &tax);

    let second = recommend(&ranked, &portfolio, 50).unwrap();
    assert_eq!(second.cusip(), "CUSIP0002");
    portfolio.add_bond(second, 50, &tax);

    // CUSIP0003 offers 60, enough; remove it once and it stays ineligible.
    portfolio.add_bond(group.find("CUSIP0003").unwrap(), 20, &tax);
    portfolio.remove("CUSIP0003");

    // CUSIP0004 offers only 8 units: nothing left to recommend.
    assert!(recommend(&ranked, &portfolio, 50).is_none());
}

#[test]
fn budget_fill_respects_lots_and_tolerance() {
    let group = ranked_group();
    let ranked = group.ranked(RankBasis::Composite);

    let policy = BudgetPolicy::default()
        .with_target(dec!(90_000))
        .with_tolerance(dec!(10_000))
        .with_order_quantity(50)
        .with_min_quantity(10);
    let fill = fill_to_budget(&ranked, &policy);

    // CUSIP0004 offers 8 units, below the minimum lot: never ordered.
    assert!(fill.orders.iter().all(|order| order.cusip != "CUSIP0004"));
    assert!(fill
        .orders
        .iter()
        .all(|order| order.quantity >= policy.min_quantity));
    assert_eq!(fill.status, FillStatus::Complete);
    assert!(fill.invested > policy.target - policy.tolerance);
    assert!(fill.invested <= policy.target + policy.tolerance);

    let total: Decimal = fill.orders.iter().map(|order| order.cost).sum();
    assert_eq!(total, fill.invested);
}
