//! Candidate selection from ranked bond lists.
//!
//! Two consumers of a `BondGroup`'s rankings live here: picking the next
//! bond to suggest for an existing portfolio, and filling a fresh portfolio
//! greedily up to a dollar budget.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use ladder_bonds::{Bond, PaymentSource};

use crate::portfolio::Portfolio;

/// Budget constraints for greedy portfolio construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPolicy {
    /// Target total purchase cost.
    pub target: Decimal,

    /// How close to the target counts as done, and how far past it counts
    /// as overshooting.
    pub tolerance: Decimal,

    /// Units to order per bond, capped by availability.
    pub order_quantity: u32,

    /// Bonds offering fewer units than this are skipped.
    pub min_quantity: u32,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            target: dec!(350_000.00),
            tolerance: dec!(20_000.00),
            order_quantity: 50,
            min_quantity: 10,
        }
    }
}

impl BudgetPolicy {
    /// Creates a policy with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target total cost.
    #[must_use]
    pub fn with_target(mut self, target: Decimal) -> Self {
        self.target = target;
        self
    }

    /// Sets the completion/overshoot tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the per-bond order size.
    #[must_use]
    pub fn with_order_quantity(mut self, order_quantity: u32) -> Self {
        self.order_quantity = order_quantity;
        self
    }

    /// Sets the minimum acceptable lot.
    #[must_use]
    pub fn with_min_quantity(mut self, min_quantity: u32) -> Self {
        self.min_quantity = min_quantity;
        self
    }
}

/// How a budget fill ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillStatus {
    /// Landed within tolerance of the target.
    Complete,
    /// The last order pushed the total past target plus tolerance.
    OverBudget,
    /// The ranked list ran out before the target was reached.
    Exhausted,
}

/// One purchase in a budget fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The bond to buy.
    pub cusip: String,
    /// The bond's description.
    pub description: String,
    /// Units to order.
    pub quantity: u32,
    /// Purchase cost at the ask.
    pub cost: Decimal,
}

/// Result of a budget fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetFill {
    /// Purchases in ranked order.
    pub orders: Vec<OrderLine>,
    /// Total cost of the orders.
    pub invested: Decimal,
    /// How the fill ended.
    pub status: FillStatus,
}

/// Picks the first ranked bond worth suggesting for a portfolio.
///
/// Bonds already held, bonds the owner removed earlier, and bonds without
/// `quantity` units available are passed over. Returns `None` when the list
/// is exhausted; callers simply try another ranking or give up.
#[must_use]
pub fn recommend<'a>(
    ranked: &[&'a Bond],
    portfolio: &Portfolio,
    quantity: u32,
) -> Option<&'a Bond> {
    ranked
        .iter()
        .find(|bond| {
            !portfolio.contains(bond.cusip())
                && !portfolio.was_removed(bond.cusip())
                && bond.available() >= quantity
        })
        .copied()
}

/// Fills a purchase list greedily from a ranked bond list until the budget
/// target is met.
///
/// Each bond is ordered at `min(available, order_quantity)` units; offerings
/// below the minimum lot are skipped. The fill stops once the total lands
/// within tolerance of the target on either side, reporting `OverBudget`
/// when the final order pushed it further past.
#[must_use]
pub fn fill_to_budget(ranked: &[&Bond], policy: &BudgetPolicy) -> BudgetFill {
    let mut orders = Vec::new();
    let mut invested = Decimal::ZERO;

    for bond in ranked {
        let quantity = bond.available().min(policy.order_quantity);
        if quantity < policy.min_quantity {
            continue;
        }

        let cost = bond.ask() * Decimal::from(quantity) * dec!(10);
        invested += cost;
        orders.push(OrderLine {
            cusip: bond.cusip().to_string(),
            description: bond.description().to_string(),
            quantity,
            cost,
        });

        if invested > policy.target {
            let status = if invested - policy.target > policy.tolerance {
                FillStatus::OverBudget
            } else {
                FillStatus::Complete
            };
            return BudgetFill {
                orders,
                invested,
                status,
            };
        }
        if policy.target - invested < policy.tolerance {
            return BudgetFill {
                orders,
                invested,
                status: FillStatus::Complete,
            };
        }
    }

    BudgetFill {
        orders,
        invested,
        status: FillStatus::Exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_bonds::Bond;
    use ladder_core::config::{ScheduleHorizon, TaxPolicy};
    use ladder_core::types::Date;

    fn bond(cusip: &str, coupon: &str, ask: &str, quantity_ask: &str) -> Bond {
        let fields: Vec<String> = [
            cusip,
            "TX",
            "SAMPLE ISSUER",
            coupon,
            "06/15/2030",
            "N/A",
            "Aa2",
            "AA",
            "97.00",
            ask,
            "5.1",
            "5.0",
            "5.2",
            "100(10)",
            quantity_ask,
            "",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
        Bond::from_record(
            &fields,
            Some(Date::parse_mdy("01/01/2024").unwrap()),
            &ScheduleHorizon::default(),
            &TaxPolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_recommend_skips_held_removed_and_thin_offers() {
        let held = bond("CUSIP0001", "5.0", "98.50", "500(25)");
        let rejected = bond("CUSIP0002", "5.0", "98.50", "500(25)");
        let thin = bond("CUSIP0003", "5.0", "98.50", "5(5)");
        let pick = bond("CUSIP0004", "5.0", "98.50", "500(25)");

        let mut portfolio = Portfolio::new();
        let tax = TaxPolicy::default();
        portfolio.add_bond(&held, 25, &tax);
        portfolio.add_bond(&rejected, 25, &tax);
        portfolio.remove("CUSIP0002");

        let ranked = vec![&held, &rejected, &thin, &pick];
        let recommended = recommend(&ranked, &portfolio, 50).unwrap();
        assert_eq!(recommended.cusip(), "CUSIP0004");
    }

    #[test]
    fn test_recommend_exhausted() {
        let only = bond("CUSIP0001", "5.0", "98.50", "5(5)");
        let ranked = vec![&only];
        assert!(recommend(&ranked, &Portfolio::new(), 50).is_none());
    }

    #[test]
    fn test_fill_to_budget_completes_within_tolerance() {
        // Each order: 50 units at 100.00 => 50,000.
        let bonds: Vec<Bond> = (0..10)
            .map(|i| bond(&format!("CUSIP{i:04}"), "5.0", "100.00", "500(25)"))
            .collect();
        let ranked: Vec<&Bond> = bonds.iter().collect();

        let policy = BudgetPolicy::default()
            .with_target(dec!(240_000))
            .with_tolerance(dec!(20_000));
        let fill = fill_to_budget(&ranked, &policy);

        // After 5 orders: 250,000 > 240,000, overshoot 10,000 <= tolerance.
        assert_eq!(fill.status, FillStatus::Complete);
        assert_eq!(fill.orders.len(), 5);
        assert_eq!(fill.invested, dec!(250_000));
    }

    #[test]
    fn test_fill_to_budget_skips_thin_offers() {
        let thin = bond("CUSIP0001", "5.0", "100.00", "5(5)");
        let fat = bond("CUSIP0002", "5.0", "100.00", "500(25)");
        let ranked = vec![&thin, &fat];

        let policy = BudgetPolicy::default().with_target(dec!(40_000));
        let fill = fill_to_budget(&ranked, &policy);

        assert_eq!(fill.orders.len(), 1);
        assert_eq!(fill.orders[0].cusip, "CUSIP0002");
        assert_eq!(fill.orders[0].quantity, 50);
        assert_eq!(fill.status, FillStatus::Complete);
    }

    #[test]
    fn test_fill_to_budget_over_budget() {
        // Single huge order blows far past a small target.
        let big = bond("CUSIP0001", "5.0", "100.00", "500(25)");
        let ranked = vec![&big];

        let policy = BudgetPolicy::default()
            .with_target(dec!(10_000))
            .with_tolerance(dec!(5_000));
        let fill = fill_to_budget(&ranked, &policy);

        assert_eq!(fill.status, FillStatus::OverBudget);
        assert_eq!(fill.invested, dec!(50_000));
    }

    #[test]
    fn test_fill_to_budget_exhausted() {
        let only = bond("CUSIP0001", "5.0", "100.00", "50(25)");
        let ranked = vec![&only];
        let fill = fill_to_budget(&ranked, &BudgetPolicy::default());
        assert_eq!(fill.status, FillStatus::Exhausted);
        assert_eq!(fill.orders.len(), 1);
    }

    #[test]
    fn test_order_cost_uses_ask_times_ten() {
        let b = bond("CUSIP0001", "5.0", "98.50", "500(25)");
        let ranked = vec![&b];
        let policy = BudgetPolicy::default().with_target(dec!(40_000));
        let fill = fill_to_budget(&ranked, &policy);
        // 98.50 × 50 × 10
        assert_eq!(fill.orders[0].cost, dec!(49_250));
    }
}
