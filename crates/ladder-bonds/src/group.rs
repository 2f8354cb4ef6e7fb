//! Bond screening: batch loading, filtering, and ranking.

use std::cmp::Reverse;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ladder_core::config::{ScheduleHorizon, TaxPolicy};
use ladder_core::types::Date;

use crate::bond::Bond;
use crate::market::{self, MarketField};
use crate::ranking::ScoreList;
use crate::traits::PaymentSource;

/// Which ranking axis to order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankBasis {
    /// Yearly coupon income.
    Income,
    /// Projected after-tax profit.
    Profit,
    /// Sum of the income and profit ranks.
    Composite,
}

/// A bond dropped by the description-exclusion filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionHit {
    /// The excluded bond's cusip.
    pub cusip: String,
    /// The excluded bond's description.
    pub description: String,
    /// The exclusion substring that matched.
    pub pattern: String,
}

/// Filter settings applied while loading a market snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadPolicy {
    /// Bonds maturing after this year are dropped.
    pub max_year: i32,

    /// When set, callable bonds are dropped.
    pub call_protected: bool,

    /// When set, bonds whose description contains an exclusion substring
    /// are dropped and logged.
    pub use_exclusions: bool,

    /// Exclusion substrings; empty entries are ignored.
    pub exclusions: Vec<String>,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            max_year: 2036,
            call_protected: true,
            use_exclusions: false,
            exclusions: Vec::new(),
        }
    }
}

impl LoadPolicy {
    /// Creates a policy with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum acceptable maturity year.
    #[must_use]
    pub fn with_max_year(mut self, max_year: i32) -> Self {
        self.max_year = max_year;
        self
    }

    /// Sets whether callable bonds are dropped.
    #[must_use]
    pub fn with_call_protected(mut self, call_protected: bool) -> Self {
        self.call_protected = call_protected;
        self
    }

    /// Enables the exclusion filter with the given substrings.
    #[must_use]
    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.use_exclusions = true;
        self.exclusions = exclusions;
        self
    }
}

/// Counts from one `BondGroup::load` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Bonds that survived every filter.
    pub loaded: usize,
    /// Records that failed to parse (skipped, never fatal).
    pub malformed: usize,
    /// Bonds dropped by the exclusion filter.
    pub excluded: usize,
    /// Bonds maturing past the policy's max year.
    pub maturity_filtered: usize,
    /// Callable bonds dropped by call protection.
    pub call_filtered: usize,
}

/// An ordered collection of bonds from one market snapshot.
///
/// Bonds keep their source order. Ranking produces three derived orderings
/// over the same bonds; the rank fields live on the bonds themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BondGroup {
    bonds: Vec<Bond>,
    excluded: Vec<ExclusionHit>,
    best_income: Vec<usize>,
    best_profit: Vec<usize>,
    best_composite: Vec<usize>,
}

impl BondGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bonds in load order.
    #[must_use]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Returns the number of bonds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    /// Returns true when the group holds no bonds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    /// Iterates the bonds in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bond> {
        self.bonds.iter()
    }

    /// Appends a bond, invalidating any previous rankings.
    pub fn push(&mut self, bond: Bond) {
        self.bonds.push(bond);
        self.clear_rankings();
    }

    /// Finds a bond by cusip. A miss is not an error.
    #[must_use]
    pub fn find(&self, cusip: &str) -> Option<&Bond> {
        self.bonds.iter().find(|bond| bond.cusip() == cusip)
    }

    /// Returns the exclusion-filter log.
    #[must_use]
    pub fn excluded(&self) -> &[ExclusionHit] {
        &self.excluded
    }

    /// Loads raw snapshot records, applying the policy's filters in order:
    /// exclusion, maturity, call protection.
    ///
    /// Malformed records are logged and skipped; a bad record never aborts
    /// the batch. Survivors are appended in source order.
    pub fn load<I>(
        &mut self,
        records: I,
        policy: &LoadPolicy,
        horizon: &ScheduleHorizon,
        tax: &TaxPolicy,
    ) -> LoadSummary
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut summary = LoadSummary::default();

        for record in records {
            if policy.use_exclusions {
                if let Some(hit) = self.exclusion_hit(&record, &policy.exclusions) {
                    log::debug!(
                        "{} {} excluded by [{}]",
                        hit.cusip,
                        hit.description,
                        hit.pattern
                    );
                    self.excluded.push(hit);
                    summary.excluded += 1;
                    continue;
                }
            }

            // Maturity is pre-checked from the raw field so an out-of-policy
            // year is a filter outcome, not a construction error.
            if let Some(year) = maturity_year(&record) {
                if year > policy.max_year {
                    summary.maturity_filtered += 1;
                    continue;
                }
            }

            let bond = match Bond::from_record(&record, None, horizon, tax) {
                Ok(bond) => bond,
                Err(err) => {
                    log::warn!("skipping bond record: {err}");
                    summary.malformed += 1;
                    continue;
                }
            };

            if policy.call_protected && bond.is_callable() {
                summary.call_filtered += 1;
                continue;
            }

            self.bonds.push(bond);
            summary.loaded += 1;
        }

        self.clear_rankings();
        summary
    }

    fn exclusion_hit(&self, record: &[String], exclusions: &[String]) -> Option<ExclusionHit> {
        let description = record.get(MarketField::Description.index())?;
        let pattern = exclusions
            .iter()
            .find(|pattern| !pattern.is_empty() && description.contains(pattern.as_str()))?;
        let cusip = record
            .get(MarketField::Cusip.index())
            .map(|raw| market::normalize_cusip(raw).to_string())
            .unwrap_or_default();
        Some(ExclusionHit {
            cusip,
            description: description.clone(),
            pattern: pattern.clone(),
        })
    }

    /// Sorts the group by coupon, highest first. Invalidates rankings.
    pub fn sort_by_coupon(&mut self) {
        self.bonds.sort_by_key(|bond| Reverse(bond.coupon()));
        self.clear_rankings();
    }

    /// Sorts the group by ask yield to maturity, highest first.
    /// Invalidates rankings.
    pub fn sort_by_ask_yield(&mut self) {
        self.bonds
            .sort_by_key(|bond| Reverse(bond.ask_yield_maturity()));
        self.clear_rankings();
    }

    /// Mean ask yield to maturity over the first `limit` bonds.
    #[must_use]
    pub fn average_ask_yield(&self, limit: usize) -> Option<Decimal> {
        let count = self.bonds.len().min(limit);
        if count == 0 {
            return None;
        }
        let sum: Decimal = self.bonds[..count]
            .iter()
            .map(Bond::ask_yield_maturity)
            .sum();
        Some(sum / Decimal::from(count as u64))
    }

    /// Assigns income, profit, and composite ranks to every bond.
    ///
    /// Composite is the sum of the two axis ranks; rank 1 is best on each
    /// axis, so lower composite means better overall.
    pub fn rank_bonds(&mut self) {
        ScoreList::rank_items(
            &mut self.bonds,
            PaymentSource::yearly_income,
            Bond::set_income_rank,
        );
        ScoreList::rank_items(&mut self.bonds, PaymentSource::profit, Bond::set_profit_rank);
        for bond in &mut self.bonds {
            bond.set_composite_rank(bond.income_rank() + bond.profit_rank());
        }
    }

    /// Ranks the bonds and rebuilds the three best-first orderings.
    pub fn make_ranking_lists(&mut self) {
        self.rank_bonds();
        self.best_income = self.order_by(|bond| bond.income_rank());
        self.best_profit = self.order_by(|bond| bond.profit_rank());
        self.best_composite = self.order_by(|bond| bond.composite_rank());
    }

    fn order_by(&self, rank: impl Fn(&Bond) -> u32) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.bonds.len()).collect();
        order.sort_by_key(|&i| rank(&self.bonds[i]));
        order
    }

    /// Returns the bonds best-first along the given axis.
    ///
    /// Empty until `make_ranking_lists` has run.
    #[must_use]
    pub fn ranked(&self, basis: RankBasis) -> Vec<&Bond> {
        let order = match basis {
            RankBasis::Income => &self.best_income,
            RankBasis::Profit => &self.best_profit,
            RankBasis::Composite => &self.best_composite,
        };
        order.iter().map(|&i| &self.bonds[i]).collect()
    }

    fn clear_rankings(&mut self) {
        self.best_income.clear();
        self.best_profit.clear();
        self.best_composite.clear();
    }
}

fn maturity_year(record: &[String]) -> Option<i32> {
    let raw = record.get(MarketField::MaturityDate.index())?;
    Date::parse_mdy(raw).ok().map(|date| date.year())
}

impl<'a> IntoIterator for &'a BondGroup {
    type Item = &'a Bond;
    type IntoIter = std::slice::Iter<'a, Bond>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
