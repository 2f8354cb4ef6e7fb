//! Portfolio container and aggregates.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use ladder_bonds::{Bond, PaymentMatrix, PaymentSource};
use ladder_core::config::{ScheduleHorizon, TaxPolicy};

use crate::error::{PortfolioError, PortfolioResult};
use crate::item::PortfolioItem;

/// An ordered collection of held positions.
///
/// Items keep insertion order. Removed items move to an audit log rather
/// than disappearing, so selection logic can avoid re-recommending a bond
/// the owner already rejected. The changed flag tracks unsaved edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    title: Option<String>,
    file_path: Option<PathBuf>,
    items: Vec<PortfolioItem>,
    removed: Vec<PortfolioItem>,
    #[serde(skip)]
    changed: bool,
}

impl Portfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty portfolio with a title.
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// The portfolio title, if set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// The backing file path, if the portfolio has been saved.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Sets the backing file path.
    pub fn set_file_path(&mut self, path: impl Into<PathBuf>) {
        self.file_path = Some(path.into());
    }

    /// True when the portfolio has unsaved edits.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Clears the changed flag after a save.
    pub fn mark_saved(&mut self) {
        self.changed = false;
    }

    /// The held items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    /// The removed-item audit log.
    #[must_use]
    pub fn removed(&self) -> &[PortfolioItem] {
        &self.removed
    }

    /// Number of held items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the held items.
    pub fn iter(&self) -> std::slice::Iter<'_, PortfolioItem> {
        self.items.iter()
    }

    /// Adds a position built from a market quote.
    pub fn add_bond(&mut self, bond: &Bond, quantity: u32, tax: &TaxPolicy) -> &PortfolioItem {
        self.add_item(PortfolioItem::from_bond(bond, quantity, tax))
    }

    /// Adds an already-built item.
    pub fn add_item(&mut self, item: PortfolioItem) -> &PortfolioItem {
        self.items.push(item);
        self.changed = true;
        let index = self.items.len() - 1;
        &self.items[index]
    }

    /// Removes an item, moving it to the audit log.
    ///
    /// Returns the removed item, or `None` when the cusip is not held.
    pub fn remove(&mut self, cusip: &str) -> Option<&PortfolioItem> {
        let position = self.items.iter().position(|item| item.cusip() == cusip)?;
        let item = self.items.remove(position);
        self.removed.push(item);
        self.changed = true;
        self.removed.last()
    }

    /// Empties the portfolio, dropping items, the audit log, the title and
    /// the file path.
    pub fn clear(&mut self) {
        *self = Self {
            changed: true,
            ..Self::default()
        };
    }

    /// True when the cusip is currently held.
    #[must_use]
    pub fn contains(&self, cusip: &str) -> bool {
        self.items.iter().any(|item| item.cusip() == cusip)
    }

    /// True when the cusip was removed earlier in this session.
    #[must_use]
    pub fn was_removed(&self, cusip: &str) -> bool {
        self.removed.iter().any(|item| item.cusip() == cusip)
    }

    /// Finds an item by cusip.
    #[must_use]
    pub fn find_by_cusip(&self, cusip: &str) -> Option<&PortfolioItem> {
        self.items.iter().find(|item| item.cusip() == cusip)
    }

    /// Finds an item by 1-based position.
    #[must_use]
    pub fn find_by_position(&self, position: usize) -> Option<&PortfolioItem> {
        if position == 0 {
            return None;
        }
        self.items.get(position - 1)
    }

    /// Finds the first item whose description contains `text`.
    #[must_use]
    pub fn find_by_description(&self, text: &str) -> Option<&PortfolioItem> {
        self.items.iter().find(|item| item.description().contains(text))
    }

    /// Increases a held position.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` when the cusip is not held; callers treat
    /// this as a report-and-continue condition.
    pub fn increase(&mut self, cusip: &str, delta: u32) -> PortfolioResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.cusip() == cusip)
            .ok_or_else(|| PortfolioError::item_not_found(cusip))?;
        item.increase(delta);
        self.changed = true;
        Ok(())
    }

    /// Decreases a held position.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` for an unknown cusip and `QuantityUnderflow`
    /// when more units are requested than held; either way the portfolio is
    /// untouched.
    pub fn decrease(&mut self, cusip: &str, delta: u32) -> PortfolioResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.cusip() == cusip)
            .ok_or_else(|| PortfolioError::item_not_found(cusip))?;
        item.decrease(delta)?;
        self.changed = true;
        Ok(())
    }

    /// Total purchase cost across all positions.
    #[must_use]
    pub fn total_invested(&self) -> Decimal {
        self.items.iter().map(PortfolioItem::position_cost).sum()
    }

    /// Total post-tax profit across all positions.
    #[must_use]
    pub fn total_profit(&self) -> Decimal {
        self.items.iter().map(PortfolioItem::position_profit).sum()
    }

    /// Annual coupon income across all positions.
    #[must_use]
    pub fn yearly_income(&self) -> Decimal {
        self.items
            .iter()
            .map(PortfolioItem::position_yearly_income)
            .sum()
    }

    /// Total coupon income over the life of every position.
    #[must_use]
    pub fn total_interest(&self) -> Decimal {
        self.combined_income_matrix().total()
    }

    /// Total face value held.
    #[must_use]
    pub fn total_par_value(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| Decimal::from(item.quantity()) * dec!(1000))
            .sum()
    }

    /// Total loss of principal: amount invested above the face value
    /// returned at maturity.
    #[must_use]
    pub fn total_lop(&self) -> Decimal {
        self.total_invested() - self.total_par_value()
    }

    /// Sums every position's dollar coupon matrix into one portfolio-wide
    /// income matrix.
    #[must_use]
    pub fn combined_income_matrix(&self) -> PaymentMatrix {
        let mut combined = PaymentMatrix::zeros(0);
        for item in &self.items {
            combined.accumulate(item.coupon_matrix());
        }
        combined
    }

    /// Interest income per calendar year, for years with any income.
    #[must_use]
    pub fn yearly_interest(&self, horizon: &ScheduleHorizon) -> Vec<(i32, Decimal)> {
        let combined = self.combined_income_matrix();
        combined
            .iter_years()
            .filter(|(offset, _)| combined.has_income(*offset))
            .map(|(offset, _)| (horizon.year_at(offset), combined.year_total(offset)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a PortfolioItem;
    type IntoIter = std::slice::Iter<'a, PortfolioItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
