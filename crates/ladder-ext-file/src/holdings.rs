//! Brokerage holdings export reader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use ladder_core::types::Date;

use crate::error::{FileError, FileResult};

// Positional columns in the holdings export.
const COL_CUSIP: usize = 0;
const COL_DESCRIPTION: usize = 1;
const COL_MATURITY: usize = 2;
const COL_COUPON: usize = 4;
const COL_RATING: usize = 5;
const COL_PAR: usize = 6;
const COL_PURCHASE: usize = 7;
const COL_ASK: usize = 8;

/// One held position from a holdings export, shaped for
/// `PortfolioItem::from_record`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingsRecord {
    /// The 7-field portfolio definition record: cusip, description,
    /// maturity date, coupon, ask, rating, available quantity.
    pub fields: Vec<String>,

    /// Units of 1000 face held (the export's par column divided by 1000).
    pub quantity: u32,

    /// Purchase date from the export.
    pub purchase_date: Date,
}

/// Reads a brokerage holdings export.
///
/// The export leads with an index row and a header row, both skipped. Each
/// body row carries the position's par dollars and purchase date alongside
/// the bond fields; par converts to a unit quantity at 1000 face per unit.
/// The export has no availability column, so that field is zero.
///
/// # Errors
///
/// Returns `FileError::MalformedRow` for body rows missing columns or with
/// an unparseable par amount or purchase date — unlike the screening
/// export, a holdings export is owner-curated and a bad row is worth
/// surfacing rather than truncating.
pub fn read_holdings_export(path: impl AsRef<Path>) -> FileResult<Vec<HoldingsRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate().skip(2) {
        let line = index + 1;
        let record = result?;

        let field = |column: usize| -> FileResult<&str> {
            record
                .get(column)
                .ok_or_else(|| FileError::malformed_row(line, format!("missing column {column}")))
        };

        let par: i64 = field(COL_PAR)?
            .trim()
            .replace(',', "")
            .parse()
            .map_err(|_| FileError::malformed_row(line, "unparseable par amount"))?;
        let quantity = (par / 1000) as u32;

        let purchase_date = Date::parse_mdy(field(COL_PURCHASE)?)
            .map_err(|err| FileError::malformed_row(line, err.to_string()))?;

        let fields = vec![
            field(COL_CUSIP)?.to_string(),
            field(COL_DESCRIPTION)?.to_string(),
            field(COL_MATURITY)?.to_string(),
            field(COL_COUPON)?.to_string(),
            field(COL_ASK)?.to_string(),
            field(COL_RATING)?.to_string(),
            "0".to_string(),
        ];

        records.push(HoldingsRecord {
            fields,
            quantity,
            purchase_date,
        });
    }

    Ok(records)
}
