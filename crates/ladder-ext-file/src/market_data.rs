//! Market snapshot reader.

use std::path::Path;

use ladder_bonds::market::FIELD_COUNT;

use crate::error::FileResult;

/// Reads a bond screening export into raw 16-field records.
///
/// The header row is skipped. Screening exports end with a free-text
/// disclaimer footer; reading stops silently at the first row that is
/// unreadable or narrower than a full 16-field record, truncating the
/// footer (and anything after it) rather than failing the file. Rows are
/// returned in file order, fields untouched — scrubbing (CUSIP unwrapping,
/// `N/A` placeholders) happens in the bond parser.
///
/// # Errors
///
/// Returns `FileError` only when the file itself cannot be opened.
pub fn read_market_snapshot(path: impl AsRef<Path>) -> FileResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            // Footer junk: truncate, keep what parsed so far.
            Err(_) => break,
        };
        if record.len() < FIELD_COUNT {
            break;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}
