//! Header row location inside noisy cell matrices
//!
//! Real-world exports frequently prepend a title, a logo caption, or blank
//! spacer rows before the actual header; assuming row 0 is the header would
//! silently corrupt every subsequent row. This module scans the top of the
//! matrix for the row that actually looks like a header.
//!
//! Location happens exactly once, before rows are keyed. Once the matrix has
//! been converted to keyed rows the original row order needed for detection
//! is gone.

use crate::app::models::{CellValue, RawRow};
use crate::app::services::header_mapper::AliasDictionary;
use crate::constants::{HEADER_MATCH_THRESHOLD, HEADER_SCAN_DEPTH};
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

/// The detected header row and the column keys it provides
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLocation {
    /// 0-based index of the header row in the original matrix
    pub row_index: usize,

    /// Header cell texts, used as column keys for every following row
    pub keys: Vec<String>,
}

/// Find the true header row in a raw cell matrix
///
/// Scans the first rows top to bottom; a row's match count is the number of
/// cells resolving to a known canonical field, and the first row clearing
/// the threshold wins. If none does, row 0 is accepted as a fallback header
/// when every one of its cells is textual and non-numeric; otherwise the
/// matrix is unprocessable and `None` is returned.
pub fn locate_header(
    matrix: &[Vec<CellValue>],
    dictionary: &AliasDictionary,
) -> Option<HeaderLocation> {
    for (index, row) in matrix.iter().take(HEADER_SCAN_DEPTH).enumerate() {
        let matches = row
            .iter()
            .filter(|cell| dictionary.resolve(&cell.display_text()).is_some())
            .count();

        if matches >= HEADER_MATCH_THRESHOLD {
            debug!(
                "header row located at index {} ({} recognized columns)",
                index, matches
            );
            return Some(HeaderLocation {
                row_index: index,
                keys: row.iter().map(CellValue::display_text).collect(),
            });
        }
    }

    // Fallback: accept row 0 when it is all text and carries no numbers,
    // the shape of a header the dictionary simply does not know yet
    if let Some(first) = matrix.first() {
        if !first.is_empty() && first.iter().all(CellValue::is_non_numeric_text) {
            debug!("no row cleared the match threshold; falling back to row 0 as header");
            return Some(HeaderLocation {
                row_index: 0,
                keys: first.iter().map(CellValue::display_text).collect(),
            });
        }
    }

    warn!("no header row found; matrix is unprocessable");
    None
}

/// Convert the rows below the header into keyed rows
///
/// Each data row's cells are paired with the header keys in column order.
/// Cells beyond the header width have no key and are dropped; short rows
/// simply carry fewer columns.
pub fn key_rows(matrix: &[Vec<CellValue>], location: &HeaderLocation) -> Vec<RawRow> {
    matrix
        .iter()
        .skip(location.row_index + 1)
        .map(|cells| {
            let mut row = RawRow::new();
            for (key, cell) in location.keys.iter().zip(cells.iter()) {
                row.push(key.clone(), cell.clone());
            }
            row
        })
        .collect()
}
