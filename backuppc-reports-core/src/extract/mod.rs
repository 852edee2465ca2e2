//! Host summary table extraction
//!
//! Parses the summary page, finds the host table by element id, skips the
//! header row and maps each remaining row's twelve `td` cells positionally
//! into a [`HostStatus`]. Cell counts are checked before mapping so a layout
//! change upstream surfaces as one typed [`ExtractError`].

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{ExtractError, ExtractResult};
use crate::models::{HostField, HostStatus, HostTable};

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("TABLE_SELECTOR is a valid CSS selector"));

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("ROW_SELECTOR is a valid CSS selector"));

static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("CELL_SELECTOR is a valid CSS selector"));

/// Extracts host records from the dashboard markup
pub struct TableExtractor {
    table_id: String,
}

impl TableExtractor {
    /// Creates an extractor for the table with the given element id
    #[must_use]
    pub fn new(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
        }
    }

    /// Extracts all host rows, top to bottom.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::TableNotFound`] if no table carries the id
    /// - [`ExtractError::CellCount`] if a data row does not have 12 cells
    /// - [`ExtractError::EmptyHostname`] if a data row's first cell is blank
    pub fn extract(&self, markup: &str) -> ExtractResult<HostTable> {
        let document = Html::parse_document(markup);

        let table = document
            .select(&TABLE_SELECTOR)
            .find(|t| t.value().id() == Some(self.table_id.as_str()))
            .ok_or_else(|| ExtractError::TableNotFound(self.table_id.clone()))?;

        let mut hosts = Vec::new();

        // Row numbers are 1-based and count the header row.
        for (index, row) in rows_of(table).into_iter().enumerate().skip(1) {
            let row_number = index + 1;
            let cells: Vec<String> = row
                .select(&CELL_SELECTOR)
                .map(|td| cell_text(&td))
                .collect();

            // Extra header rows made of `th` cells carry no data.
            if cells.is_empty() {
                tracing::trace!(row = row_number, "Skipping row without data cells");
                continue;
            }

            let cells: [String; HostField::COUNT] =
                cells
                    .try_into()
                    .map_err(|cells: Vec<String>| ExtractError::CellCount {
                        row: row_number,
                        expected: HostField::COUNT,
                        found: cells.len(),
                    })?;

            if cells[0].is_empty() {
                return Err(ExtractError::EmptyHostname { row: row_number });
            }

            hosts.push(HostStatus::from_cells(cells));
        }

        tracing::debug!(table = %self.table_id, hosts = hosts.len(), "Extracted host rows");
        Ok(HostTable::new(hosts))
    }
}

/// Rows belonging to this table, ignoring rows of nested tables
fn rows_of(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let table_node = table.id();
    table
        .select(&ROW_SELECTOR)
        .filter(|row| {
            row.ancestors()
                .filter_map(ElementRef::wrap)
                .find(|el| el.value().name() == "table")
                .is_some_and(|owner| owner.id() == table_node)
        })
        .collect()
}

/// Concatenated text content of a cell with surrounding whitespace trimmed
fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
