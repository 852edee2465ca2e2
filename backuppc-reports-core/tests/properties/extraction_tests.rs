//! Property-based tests for host table extraction
//!
//! Extraction is positional: the n-th data cell of every row always lands
//! in the n-th field, whatever the header row says.

use backuppc_reports_core::extract::TableExtractor;
use backuppc_reports_core::models::HostField;
use proptest::prelude::*;

/// Strategy for a hostname cell
fn arb_hostname() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}"
}

/// Strategy for any other cell, possibly empty
fn arb_cell() -> impl Strategy<Value = String> {
    "[A-Za-z0-9.:/_-]{0,12}"
}

/// Strategy for one full row of cells
fn arb_row() -> impl Strategy<Value = Vec<String>> {
    (arb_hostname(), prop::collection::vec(arb_cell(), HostField::COUNT - 1)).prop_map(
        |(host, mut rest)| {
            rest.insert(0, host);
            rest
        },
    )
}

fn render(table_id: &str, rows: &[Vec<String>]) -> String {
    let header: String = HostField::ALL
        .iter()
        .map(|f| format!("<td>{}</td>", f.column_header()))
        .collect();
    let body: String = rows
        .iter()
        .map(|cells| {
            let tds: String = cells
                .iter()
                .map(|c| format!("<td class=\"border\"> {c} </td>"))
                .collect();
            format!("<tr>{tds}</tr>")
        })
        .collect();
    format!("<html><body><table id=\"{table_id}\"><tr>{header}</tr>{body}</table></body></html>")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Positional Field Mapping
    // =========================================================================

    /// Every extracted record carries exactly the trimmed cell text of its
    /// row, field by field, with rows kept in document order.
    #[test]
    fn prop_cells_map_positionally(rows in prop::collection::vec(arb_row(), 0..20)) {
        let markup = render("host_summary_backups", &rows);
        let table = TableExtractor::new("host_summary_backups")
            .extract(&markup)
            .unwrap();

        prop_assert_eq!(table.len(), rows.len());
        for (host, cells) in table.iter().zip(&rows) {
            for (field, cell) in HostField::ALL.iter().zip(cells) {
                prop_assert_eq!(host.field(*field), cell.as_str());
            }
        }
    }

    // =========================================================================
    // Property 2: Wrong Table Identifier
    // =========================================================================

    /// A page without the configured table never yields records.
    #[test]
    fn prop_other_table_id_is_rejected(rows in prop::collection::vec(arb_row(), 1..5)) {
        let markup = render("some_other_table", &rows);
        let result = TableExtractor::new("host_summary_backups").extract(&markup);
        prop_assert!(result.is_err());
    }

    // =========================================================================
    // Property 3: Short Rows
    // =========================================================================

    /// A row missing any cell makes the whole extraction fail.
    #[test]
    fn prop_short_row_is_rejected(
        row in arb_row(),
        drop in 1usize..HostField::COUNT,
    ) {
        let mut short = row.clone();
        short.truncate(HostField::COUNT - drop);
        let markup = render("host_summary_backups", &[row, short]);
        let result = TableExtractor::new("host_summary_backups").extract(&markup);
        prop_assert!(result.is_err());
    }
}
