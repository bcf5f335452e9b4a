//! Markdown table serialization.

/// Render a pipe-delimited markdown table: header row, one `---` separator
/// cell per header, then the data rows in the order given. No sorting.
///
/// Literal pipes inside cell content are escaped as `\|` so a cell value
/// can never shift the column alignment.
pub fn markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = String::new();
    push_row(&mut table, headers.iter().map(|h| escape_cell(h)));
    push_row(&mut table, headers.iter().map(|_| "---".to_string()));
    for row in rows {
        debug_assert_eq!(row.len(), headers.len(), "row width must match headers");
        push_row(&mut table, row.iter().map(|cell| escape_cell(cell)));
    }
    table
}

fn push_row(table: &mut String, cells: impl Iterator<Item = String>) {
    table.push_str("| ");
    let joined = cells.collect::<Vec<_>>().join(" | ");
    table.push_str(&joined);
    table.push_str(" |\n");
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}
