//! Markdown table rendering.

/// Render a markdown table.
///
/// Rows are emitted in slice order; the key only identifies the row for the
/// caller. Returns an empty string when there are no headers or no rows.
pub fn render<K>(headers: &[&str], rows: &[(K, Vec<String>)]) -> String {
    if headers.is_empty() || rows.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(headers.iter().copied()));
    lines.push(render_row(headers.iter().map(|_| "---")));
    for (_, cells) in rows {
        lines.push(render_row(cells.iter().map(String::as_str)));
    }

    lines.join("\n")
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut row = String::from("|");
    for cell in cells {
        row.push(' ');
        row.push_str(cell);
        row.push_str(" |");
    }
    row
}
