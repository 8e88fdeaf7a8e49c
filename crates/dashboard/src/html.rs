use chrono::{DateTime, Utc};
use presenter::{CandidateTable, Cell, RenderSurface};
use std::fmt::Write;

const STYLE: &str = r#"
    body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 2rem; color: #262730; }
    h3 { margin-top: 2rem; }
    .warning { background: #fffce7; border-left: 4px solid #f0b400; padding: 0.75rem 1rem; }
    pre { background: #f6f6f9; padding: 0.75rem; overflow-x: auto; }
    table.dataframe { border-collapse: collapse; }
    table.dataframe th, table.dataframe td { padding: 0.3rem 0.6rem; text-align: right; }
    footer { margin-top: 2rem; color: #808495; font-size: 0.85rem; }
"#;

/// Collects dashboard sections as HTML.
#[derive(Debug, Default)]
pub struct HtmlDashboard {
    body: String,
}

impl HtmlDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sections rendered so far, without the page wrapper.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Wraps the rendered sections into a complete page.
    pub fn finish(&self, title: &str, generated_at: DateTime<Utc>) -> String {
        let title = escape_html(title);
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n{}<footer>Generated at {}</footer>\n</body>\n</html>\n",
            self.body,
            generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        )
    }
}

impl RenderSurface for HtmlDashboard {
    fn heading(&mut self, text: &str) {
        let _ = writeln!(self.body, "<h3>{}</h3>", escape_html(text));
    }

    fn warning(&mut self, text: &str) {
        let _ = writeln!(self.body, "<div class=\"warning\">{}</div>", escape_html(text));
    }

    fn text(&mut self, text: &str) {
        let _ = writeln!(self.body, "<pre>{}</pre>", escape_html(text));
    }

    fn table(&mut self, table: &CandidateTable) {
        tracing::debug!(rows = table.len(), "Rendering HTML table.");
        self.body.push_str(&render_table(table));
    }
}

/// Renders a table in the same shape the dashboard always used: a `dataframe`
/// table with a zero-based index column.
fn render_table(table: &CandidateTable) -> String {
    let mut out = String::new();
    out.push_str("<table border=\"1\" class=\"dataframe\">\n");
    out.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n      <th></th>\n");
    for column in &table.columns {
        let _ = writeln!(out, "      <th>{}</th>", escape_html(column));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for (index, row) in table.rows.iter().enumerate() {
        out.push_str("    <tr>\n");
        let _ = writeln!(out, "      <th>{index}</th>");
        for cell in &row.cells {
            let _ = writeln!(out, "      <td>{}</td>", render_cell(cell));
        }
        out.push_str("    </tr>\n");
    }

    out.push_str("  </tbody>\n</table>\n");
    out
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Link(link) => link.anchor(),
        other => escape_html(&other.display_text()),
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
