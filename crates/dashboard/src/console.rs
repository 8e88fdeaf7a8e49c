use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use presenter::{CandidateTable, RenderSurface};
use std::fmt::Write;

/// Renders dashboard sections as plain text for a terminal.
#[derive(Debug, Default)]
pub struct ConsoleDashboard {
    output: String,
}

impl ConsoleDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl RenderSurface for ConsoleDashboard {
    fn heading(&mut self, text: &str) {
        let _ = writeln!(self.output, "\n{text}\n{}", "=".repeat(text.chars().count()));
    }

    fn warning(&mut self, text: &str) {
        let _ = writeln!(self.output, "warning: {text}");
    }

    fn text(&mut self, text: &str) {
        let _ = writeln!(self.output, "{text}");
    }

    fn table(&mut self, table: &CandidateTable) {
        let mut rendered = Table::new();
        rendered
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(table.columns.clone());

        for row in &table.rows {
            rendered.add_row(row.cells.iter().map(|c| c.display_text()).collect::<Vec<_>>());
        }

        let _ = writeln!(self.output, "{rendered}");
    }
}
