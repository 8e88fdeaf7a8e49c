use crate::table::CandidateTable;

/// Where the presenter sends its output.
///
/// Calls arrive in order: a heading, then either a warning (nothing to rank) or
/// optional debug text followed by one table. Implementations must render
/// `Cell::Link` cells as markup rather than escaping them.
pub trait RenderSurface {
    fn heading(&mut self, text: &str);

    fn warning(&mut self, text: &str);

    /// Preformatted text, used for the raw and sorted data dumps.
    fn text(&mut self, text: &str);

    fn table(&mut self, table: &CandidateTable);
}
