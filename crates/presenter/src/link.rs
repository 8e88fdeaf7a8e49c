use serde::Serialize;
use std::fmt;

const CHART_URL_PREFIX: &str = "https://in.tradingview.com/chart?symbol=BSE%3A";

/// A ticker decorated with a link to its TradingView chart on BSE.
///
/// The ticker is substituted verbatim. Bookmarks and scrapers match the anchor
/// byte for byte, so nothing beyond the literal `%3A` is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartLink {
    name: String,
}

impl ChartLink {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn href(&self) -> String {
        format!("{CHART_URL_PREFIX}{}", self.name)
    }

    /// The anchor tag rendered into the dashboard's name column.
    pub fn anchor(&self) -> String {
        format!(
            r#"<a href="{}" target="_blank">{}</a>"#,
            self.href(),
            self.name
        )
    }
}

impl fmt::Display for ChartLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.anchor())
    }
}
