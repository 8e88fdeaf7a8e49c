use crate::link::ChartLink;
use core_types::{fields, Direction};
use serde::Serialize;
use serde_json::Value;

/// A single displayed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Cell {
    /// Markup that surfaces must render as HTML, not as escaped text.
    Link(ChartLink),
    /// A coerced ranking value.
    Float(f64),
    /// A column passed through from the input record unchanged.
    Value(Value),
}

impl Cell {
    /// Plain-text form of the cell. Links collapse to the bare ticker.
    pub fn display_text(&self) -> String {
        match self {
            Cell::Link(link) => link.name().to_string(),
            Cell::Float(v) => format_float(*v),
            Cell::Value(v) => format_value(v),
        }
    }
}

/// One projected candidate, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRow {
    pub name: String,
    pub strength: f64,
    pub distance_pct: f64,
    pub cells: Vec<Cell>,
}

/// The ranked, capped table handed to a rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateTable {
    pub direction: Direction,
    pub columns: Vec<&'static str>,
    pub rows: Vec<CandidateRow>,
}

impl CandidateTable {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            columns: columns(direction).to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }
}

/// The projected column set for a direction.
pub fn columns(direction: Direction) -> [&'static str; 7] {
    [
        fields::NAME,
        fields::CLOSE,
        direction.level_field(),
        fields::STRENGTH,
        fields::DISTANCE_PCT,
        fields::RSI,
        fields::TREND,
    ]
}

/// Formats a float the way the dashboard has always shown them: the shortest
/// repr, with a trailing `.0` on integral values and scientific notation
/// (`1e+16`, `1.5e-05`) once the decimal exponent leaves `-4..16`.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        let text = if v > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let scientific = format!("{v:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let plain = format!("{v}");
        if plain.contains('.') { plain } else { format!("{plain}.0") }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => n.as_f64().map(format_float).unwrap_or_default(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn floats_keep_a_decimal_when_integral() {
        assert_eq!(format_float(5.0), "5.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(1.25), "1.25");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn large_and_tiny_floats_switch_to_exponents() {
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(-2.5e20), "-2.5e+20");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(1.5e-5), "1.5e-05");
        assert_eq!(format_float(0.0), "0.0");
    }

    #[test]
    fn pass_through_values_render_as_text() {
        assert_eq!(Cell::Value(json!("Uptrend")).display_text(), "Uptrend");
        assert_eq!(Cell::Value(json!(512)).display_text(), "512");
        assert_eq!(Cell::Value(json!(61.5)).display_text(), "61.5");
        assert_eq!(Cell::Value(json!(null)).display_text(), "None");
        assert_eq!(Cell::Link(ChartLink::new("TCS")).display_text(), "TCS");
    }

    #[test]
    fn sell_tables_show_resistance() {
        let table = CandidateTable::new(Direction::Sell);
        assert_eq!(
            table.columns,
            vec!["Name", "Close", "Resistance", "Strength", "Distance_pct", "RSI", "Trend"]
        );
        assert!(table.is_empty());
    }
}
