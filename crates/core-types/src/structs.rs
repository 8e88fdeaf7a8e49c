use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Field names of a signal record as produced by the screening job.
pub mod fields {
    pub const NAME: &str = "Name";
    pub const CLOSE: &str = "Close";
    pub const SUPPORT: &str = "Support";
    pub const RESISTANCE: &str = "Resistance";
    pub const STRENGTH: &str = "Strength";
    pub const DISTANCE_PCT: &str = "Distance_pct";
    pub const RSI: &str = "RSI";
    pub const TREND: &str = "Trend";
}

/// One stock's precomputed indicator snapshot.
///
/// Records come from an external analysis job as JSON objects, so any field may
/// be missing and numeric fields may arrive as strings. The record is kept as an
/// ordered map and only the fields the dashboard needs are interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signal {
    fields: Map<String, Value>,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly useful when assembling records by hand.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The ticker as display text, if the record carries a `Name`.
    /// An explicit `null` reads as `None`, the way the dashboard always showed it.
    pub fn name(&self) -> Option<String> {
        match self.fields.get(fields::NAME)? {
            Value::Null => Some("None".to_string()),
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Used in error messages and logs where a missing name must not fail.
    pub fn label(&self) -> String {
        self.name().unwrap_or_else(|| "<unnamed>".to_string())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Reads `field` as a float. An absent field counts as `0.0`; a field that is
    /// present but cannot be read as a number is a `Coercion` error.
    pub fn numeric(&self, field: &'static str) -> Result<f64, CoreError> {
        let Some(value) = self.fields.get(field) else {
            return Ok(0.0);
        };

        coerce(value).ok_or_else(|| CoreError::Coercion {
            name: self.label(),
            field,
            value: value.to_string(),
        })
    }

    /// Coerces `field` to a float and stores the result back into the record.
    ///
    /// Non-finite results cannot be represented as JSON numbers; the original
    /// value is left in place for those and only the returned float carries them.
    pub fn normalize_numeric(&mut self, field: &'static str) -> Result<f64, CoreError> {
        let number = self.numeric(field)?;
        if let Some(n) = Number::from_f64(number) {
            self.fields.insert(field.to_string(), Value::Number(n));
        }
        Ok(number)
    }
}

impl From<Map<String, Value>> for Signal {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

fn coerce(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float(s.trim()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parses a float, also accepting `_` as a separator between two digits
/// (`"1_000.5"`). Separators anywhere else make the text invalid.
fn parse_float(text: &str) -> Option<f64> {
    if !text.contains('_') {
        return text.parse().ok();
    }

    let bytes = text.as_bytes();
    let mut cleaned = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if ch == '_' {
            let before = i > 0 && bytes[i - 1].is_ascii_digit();
            let after = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
            if !(before && after) {
                return None;
            }
        } else {
            cleaned.push(ch);
        }
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signal(value: Value) -> Signal {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_numeric_field_defaults_to_zero() {
        let s = signal(json!({ "Name": "TCS" }));
        assert_eq!(s.numeric(fields::STRENGTH), Ok(0.0));
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let s = signal(json!({ "Name": "TCS", "Strength": " 5 ", "Distance_pct": "1.2" }));
        assert_eq!(s.numeric(fields::STRENGTH), Ok(5.0));
        assert_eq!(s.numeric(fields::DISTANCE_PCT), Ok(1.2));
    }

    #[test]
    fn unparseable_string_is_a_coercion_error() {
        let s = signal(json!({ "Name": "TCS", "Strength": "N/A" }));
        let err = s.numeric(fields::STRENGTH).unwrap_err();
        assert_eq!(
            err,
            CoreError::Coercion {
                name: "TCS".to_string(),
                field: "Strength",
                value: "\"N/A\"".to_string(),
            }
        );
    }

    #[test]
    fn explicit_null_is_not_treated_as_missing() {
        let s = signal(json!({ "Name": "TCS", "Distance_pct": null }));
        assert!(matches!(
            s.numeric(fields::DISTANCE_PCT),
            Err(CoreError::Coercion { .. })
        ));
    }

    #[test]
    fn normalize_writes_the_float_back() {
        let mut s = signal(json!({ "Name": "INFY", "Strength": "3" }));
        assert_eq!(s.normalize_numeric(fields::STRENGTH), Ok(3.0));
        assert_eq!(s.get(fields::STRENGTH), Some(&json!(3.0)));
    }

    #[test]
    fn numeric_names_are_rendered_as_text() {
        let s = signal(json!({ "Name": 500325 }));
        assert_eq!(s.name().as_deref(), Some("500325"));
        assert_eq!(Signal::new().label(), "<unnamed>");
    }

    #[test]
    fn null_name_reads_as_none() {
        let s = signal(json!({ "Name": null }));
        assert_eq!(s.name().as_deref(), Some("None"));
        assert!(s.contains(fields::NAME));
    }

    #[test]
    fn digit_separators_are_accepted_between_digits() {
        let s = signal(json!({ "Strength": "1_000", "Distance_pct": " 2_5.0_1 " }));
        assert_eq!(s.numeric(fields::STRENGTH), Ok(1000.0));
        assert_eq!(s.numeric(fields::DISTANCE_PCT), Ok(25.01));

        for bad in ["_1", "1_", "1__0", "1._5", "1_.5"] {
            let s = signal(json!({ "Strength": bad }));
            assert!(
                matches!(s.numeric(fields::STRENGTH), Err(CoreError::Coercion { .. })),
                "{bad} should not parse"
            );
        }
    }
}
