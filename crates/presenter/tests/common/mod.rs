// Not a test target of its own; included by the other integration tests.
#![allow(dead_code)]

use core_types::Signal;
use presenter::{CandidateTable, RenderSurface};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Heading(String),
    Warning(String),
    Text(String),
    Table(CandidateTable),
}

/// Records every call so tests can assert on the full output sequence.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn tables(&self) -> Vec<&CandidateTable> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn heading(&mut self, text: &str) {
        self.calls.push(Call::Heading(text.to_string()));
    }

    fn warning(&mut self, text: &str) {
        self.calls.push(Call::Warning(text.to_string()));
    }

    fn text(&mut self, text: &str) {
        self.calls.push(Call::Text(text.to_string()));
    }

    fn table(&mut self, table: &CandidateTable) {
        self.calls.push(Call::Table(table.clone()));
    }
}

pub fn signal(name: &str, strength: impl Into<Value>, distance: impl Into<Value>) -> Signal {
    Signal::new()
        .with("Name", name)
        .with("Close", 250.5)
        .with("Support", 240.0)
        .with("Resistance", 265.0)
        .with("Strength", strength)
        .with("Distance_pct", distance)
        .with("RSI", 52.3)
        .with("Trend", "Uptrend")
}
