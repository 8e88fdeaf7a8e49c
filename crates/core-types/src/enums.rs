use crate::structs::fields;
use serde::{Deserialize, Serialize};

/// Which side of the screener a list of signals belongs to.
///
/// The direction decides which price level is shown next to the close and how
/// the section is labelled on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    /// The level column displayed for this direction.
    pub fn level_field(&self) -> &'static str {
        match self {
            Direction::Buy => fields::SUPPORT,
            Direction::Sell => fields::RESISTANCE,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Direction::Buy => "🚀 Top 10 Buy Candidates (Sorted by Strength)",
            Direction::Sell => "🔻 Top 10 Sell Candidates (Sorted by Strength)",
        }
    }

    /// The notice shown when there is nothing to rank.
    pub fn empty_notice(&self) -> &'static str {
        match self {
            Direction::Buy => "No buy candidates found.",
            Direction::Sell => "No sell candidates found.",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Buy => "Buy",
            Direction::Sell => "Sell",
        }
    }
}
