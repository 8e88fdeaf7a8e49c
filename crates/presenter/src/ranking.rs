use crate::error::PresentError;
use crate::link::ChartLink;
use crate::table::{CandidateRow, CandidateTable, Cell};
use core_types::{fields, Direction, Signal};
use serde_json::Value;
use std::cmp::Ordering;

/// How many candidates a dashboard section shows.
pub const TOP_CANDIDATES: usize = 10;

/// A signal with its ranking keys already coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSignal {
    pub strength: f64,
    pub distance_pct: f64,
    pub signal: Signal,
}

/// Coerces the ranking fields of every signal and sorts strongest first,
/// breaking ties on the smallest distance. The sort is stable.
///
/// Any record whose `Strength` or `Distance_pct` is present but not numeric
/// aborts the whole ranking.
pub fn rank_signals(signals: Vec<Signal>) -> Result<Vec<RankedSignal>, PresentError> {
    let mut ranked = signals
        .into_iter()
        .map(|mut signal| {
            let strength = signal.normalize_numeric(fields::STRENGTH)?;
            let distance_pct = signal.normalize_numeric(fields::DISTANCE_PCT)?;
            Ok::<_, PresentError>(RankedSignal {
                strength,
                distance_pct,
                signal,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by(compare);
    Ok(ranked)
}

/// Projects ranked signals onto the display columns for `direction`.
///
/// A column only has to be carried by one of the signals; signals without it
/// get an empty cell. A column no signal carries is a `MissingField` error.
pub fn project(direction: Direction, ranked: &[RankedSignal]) -> Result<CandidateTable, PresentError> {
    let mut table = CandidateTable::new(direction);

    for field in [
        fields::NAME,
        fields::CLOSE,
        direction.level_field(),
        fields::RSI,
        fields::TREND,
    ] {
        if !ranked.is_empty() && !ranked.iter().any(|r| r.signal.contains(field)) {
            return Err(PresentError::MissingField(field));
        }
    }

    for entry in ranked {
        let signal = &entry.signal;
        let name = signal.name().unwrap_or_else(|| {
            tracing::debug!("Signal without a name among ranked candidates.");
            "nan".to_string()
        });
        let passthrough =
            |field: &str| Cell::Value(signal.get(field).cloned().unwrap_or(Value::Null));

        let cells = vec![
            Cell::Link(ChartLink::new(name.clone())),
            passthrough(fields::CLOSE),
            passthrough(direction.level_field()),
            Cell::Float(entry.strength),
            Cell::Float(entry.distance_pct),
            passthrough(fields::RSI),
            passthrough(fields::TREND),
        ];

        table.rows.push(CandidateRow {
            name,
            strength: entry.strength,
            distance_pct: entry.distance_pct,
            cells,
        });
    }

    Ok(table)
}

/// Ranks `signals` and returns the capped, projected table without rendering it.
pub fn rank(signals: Vec<Signal>, direction: Direction) -> Result<CandidateTable, PresentError> {
    let ranked = rank_signals(signals)?;
    let top = &ranked[..ranked.len().min(TOP_CANDIDATES)];
    project(direction, top)
}

fn compare(a: &RankedSignal, b: &RankedSignal) -> Ordering {
    cmp_f64(b.strength, a.strength).then_with(|| cmp_f64(a.distance_pct, b.distance_pct))
}

// -0.0 and 0.0 compare equal; NaN falls back to the IEEE total order so the
// comparator stays consistent.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}
