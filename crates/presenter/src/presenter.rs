use crate::error::PresentError;
use crate::ranking::{self, RankedSignal, TOP_CANDIDATES};
use crate::surface::RenderSurface;
use core_types::{Direction, Signal};

/// Turns raw screener signals into a ranked dashboard section.
#[derive(Debug, Clone, Default)]
pub struct SignalPresenter {
    show_debug_data: bool,
}

impl SignalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also dump the first records before and after sorting as JSON text.
    pub fn with_debug_data(mut self, enabled: bool) -> Self {
        self.show_debug_data = enabled;
        self
    }

    /// Ranks `signals` for `direction` and renders the section onto `surface`.
    ///
    /// The signals are consumed: their `Strength` and `Distance_pct` fields are
    /// normalised to numbers as part of ranking. On error the heading (and any
    /// debug text) has already been emitted but no table is.
    pub fn present<S>(
        &self,
        signals: Vec<Signal>,
        direction: Direction,
        surface: &mut S,
    ) -> Result<(), PresentError>
    where
        S: RenderSurface + ?Sized,
    {
        surface.heading(direction.heading());

        if signals.is_empty() {
            tracing::warn!(direction = direction.label(), "No candidates to rank.");
            surface.warning(direction.empty_notice());
            return Ok(());
        }

        let total = signals.len();
        if self.show_debug_data {
            surface.text(&format!("Raw {} Candidates Data:", direction.label()));
            surface.text(&dump(&signals[..total.min(TOP_CANDIDATES)])?);
        }

        let ranked = ranking::rank_signals(signals)?;
        let top = &ranked[..total.min(TOP_CANDIDATES)];

        if self.show_debug_data {
            surface.text("Sorted Data:");
            surface.text(&dump_ranked(top)?);
        }

        let table = ranking::project(direction, top)?;
        tracing::info!(
            direction = direction.label(),
            total,
            shown = table.len(),
            "Ranked candidates."
        );
        tracing::debug!("Top candidates: {:?}", table.names());

        surface.table(&table);
        Ok(())
    }
}

fn dump(signals: &[Signal]) -> Result<String, PresentError> {
    Ok(serde_json::to_string_pretty(signals)?)
}

fn dump_ranked(ranked: &[RankedSignal]) -> Result<String, PresentError> {
    let signals: Vec<&Signal> = ranked.iter().map(|r| &r.signal).collect();
    Ok(serde_json::to_string_pretty(&signals)?)
}
