//! # Signal Board Presenter
//!
//! This crate turns the buy and sell signals produced by the screening job into
//! the ranked tables shown on the dashboard.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** ranking has no knowledge of how the dashboard is drawn. It
//!   depends only on `core-types`.
//! - **Explicit output:** everything the presenter shows goes through the
//!   `RenderSurface` trait, so a section can be rendered to HTML, to a terminal,
//!   or to a recording surface in tests.
//!
//! ## Public API
//!
//! - `SignalPresenter`: heading, empty notice, debug dumps and the final table.
//! - `rank`: the pure ranking step, returning a `CandidateTable`.
//! - `ChartLink`: the TradingView anchor used in the name column.
//! - `PresentError`: the errors that abort a render.

// Declare the modules that constitute this crate.
pub mod error;
pub mod link;
pub mod presenter;
pub mod ranking;
pub mod surface;
pub mod table;

// Re-export the key components to create a clean, public-facing API.
pub use error::PresentError;
pub use link::ChartLink;
pub use presenter::SignalPresenter;
pub use ranking::{rank, RankedSignal, TOP_CANDIDATES};
pub use surface::RenderSurface;
pub use table::{CandidateRow, CandidateTable, Cell};
