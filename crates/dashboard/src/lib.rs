//! # Signal Board Dashboard
//!
//! Concrete rendering surfaces for the presenter.
//!
//! - `HtmlDashboard` builds a standalone HTML page. Chart links are written as
//!   markup, every other value is escaped.
//! - `ConsoleDashboard` prints the same sections as terminal tables.

pub mod console;
pub mod html;

pub use console::ConsoleDashboard;
pub use html::HtmlDashboard;
