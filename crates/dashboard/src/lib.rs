//! Terminal dashboard for a personal expense tracker.
//!
//! Data flows one way: [`refresh::Orchestrator`] fetches through the
//! [`client::Gateway`], [`refresh::RefreshOutcome::apply`] writes a
//! normalized [`state::ViewState`], and [`render::Renderers::fan_out`]
//! projects it into everything the [`ui`] draws.

pub mod app;
pub mod categories;
pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod mutations;
pub mod normalize;
pub mod refresh;
pub mod render;
pub mod state;
pub mod ui;
