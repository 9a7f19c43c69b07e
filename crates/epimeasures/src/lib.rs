//! Terminal and browser explainer for epidemiological measures
//!
//! Each tab pairs short notes with an interactive widget built on
//! `epimeasures_core`:
//! - Rate versus risk and incidence density over person-time
//! - Prevalence as incidence times duration
//! - Case fatality, mortality and proportional mortality
//! - Fertility and perinatal rates
//! - Years of potential life lost and a small life table
//! - A self-check quiz and a glossary

#![warn(clippy::all)]

// ============================================================================
// Shell modules
// ============================================================================

pub mod actions;
pub mod app;
pub mod components;
pub mod event;
pub mod keybindings;
pub mod modals;
pub mod screens;
pub mod state;

// ============================================================================
// Data and content modules
// ============================================================================

pub mod content;
pub mod data;
pub mod util;

// ============================================================================
// Platform modules
// ============================================================================

pub mod logging;

#[cfg(feature = "web")]
pub mod web;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
#[cfg(feature = "native")]
pub use logging::init_logging;
#[cfg(feature = "web")]
pub use logging::init_logging_web;
