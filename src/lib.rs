//! Tapiz Designer Library
//!
//! Core functionality for the tapestry configurator: palette and design
//! catalogs, the session store, preview rendering, quotes and the share and
//! quote-request messages, plus the terminal and command-line front ends.

// Module declarations
pub mod branding;
pub mod cli;
pub mod config;
pub mod logging;
pub mod message;
pub mod models;
pub mod preview;
pub mod session;
pub mod shortcuts;
pub mod tui;
