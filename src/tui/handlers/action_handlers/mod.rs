//! Action handlers organized by category

/// Message hand-off handlers (quote request, share, copy)
pub mod messages;

/// Panel focus and cursor handlers
pub mod navigation;

/// Popup and overlay management handlers
pub mod popups;

/// Session edits: activate, favorites, preview flag
pub mod session;
