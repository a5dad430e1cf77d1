//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the pure rules behind pages and components (route
//! guard decisions, form coercion, option catalogs, display formatting) so
//! they can be tested without a browser.

pub mod auth;
pub mod catalog;
pub mod format;
pub mod forms;
