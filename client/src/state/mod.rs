//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `records`, `dashboard`) so pages
//! depend on small focused models whose transitions are testable without a
//! browser.

pub mod dashboard;
pub mod records;
pub mod session;
