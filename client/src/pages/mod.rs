//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, submit,
//! delete) and delegates rendering details to `components`.

pub mod action_form;
pub mod actions;
pub mod dashboard;
pub mod login;
pub(crate) mod record_list;
pub mod report_form;
pub mod reports;
pub mod sighting_form;
pub mod sightings;
pub mod signup;
