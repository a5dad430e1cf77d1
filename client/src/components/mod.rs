//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, form controls, and page chrome from props.
//! Only the route guards read session state from context; everything else
//! receives data and callbacks from the owning page.

pub mod action_card;
pub mod delete_button;
pub mod error_banner;
pub mod field;
pub mod filter_bar;
pub mod page_header;
pub mod recent_sightings;
pub mod report_card;
pub mod route_guard;
pub mod sighting_card;
pub mod stats_card;
