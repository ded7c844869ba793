//! Helpers bridging the document and the update round-trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `activity_actions` owns the toggle orchestration against the registry
//! seam; `activity_dom` is the browser-backed registry it runs against in
//! production.

pub mod activity_actions;
pub mod activity_dom;
