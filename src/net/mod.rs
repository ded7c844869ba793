//! Networking modules for the activity update round-trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single POST exchange with the tracker server and
//! `types` defines the wire schema it speaks. There is no client-side cache:
//! every exchange re-renders straight from the server's response.

pub mod api;
pub mod types;
