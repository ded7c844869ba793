//! # weeklies-client
//!
//! WASM activity-sync layer for the weeklies raid tracker. The server renders
//! each character page with a grid of activity boxes; this crate attaches the
//! click behavior that toggles an activity's completion on the server and
//! reconciles the page against the server's authoritative response. Completing
//! a raid can unlock or lock other raids, so the response may carry records
//! for activities beyond the one clicked.
//!
//! Browser and network code is gated behind the `hydrate` feature; everything
//! else compiles and tests natively.

pub mod boot;
pub mod net;
pub mod state;
pub mod util;
