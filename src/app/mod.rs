// StegoSight - app/mod.rs
//
// Application layer: workflow state machines, file routing, session.
// Dependencies: core layer, platform (read-only file access, config).
// Must NOT depend on: ui.

pub mod analyze;
pub mod embed;
pub mod extract;
pub mod session;
pub mod state;
