// StegoSight - core/mod.rs
//
// Core domain layer: media inference, technique catalog, selection model,
// risk model, size formatting.
// Dependencies: standard library, serde derives.
// Must NOT depend on: ui, platform, app, or any I/O.

pub mod catalog;
pub mod file_info;
pub mod media;
pub mod risk;
pub mod selection;
