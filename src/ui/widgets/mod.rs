// StegoSight - ui/widgets/mod.rs
//
// Reusable widgets shared by the workflow panels.

pub mod drop_zone;
pub mod method_card;
pub mod preview;
pub mod risk_card;
