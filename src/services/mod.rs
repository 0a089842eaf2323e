/// Agreement between the two-step and direct lookup paths
pub mod consistency;
/// Table generation from moment-timezone metadata
pub mod generator;
