/// Structured log helpers
pub mod logging;
/// Text helpers for country names
pub mod text;
