/// Timezone to code, code to country, and the two-step resolver
pub mod code;
/// Timezone directly to country
pub mod country;

pub use code::*;
pub use country::*;
