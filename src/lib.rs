//! # tz-country
//!
//! Maps IANA timezone identifiers to ISO 3166-1 country codes and country names.
//!
//! ## Features
//! - Timezone to country code, and country code to country name (two-step path)
//! - Timezone directly to country name
//! - Tables embedded at build time, decoded on construction
//! - Optional process-wide cached instances
//! - Consistency report between the two paths
//! - Regeneration of the tables from moment-timezone metadata

/// Configuration for the table maintenance tool
pub mod config;
/// Decode and lookup errors
pub mod error;
/// Code and country resolvers
pub mod resolver;
/// Background services: consistency checks and table generation
pub mod services;
/// Lazily initialised shared resolvers
pub mod shared;
/// Embedded tables and the decode routine
pub mod tables;
/// Utility functions for text and logging
pub mod utils;

pub use error::{DecodeError, Error, NotFoundError};
pub use resolver::{
    new_code_map, new_country_code_map, new_timezone_country_map, CodeCountryMap, CodeResolver,
    TimezoneCodeMap, TimezoneCountryMap,
};
pub use tables::Table;
