use tracing::{debug, error, info, warn};

use crate::tables::Table;

/// Logs a successful table decode with consistent format
pub fn log_table_loaded(table: Table, entries: usize) {
    debug!("TABLE_LOADED: {} - {} entries", table, entries);
}

/// Logs a table decode failure with consistent format
pub fn log_table_error(table: Table, error: &str) {
    error!("TABLE_ERROR: {} failed to decode: {}", table, error);
}

/// Logs a lookup miss with consistent format
pub fn log_lookup_miss(table: Table, key: &str) {
    debug!("LOOKUP_MISS: {} has no {} '{}'", table, table.key_label(), key);
}

/// Logs a disagreement between the composed and direct lookup paths
pub fn log_divergence(timezone: &str, details: &str) {
    warn!("DIVERGENCE: {} - {}", timezone, details);
}

/// Logs a zone skipped during generation
pub fn log_skipped_zone(zone: &str, reason: &str) {
    warn!("SKIPPED_ZONE: {} - {}", zone, reason);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
