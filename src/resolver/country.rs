use std::collections::HashMap;

use crate::error::{DecodeError, NotFoundError};
use crate::tables::{StringTable, Table, TIMEZONE_TO_COUNTRY};

/// Map of timezone directly to country name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneCountryMap(StringTable);

impl TimezoneCountryMap {
    /// Decodes the embedded timezone to country table.
    pub fn new() -> Result<Self, DecodeError> {
        Self::from_json(TIMEZONE_TO_COUNTRY)
    }

    /// Decodes a caller-supplied timezone to country table.
    pub fn from_json(raw: &str) -> Result<Self, DecodeError> {
        StringTable::from_json(Table::TimezoneCountry, raw).map(Self)
    }

    /// Returns the country name for a given timezone
    pub fn get_country(&self, tz: &str) -> Result<&str, NotFoundError> {
        self.0.lookup(tz)
    }

    /// Whether `tz` has an entry.
    pub fn contains(&self, tz: &str) -> bool {
        self.0.contains(tz)
    }

    /// Number of timezones.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.len() == 0
    }

    /// Timezone and country pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter()
    }
}

impl From<HashMap<String, String>> for TimezoneCountryMap {
    fn from(entries: HashMap<String, String>) -> Self {
        Self(StringTable::new(Table::TimezoneCountry, entries))
    }
}

/// Creates a new [`TimezoneCountryMap`] from the embedded data.
pub fn new_timezone_country_map() -> Result<TimezoneCountryMap, DecodeError> {
    TimezoneCountryMap::new()
}
