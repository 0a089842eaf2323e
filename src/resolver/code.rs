use std::collections::HashMap;

use crate::error::{DecodeError, NotFoundError};
use crate::tables::{StringTable, Table, CODE_TO_COUNTRY, TIMEZONE_TO_CODE};

/// Map of timezone to country code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneCodeMap(StringTable);

impl TimezoneCodeMap {
    /// Decodes the embedded timezone to code table.
    pub fn new() -> Result<Self, DecodeError> {
        Self::from_json(TIMEZONE_TO_CODE)
    }

    /// Decodes a caller-supplied timezone to code table.
    pub fn from_json(raw: &str) -> Result<Self, DecodeError> {
        StringTable::from_json(Table::TimezoneCode, raw).map(Self)
    }

    /// Returns the country code for a given timezone
    pub fn get_code(&self, tz: &str) -> Result<&str, NotFoundError> {
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

    /// Timezone and code pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter()
    }
}

impl From<HashMap<String, String>> for TimezoneCodeMap {
    fn from(entries: HashMap<String, String>) -> Self {
        Self(StringTable::new(Table::TimezoneCode, entries))
    }
}

/// Map of country code to country name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeCountryMap(StringTable);

impl CodeCountryMap {
    /// Decodes the embedded code to country table.
    pub fn new() -> Result<Self, DecodeError> {
        Self::from_json(CODE_TO_COUNTRY)
    }

    /// Decodes a caller-supplied code to country table.
    pub fn from_json(raw: &str) -> Result<Self, DecodeError> {
        StringTable::from_json(Table::CodeCountry, raw).map(Self)
    }

    /// Returns the country name for a given country code
    pub fn get_country(&self, code: &str) -> Result<&str, NotFoundError> {
        self.0.lookup(code)
    }

    /// Whether `code` has an entry.
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    /// Number of country codes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.len() == 0
    }

    /// Code and country pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter()
    }
}

impl From<HashMap<String, String>> for CodeCountryMap {
    fn from(entries: HashMap<String, String>) -> Self {
        Self(StringTable::new(Table::CodeCountry, entries))
    }
}

/// Creates a new [`TimezoneCodeMap`] from the embedded data.
pub fn new_code_map() -> Result<TimezoneCodeMap, DecodeError> {
    TimezoneCodeMap::new()
}

/// Creates a new [`CodeCountryMap`] from the embedded data.
pub fn new_country_code_map() -> Result<CodeCountryMap, DecodeError> {
    CodeCountryMap::new()
}

/// Both code tables, for resolving a timezone to a country in two steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeResolver {
    codes: TimezoneCodeMap,
    countries: CodeCountryMap,
}

impl CodeResolver {
    /// Decodes both embedded code tables.
    pub fn new() -> Result<Self, DecodeError> {
        Ok(Self::from_parts(TimezoneCodeMap::new()?, CodeCountryMap::new()?))
    }

    /// Builds a resolver from already decoded tables.
    pub fn from_parts(codes: TimezoneCodeMap, countries: CodeCountryMap) -> Self {
        Self { codes, countries }
    }

    /// Country code for `tz`.
    pub fn code(&self, tz: &str) -> Result<&str, NotFoundError> {
        self.codes.get_code(tz)
    }

    /// Country name for `code`.
    pub fn country(&self, code: &str) -> Result<&str, NotFoundError> {
        self.countries.get_country(code)
    }

    /// Country name for `tz` via its country code.
    ///
    /// A miss in the first step reports the timezone; a code with no
    /// country name reports the code.
    pub fn country_for_timezone(&self, tz: &str) -> Result<&str, NotFoundError> {
        let code = self.codes.get_code(tz)?;
        self.countries.get_country(code)
    }

    /// The timezone to code table.
    pub fn codes(&self) -> &TimezoneCodeMap {
        &self.codes
    }

    /// The code to country table.
    pub fn countries(&self) -> &CodeCountryMap {
        &self.countries
    }
}
