use std::collections::HashMap;
use std::fmt;

use crate::error::{DecodeError, NotFoundError};
use crate::utils::logging::{log_lookup_miss, log_table_error, log_table_loaded};

/// Timezone to country code, embedded at compile time.
pub const TIMEZONE_TO_CODE: &str = include_str!("../data/tzcode.json");

/// Country code to country name, embedded at compile time.
pub const CODE_TO_COUNTRY: &str = include_str!("../data/codecountry.json");

/// Timezone to country name, embedded at compile time.
pub const TIMEZONE_TO_COUNTRY: &str = include_str!("../data/tzcountry.json");

/// Identifies one of the three lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// IANA timezone to ISO country code
    TimezoneCode,
    /// ISO country code to country name
    CodeCountry,
    /// IANA timezone to country name
    TimezoneCountry,
}

impl Table {
    /// All tables, in generation order.
    pub const ALL: [Table; 3] = [Table::TimezoneCode, Table::CodeCountry, Table::TimezoneCountry];

    /// Short name, also the stem of the data file.
    pub fn name(self) -> &'static str {
        match self {
            Table::TimezoneCode => "tzcode",
            Table::CodeCountry => "codecountry",
            Table::TimezoneCountry => "tzcountry",
        }
    }

    /// File name of the table inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Table::TimezoneCode => "tzcode.json",
            Table::CodeCountry => "codecountry.json",
            Table::TimezoneCountry => "tzcountry.json",
        }
    }

    /// The JSON text compiled into the crate for this table.
    pub fn embedded(self) -> &'static str {
        match self {
            Table::TimezoneCode => TIMEZONE_TO_CODE,
            Table::CodeCountry => CODE_TO_COUNTRY,
            Table::TimezoneCountry => TIMEZONE_TO_COUNTRY,
        }
    }

    /// What the keys of this table are called in messages.
    pub fn key_label(self) -> &'static str {
        match self {
            Table::TimezoneCode | Table::TimezoneCountry => "timezone",
            Table::CodeCountry => "code",
        }
    }

    /// What the values of this table are called in messages.
    pub fn value_label(self) -> &'static str {
        match self {
            Table::TimezoneCode => "country code",
            Table::CodeCountry | Table::TimezoneCountry => "country",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes a JSON object of strings into a map. Duplicate keys keep the last value.
pub fn decode(table: Table, raw: &str) -> Result<HashMap<String, String>, DecodeError> {
    match serde_json::from_str::<HashMap<String, String>>(raw) {
        Ok(entries) => {
            log_table_loaded(table, entries.len());
            Ok(entries)
        }
        Err(e) => {
            log_table_error(table, &e.to_string());
            Err(DecodeError::new(table, e))
        }
    }
}

/// Immutable exact-match table shared by the public map types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StringTable {
    table: Table,
    entries: HashMap<String, String>,
}

impl StringTable {
    pub(crate) fn new(table: Table, entries: HashMap<String, String>) -> Self {
        Self { table, entries }
    }

    pub(crate) fn from_json(table: Table, raw: &str) -> Result<Self, DecodeError> {
        decode(table, raw).map(|entries| Self::new(table, entries))
    }

    pub(crate) fn lookup(&self, key: &str) -> Result<&str, NotFoundError> {
        match self.entries.get(key) {
            Some(value) => Ok(value),
            None => {
                log_lookup_miss(self.table, key);
                Err(NotFoundError::new(self.table, key))
            }
        }
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_simple_object() {
        let entries = decode(Table::TimezoneCode, r#"{"America/New_York": "US"}"#).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["America/New_York"], "US");
    }

    #[test]
    fn test_decode_empty_object() {
        let entries = decode(Table::CodeCountry, "{}").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_decode_duplicate_keys_last_wins() {
        let entries = decode(Table::CodeCountry, r#"{"US": "First", "US": "Second"}"#).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["US"], "Second");
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        let bad_inputs = [
            "",
            "not json",
            r#"{"America/New_York": "US""#,
            r#"["America/New_York", "US"]"#,
            r#"{"America/New_York": 1}"#,
            r#"{"America/New_York": null}"#,
        ];

        for raw in bad_inputs {
            let err = decode(Table::TimezoneCountry, raw).unwrap_err();
            assert_eq!(err.table(), Table::TimezoneCountry, "input: {raw}");
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = StringTable::from_json(Table::CodeCountry, r#"{"US": "United States"}"#).unwrap();
        assert_eq!(table.lookup("US").unwrap(), "United States");
        assert!(table.lookup("us").is_err());
        assert!(table.lookup(" US").is_err());
        assert_eq!(table.lookup("ZZ").unwrap_err().key(), "ZZ");
    }

    #[test]
    fn test_table_names_match_file_names() {
        for table in Table::ALL {
            assert_eq!(table.file_name(), format!("{}.json", table.name()));
            assert!(!table.embedded().is_empty());
        }
    }
}
