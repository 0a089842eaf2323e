use thiserror::Error;

use crate::tables::Table;

/// An embedded or injected table could not be decoded as a string to string object.
#[derive(Debug, Error)]
#[error("failed to decode {table} table: {source}")]
pub struct DecodeError {
    table: Table,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    pub(crate) fn new(table: Table, source: serde_json::Error) -> Self {
        Self { table, source }
    }

    /// The table that failed to decode.
    pub fn table(&self) -> Table {
        self.table
    }
}

/// The requested key has no entry in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no {} found for {} {}", .table.value_label(), .table.key_label(), .key)]
pub struct NotFoundError {
    table: Table,
    key: String,
}

impl NotFoundError {
    pub(crate) fn new(table: Table, key: &str) -> Self {
        Self {
            table,
            key: key.to_string(),
        }
    }

    /// The table that was searched.
    pub fn table(&self) -> Table {
        self.table
    }

    /// The exact key that was looked up.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Either failure, for callers chaining construction and lookups with `?`.
#[derive(Debug, Error)]
pub enum Error {
    /// A table failed to decode
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// A lookup missed
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = NotFoundError::new(Table::TimezoneCode, "Not/ARealZone");
        assert_eq!(err.to_string(), "no country code found for timezone Not/ARealZone");

        let err = NotFoundError::new(Table::CodeCountry, "ZZ");
        assert_eq!(err.to_string(), "no country found for code ZZ");

        let err = NotFoundError::new(Table::TimezoneCountry, "Mars/Olympus");
        assert_eq!(err.to_string(), "no country found for timezone Mars/Olympus");
    }

    #[test]
    fn test_umbrella_error_is_transparent() {
        let err: Error = NotFoundError::new(Table::CodeCountry, "ZZ").into();
        assert_eq!(err.to_string(), "no country found for code ZZ");
        assert!(matches!(err, Error::NotFound(_)));
    }
}
