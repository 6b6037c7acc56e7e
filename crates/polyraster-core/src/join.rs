use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid polygon join configuration, rejected at assignment time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinConfigError {
    #[error("polygon join table name must be a non-empty string")]
    EmptyTable,

    #[error("polygon join keys column must be a non-empty string")]
    EmptyKeysColumn,
}

/// Identifies the backend table and key column that supply polygon
/// geometry, joined against query results by key.
///
/// Validated on construction so a bad configuration fails at setup, not
/// mid-render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolyJoin {
    table: String,
    keys_column: String,
}

impl Default for PolyJoin {
    fn default() -> Self {
        Self {
            table: "states".to_string(),
            keys_column: "STATE_ABBR".to_string(),
        }
    }
}

impl PolyJoin {
    pub fn new(table: &str, keys_column: &str) -> Result<Self, JoinConfigError> {
        if table.is_empty() {
            return Err(JoinConfigError::EmptyTable);
        }
        if keys_column.is_empty() {
            return Err(JoinConfigError::EmptyKeysColumn);
        }
        Ok(Self {
            table: table.to_string(),
            keys_column: keys_column.to_string(),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn keys_column(&self) -> &str {
        &self.keys_column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_join_accepted() {
        let join = PolyJoin::new("zipcodes", "ZCTA5CE10").unwrap();
        assert_eq!(join.table(), "zipcodes");
        assert_eq!(join.keys_column(), "ZCTA5CE10");
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(PolyJoin::new("", "key"), Err(JoinConfigError::EmptyTable));
    }

    #[test]
    fn test_empty_keys_column_rejected() {
        assert_eq!(
            PolyJoin::new("states", ""),
            Err(JoinConfigError::EmptyKeysColumn)
        );
    }

    #[test]
    fn test_default_join() {
        let join = PolyJoin::default();
        assert_eq!(join.table(), "states");
        assert_eq!(join.keys_column(), "STATE_ABBR");
    }
}
