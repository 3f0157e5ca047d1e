//! Row access helpers.

use tokio_postgres::Row;
use tokio_postgres::types::FromSql;

use crate::error::{GatewayError, GatewayResult};

/// Extension trait for rows returned by query execution.
pub trait RowExt {
    /// Get a column value by name.
    fn get_value<'a, T>(&'a self, column: &str) -> GatewayResult<T>
    where
        T: FromSql<'a>;

    /// Get a nullable column value by name.
    fn get_opt<'a, T>(&'a self, column: &str) -> GatewayResult<Option<T>>
    where
        T: FromSql<'a>;
}

impl RowExt for Row {
    fn get_value<'a, T>(&'a self, column: &str) -> GatewayResult<T>
    where
        T: FromSql<'a>,
    {
        self.try_get(column).map_err(|e| {
            GatewayError::decode(format!("failed to decode column '{}': {}", column, e))
        })
    }

    fn get_opt<'a, T>(&'a self, column: &str) -> GatewayResult<Option<T>>
    where
        T: FromSql<'a>,
    {
        self.try_get::<_, Option<T>>(column).map_err(|e| {
            GatewayError::decode(format!("failed to decode column '{}': {}", column, e))
        })
    }
}
