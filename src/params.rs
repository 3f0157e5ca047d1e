//! Bound parameter values.
//!
//! Parameter types are driver-determined, so the gateway carries them as a
//! variant value type and converts to `ToSql` trait objects at the driver
//! boundary.

use tokio_postgres::types::ToSql;

/// A bound parameter value for a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// SQL NULL.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer value.
    Int(i64),
    /// 64-bit float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// JSON value (bound as JSONB).
    Json(serde_json::Value),
    /// UUID value.
    Uuid(uuid::Uuid),
    /// Timestamp with time zone.
    Timestamp(chrono::DateTime<chrono::Utc>),
}

impl SqlParam {
    /// Convert to a type that can be bound as a PostgreSQL parameter.
    pub(crate) fn to_sql(&self) -> Box<dyn ToSql + Sync + Send> {
        match self {
            Self::Null => Box::new(Option::<String>::None),
            Self::Bool(b) => Box::new(*b),
            Self::Int(i) => Box::new(*i),
            Self::Float(f) => Box::new(*f),
            Self::Text(s) => Box::new(s.clone()),
            Self::Json(j) => Box::new(j.clone()),
            Self::Uuid(u) => Box::new(*u),
            Self::Timestamp(t) => Box::new(*t),
        }
    }
}

/// Convert a parameter sequence to boxed PostgreSQL parameters.
pub(crate) fn to_sql_params(values: &[SqlParam]) -> Vec<Box<dyn ToSql + Sync + Send>> {
    values.iter().map(SqlParam::to_sql).collect()
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<serde_json::Value> for SqlParam {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<uuid::Uuid> for SqlParam {
    fn from(value: uuid::Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for SqlParam {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl<T> From<Option<T>> for SqlParam
where
    T: Into<SqlParam>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(SqlParam::from(42i64), SqlParam::Int(42));
        assert_eq!(SqlParam::from(7i32), SqlParam::Int(7));
        assert_eq!(SqlParam::from("active"), SqlParam::Text("active".into()));
        assert_eq!(SqlParam::from(true), SqlParam::Bool(true));
        assert_eq!(SqlParam::from(None::<i64>), SqlParam::Null);
        assert_eq!(SqlParam::from(Some(1i64)), SqlParam::Int(1));
    }

    #[test]
    fn test_to_sql_params_length() {
        let params = vec![SqlParam::Int(1), SqlParam::Text("x".into()), SqlParam::Null];
        assert_eq!(to_sql_params(&params).len(), 3);
    }
}
