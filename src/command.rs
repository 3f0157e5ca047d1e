//! Statement classification by leading keyword.

use crate::error::{GatewayError, GatewayResult};

/// The three command classes the gateway distinguishes.
///
/// Each execution method on the gateway accepts exactly one class; the class
/// carries its own keyword allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementClass {
    /// Statements altering database structure.
    SchemaChange,
    /// Read-only statements.
    Query,
    /// Statements changing row data.
    Mutation,
}

impl StatementClass {
    /// The keyword allow-list for this class.
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::SchemaChange => &["CREATE", "ALTER", "DROP", "TRUNCATE"],
            Self::Query => &["SELECT"],
            Self::Mutation => &["INSERT", "UPDATE", "DELETE"],
        }
    }

    /// The allow-list rendered for error messages.
    pub const fn allowed_list(self) -> &'static str {
        match self {
            Self::SchemaChange => "CREATE, ALTER, DROP, TRUNCATE",
            Self::Query => "SELECT",
            Self::Mutation => "INSERT, UPDATE, DELETE",
        }
    }

    /// Human-readable class label used in log messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SchemaChange => "schema change",
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }

    /// Validate that the statement's leading keyword is allowed for this class.
    ///
    /// Purely local and synchronous; runs before any connection is acquired.
    /// An empty or whitespace-only statement yields an empty token, which
    /// never matches an allow-list.
    pub fn classify(self, statement: &str) -> GatewayResult<()> {
        let command = leading_keyword(statement);
        if self.keywords().contains(&command.as_str()) {
            Ok(())
        } else {
            Err(GatewayError::InvalidCommand {
                command,
                allowed: self.allowed_list(),
            })
        }
    }
}

/// Extract the first whitespace-delimited token of the trimmed statement,
/// upper-cased.
pub fn leading_keyword(statement: &str) -> String {
    statement
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_keyword() {
        assert_eq!(leading_keyword("select * from users"), "SELECT");
        assert_eq!(leading_keyword("  \n\tDrop TABLE users"), "DROP");
        assert_eq!(leading_keyword(""), "");
        assert_eq!(leading_keyword("   \t  "), "");
    }

    #[test]
    fn test_schema_change_allow_list() {
        let class = StatementClass::SchemaChange;
        assert!(class.classify("CREATE TABLE t (id INT)").is_ok());
        assert!(class.classify("alter table t add column x int").is_ok());
        assert!(class.classify("DROP TABLE t").is_ok());
        assert!(class.classify("TRUNCATE t").is_ok());
        assert!(class.classify("SELECT * FROM t").is_err());
        assert!(class.classify("INSERT INTO t VALUES (1)").is_err());
    }

    #[test]
    fn test_query_allow_list() {
        let class = StatementClass::Query;
        assert!(class.classify("SELECT 1").is_ok());
        assert!(class.classify("select * from t where id = $1").is_ok());
        assert!(class.classify("INSERT INTO t VALUES (1)").is_err());
        assert!(class.classify("DROP TABLE t").is_err());
    }

    #[test]
    fn test_mutation_allow_list() {
        let class = StatementClass::Mutation;
        assert!(class.classify("INSERT INTO t VALUES (1)").is_ok());
        assert!(class.classify("update t set x = 1").is_ok());
        assert!(class.classify("DELETE FROM t").is_ok());
        assert!(class.classify("SELECT * FROM t").is_err());
    }

    #[test]
    fn test_empty_statement_always_fails() {
        for class in [
            StatementClass::SchemaChange,
            StatementClass::Query,
            StatementClass::Mutation,
        ] {
            let err = class.classify("   ").unwrap_err();
            assert!(err.is_invalid_command());
        }
    }

    #[test]
    fn test_error_names_offending_token_and_allowed_set() {
        let err = StatementClass::Query
            .classify("insert into t values (1)")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("INSERT"));
        assert!(message.contains("SELECT"));
    }
}
