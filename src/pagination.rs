//! Offset-based pagination for query statements.

use serde::{Deserialize, Serialize};

use crate::params::SqlParam;

/// Page-based pagination (1-indexed).
///
/// ```rust
/// use pg_gateway::Page;
///
/// let page = Page::new(25, 3);
/// assert_eq!(page.offset(), 50);
///
/// let first = Page::first(10);
/// assert_eq!(first.offset(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Maximum number of rows per page.
    pub size: i64,
    /// Page number, 1-indexed.
    pub number: i64,
}

impl Page {
    /// Create a page with the given size and number.
    pub fn new(size: i64, number: i64) -> Self {
        Self { size, number }
    }

    /// The first page of the given size.
    pub fn first(size: i64) -> Self {
        Self::new(size, 1)
    }

    /// Number of rows to skip before this page.
    ///
    /// A page number of zero or below yields a negative offset, which is
    /// handed to the driver unchanged.
    pub fn offset(self) -> i64 {
        (self.number - 1) * self.size
    }

    /// Rewrite a statement to append a parameterized LIMIT/OFFSET clause,
    /// pushing the page size and offset onto the parameter sequence.
    ///
    /// Placeholder numbering continues from the existing parameter count so
    /// the appended placeholders never collide with caller-supplied ones.
    pub(crate) fn apply(self, statement: &str, params: &mut Vec<SqlParam>) -> String {
        let base = params.len();
        let rewritten = format!("{statement} LIMIT ${} OFFSET ${}", base + 1, base + 2);
        params.push(SqlParam::Int(self.size));
        params.push(SqlParam::Int(self.offset()));
        rewritten
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            size: 10,
            number: 1,
        }
    }
}
