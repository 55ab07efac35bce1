use std::fmt;
use std::iter;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TablePathError};

/// Separator between the segments of a dotted table name.
pub const SEPARATOR: char = '.';

/// Quote used by [`QualifiedTableName::full_name_quoted`].
pub const DEFAULT_QUOTE: &str = "`";

/// A table identified by database, optional schema and table name.
///
/// Values are immutable once built. A missing schema (`None`) is distinct
/// from an empty schema (`Some("")`) for equality, ordering and hashing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QualifiedTableName {
    database_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    schema_name: Option<String>,
    table_name: String,
}

impl QualifiedTableName {
    /// Builds a `database.table` name with no schema.
    pub fn new(database_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self::from_parts(database_name, None, table_name)
    }

    /// Builds a `database.schema.table` name.
    pub fn with_schema(
        database_name: impl Into<String>,
        schema_name: impl Into<String>,
        table_name: impl Into<String>,
    ) -> Self {
        Self::from_parts(database_name, Some(schema_name.into()), table_name)
    }

    /// Builds a name from its parts. No validation is performed.
    pub fn from_parts(
        database_name: impl Into<String>,
        schema_name: Option<String>,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            database_name: database_name.into(),
            schema_name,
            table_name: table_name.into(),
        }
    }

    /// Parses `database.table` or `database.schema.table`.
    ///
    /// The input is split on every `.`, so empty segments are kept as-is
    /// and any segment count other than two or three is rejected. Segments
    /// that themselves contain a dot cannot be recovered.
    ///
    /// # Example
    /// ```
    /// use tablepath::QualifiedTableName;
    ///
    /// let name = QualifiedTableName::parse("sales.public.orders")?;
    /// assert_eq!(name.database_name(), "sales");
    /// assert_eq!(name.table_display_name(), "public.orders");
    /// # Ok::<(), tablepath::TablePathError>(())
    /// ```
    pub fn parse(full_name: &str) -> Result<Self> {
        let segments: Vec<&str> = full_name.split(SEPARATOR).collect();
        match segments.as_slice() {
            [database, table] => {
                trace!("parsed table name '{}' without schema", full_name);
                Ok(Self::new(*database, *table))
            }
            [database, schema, table] => {
                trace!("parsed table name '{}' with schema", full_name);
                Ok(Self::with_schema(*database, *schema, *table))
            }
            _ => {
                debug!(
                    "rejected table name '{}': {} segments",
                    full_name,
                    segments.len()
                );
                Err(TablePathError::InvalidFormat {
                    input: full_name.to_string(),
                    segments: segments.len(),
                })
            }
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    /// The bare table segment, without any schema.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The table as catalogs display it: `schema.table` when a schema is
    /// present, otherwise just `table`.
    pub fn table_display_name(&self) -> String {
        match &self.schema_name {
            Some(schema) => format!("{}{}{}", schema, SEPARATOR, self.table_name),
            None => self.table_name.clone(),
        }
    }

    /// The two or three segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        iter::once(self.database_name.as_str())
            .chain(self.schema_name.as_deref())
            .chain(iter::once(self.table_name.as_str()))
    }

    /// Returns `database.table` or `database.schema.table`.
    pub fn full_name(&self) -> String {
        self.segments()
            .collect::<Vec<_>>()
            .join(&SEPARATOR.to_string())
    }

    /// Same as [`full_name`](Self::full_name) with each segment wrapped in backticks.
    pub fn full_name_quoted(&self) -> String {
        self.full_name_quoted_with(DEFAULT_QUOTE)
    }

    /// Same as [`full_name`](Self::full_name) with each segment wrapped in `quote`.
    /// Quotes inside segments are not escaped.
    pub fn full_name_quoted_with(&self, quote: &str) -> String {
        self.segments()
            .map(|segment| format!("{quote}{segment}{quote}"))
            .collect::<Vec<_>>()
            .join(&SEPARATOR.to_string())
    }
}

impl fmt::Display for QualifiedTableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl FromStr for QualifiedTableName {
    type Err = TablePathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for QualifiedTableName {
    type Error = TablePathError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for QualifiedTableName {
    type Error = TablePathError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}
