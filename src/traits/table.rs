use crate::types::QualifiedTableName;

/// Trait representing a database table known at compile time.
/// Implementations are typically generated from catalog definitions.
pub trait Table {
    /// Returns the database the table lives in.
    fn database_name() -> &'static str;

    /// Returns the schema name, if any.
    fn schema() -> Option<&'static str> {
        None
    }

    /// Returns the table name as it appears in the database.
    fn table_name() -> &'static str;

    /// Returns the qualified name (database.table or database.schema.table).
    fn table_path() -> QualifiedTableName {
        QualifiedTableName::from_parts(
            Self::database_name(),
            Self::schema().map(str::to_string),
            Self::table_name(),
        )
    }
}
