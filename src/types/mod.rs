mod qualified_table_name;

pub use qualified_table_name::{QualifiedTableName, DEFAULT_QUOTE, SEPARATOR};
