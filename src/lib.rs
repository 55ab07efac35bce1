//! tablepath - Qualified table names for catalog and connector code
//!
//! # Example
//! ```
//! use tablepath::QualifiedTableName;
//!
//! let orders: QualifiedTableName = "sales.public.orders".parse()?;
//! assert_eq!(orders.full_name(), "sales.public.orders");
//! assert_eq!(orders.full_name_quoted(), "`sales`.`public`.`orders`");
//! assert_eq!(orders.full_name_quoted_with("\""), "\"sales\".\"public\".\"orders\"");
//! assert_eq!(orders, QualifiedTableName::with_schema("sales", "public", "orders"));
//! # Ok::<(), tablepath::TablePathError>(())
//! ```

pub mod error;
pub mod traits;
pub mod types;

// Re-export main types for convenient access
pub use error::{Result, TablePathError};
pub use traits::Table;
pub use types::{QualifiedTableName, DEFAULT_QUOTE, SEPARATOR};
