use tablepath::{QualifiedTableName, Table};

// Test tables
struct Orders;
struct Events;

impl Table for Orders {
    fn database_name() -> &'static str {
        "sales"
    }
    fn table_name() -> &'static str {
        "orders"
    }
}

impl Table for Events {
    fn database_name() -> &'static str {
        "analytics"
    }
    fn schema() -> Option<&'static str> {
        Some("raw")
    }
    fn table_name() -> &'static str {
        "events"
    }
}

#[test]
fn test_table_path_without_schema() {
    let path = Orders::table_path();

    assert_eq!(path, QualifiedTableName::new("sales", "orders"));
    assert_eq!(path.full_name_quoted(), "`sales`.`orders`");
}

#[test]
fn test_table_path_with_schema() {
    let path = Events::table_path();

    assert_eq!(path, QualifiedTableName::with_schema("analytics", "raw", "events"));
    assert_eq!(path.table_display_name(), "raw.events");
    assert_eq!(path.to_string(), "analytics.raw.events");
}
