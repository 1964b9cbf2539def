pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS expense_record (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    item_name     TEXT NOT NULL,
    item_price    TEXT NOT NULL,
    purchase_date TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_expense_record_date ON expense_record(purchase_date);
"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[
    // Future migrations go here:
    // (1, "ALTER TABLE expense_record ADD COLUMN note TEXT NOT NULL DEFAULT '';"),
];
