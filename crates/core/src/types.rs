/// All database primary keys are SQLite INTEGER (rowid) columns.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The calendar day a record belongs to. A plain value, not an entity.
pub type LogDate = chrono::NaiveDate;
