//! Repository layer: entity-scoped database operations.
//!
//! Plain functions over a borrowed `Connection`, one sub-module per
//! table. `SqliteStore` wraps them behind the store traits.

mod alert;
mod donation;
mod health_record;
mod resident;
mod staff;
mod summary;

use chrono::NaiveDateTime;

pub use alert::*;
pub use donation::*;
pub use health_record::*;
pub use resident::*;
pub use staff::*;
pub use summary::*;

/// Storage format for all timestamp columns (UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now()
        .naive_utc()
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

pub(crate) fn parse_timestamp(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap_or_default()
}

/// Parse an enum column, surfacing bad values as a conversion failure
/// on that column.
pub(crate) fn enum_column<T>(idx: usize, value: &str) -> Result<T, rusqlite::Error>
where
    T: std::str::FromStr<Err = super::DatabaseError>,
{
    value.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
