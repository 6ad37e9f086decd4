//! Column conversions shared by the repositories.

use crate::{DbError, Result};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use salon_core::ErrorLocation;
use uuid::Uuid;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

#[track_caller]
pub(crate) fn uuid(table: &'static str, value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Decode {
        table,
        message: format!("invalid uuid {value}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn opt_uuid(table: &'static str, value: Option<String>) -> Result<Option<Uuid>> {
    value.map(|v| uuid(table, &v)).transpose()
}

#[track_caller]
pub(crate) fn date(table: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| DbError::Decode {
        table,
        message: format!("invalid date {value}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn opt_date(table: &'static str, value: Option<String>) -> Result<Option<NaiveDate>> {
    value.map(|v| date(table, &v)).transpose()
}

#[track_caller]
pub(crate) fn timestamp(table: &'static str, value: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Decode {
        table,
        message: format!("invalid timestamp {value}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub(crate) fn opt_timestamp(value: Option<i64>) -> Option<DateTime<Utc>> {
    value.and_then(|ts| DateTime::from_timestamp(ts, 0))
}

#[track_caller]
pub(crate) fn unsigned(table: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| DbError::Decode {
        table,
        message: format!("negative or oversized count {value}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
