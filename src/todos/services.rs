use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime,
};

use crate::error::{ApiError, ApiResult};

const DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const DATE_TIME: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const DATE_TIME_FRACTION: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
const DATE_TIME_SHORT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

/// Parses a caller-supplied deadline.
///
/// Accepts RFC 3339 timestamps, naive date-times (taken as UTC) and plain
/// calendar dates (midnight UTC).
pub fn parse_deadline(raw: &str) -> ApiResult<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(dt);
    }
    for format in [DATE_TIME_FRACTION, DATE_TIME, DATE_TIME_SHORT] {
        if let Ok(dt) = PrimitiveDateTime::parse(raw, format) {
            return Ok(dt.assume_utc());
        }
    }
    if let Ok(date) = Date::parse(raw, DATE) {
        return Ok(date.midnight().assume_utc());
    }
    Err(ApiError::Validation(format!("invalid deadline: {raw:?}")))
}

pub fn validate_title(title: &str) -> ApiResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ApiError::Validation("title is required".into()));
    }
    Ok(title.to_string())
}
