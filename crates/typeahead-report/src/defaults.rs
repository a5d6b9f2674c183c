//! Evaluation of filter default values.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use typeahead_model::{DefaultValue, FilterField};

use crate::error::{ReportError, Result};

/// Text format of datetime filter values.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Resolve the default of `field` relative to `now`.
///
/// Returns `Ok(None)` when the field declares no default.
pub fn resolve_field_default(field: &FilterField, now: NaiveDateTime) -> Result<Option<String>> {
    let Some(default) = &field.default else {
        return Ok(None);
    };
    resolve_default(default, now)
        .map(Some)
        .map_err(|message| ReportError::InvalidDefault {
            field: field.fieldname.clone(),
            message,
        })
}

/// Resolve a default expression relative to `now`.
pub fn resolve_default(
    default: &DefaultValue,
    now: NaiveDateTime,
) -> std::result::Result<String, String> {
    let today = now.date();
    let value = match default {
        DefaultValue::MonthStart { time } => at(month_start(today)?, time)?,
        DefaultValue::MonthEnd { time } => at(month_end(today)?, time)?,
        DefaultValue::DaysAgo { days, time } => {
            let date = today
                .checked_sub_days(Days::new(u64::from(*days)))
                .ok_or_else(|| format!("{days} days before {today} is out of range"))?;
            at(date, time)?
        }
        DefaultValue::Today { time } => at(today, time)?,
        DefaultValue::Now => now.format(DATETIME_FORMAT).to_string(),
        DefaultValue::Literal { value } => value.clone(),
        DefaultValue::Flag { value } => (if *value { "1" } else { "0" }).to_string(),
    };
    Ok(value)
}

fn at(date: NaiveDate, time: &str) -> std::result::Result<String, String> {
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|e| format!("invalid time '{time}': {e}"))?;
    Ok(date.and_time(time).format(DATETIME_FORMAT).to_string())
}

fn month_start(date: NaiveDate) -> std::result::Result<NaiveDate, String> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .ok_or_else(|| format!("no month start for {date}"))
}

fn month_end(date: NaiveDate) -> std::result::Result<NaiveDate, String> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| format!("no month end for {date}"))
}
