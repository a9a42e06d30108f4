// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const DATE_INPUT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATE_TIME_INPUT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const DATE_MINUTE_INPUT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

const DATE_OUTPUT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");
const DATE_TIME_OUTPUT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year] [hour]:[minute]");

/// Formats a wire timestamp for display.
///
/// - Absent values render as `N/A`.
/// - Dates (`2026-01-15`) render as `Jan 15, 2026`.
/// - Date-times, with or without fractional seconds or an offset, render as
///   `Jan 15, 2026 10:30`.
/// - Anything else is returned unchanged.
///
/// The result is plain text; callers escape it.
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return String::from("N/A");
    };
    parse_and_format(raw).unwrap_or_else(|| raw.to_string())
}

fn parse_and_format(raw: &str) -> Option<String> {
    if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc3339) {
        return moment.format(DATE_TIME_OUTPUT).ok();
    }

    let without_fraction: &str = raw.split_once('.').map_or(raw, |(head, _)| head);
    if let Ok(moment) = PrimitiveDateTime::parse(without_fraction, DATE_TIME_INPUT)
        .or_else(|_| PrimitiveDateTime::parse(without_fraction, DATE_MINUTE_INPUT))
    {
        return moment.format(DATE_TIME_OUTPUT).ok();
    }

    Date::parse(raw, DATE_INPUT)
        .ok()
        .and_then(|date| date.format(DATE_OUTPUT).ok())
}
