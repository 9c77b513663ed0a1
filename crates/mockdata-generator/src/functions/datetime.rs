//! Date value generator.

use crate::error::GeneratorError;
use crate::format::translate_date_format;
use crate::functions::{at_most, date_arg, str_arg};
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use rand::Rng;
use serde_json::Value;
use template_core::{Argument, DateExpr};

/// `date(min?, max?, format?)` — random instant between two bounds.
///
/// Bounds are `new Date(...)` expressions and default to the Unix epoch
/// and the current instant. The optional format string uses moment-style
/// tokens; without one the result is RFC 3339.
pub fn date<R: Rng>(rng: &mut R, args: &[Argument]) -> Result<Value, GeneratorError> {
    at_most("date", args, 3)?;
    let min = date_arg("date", args, 0)?;
    let max = date_arg("date", args, 1)?;
    let format = str_arg("date", args, 2)?;

    let start = match min {
        Some(expr) => resolve_date_expr(expr)?,
        None => DateTime::UNIX_EPOCH,
    };
    let end = match max {
        Some(expr) => resolve_date_expr(expr)?,
        None => Utc::now(),
    };

    let start_ts = start.timestamp();
    let end_ts = end.timestamp();
    let ts = if start_ts >= end_ts {
        start_ts
    } else {
        rng.random_range(start_ts..=end_ts)
    };
    let instant = DateTime::from_timestamp(ts, 0).unwrap_or(start);

    let rendered = match format {
        Some(format) => instant
            .format(&translate_date_format(format))
            .to_string(),
        None => instant.to_rfc3339_opts(SecondsFormat::Secs, true),
    };
    Ok(Value::String(rendered))
}

/// Resolve a `new Date(...)` expression into a concrete instant.
///
/// JS `Date` constructor semantics: no arguments is "now", a single
/// argument is milliseconds since the epoch, and the component form is
/// `(year, month0, day, hour, minute, second)` with the month 0-based.
fn resolve_date_expr(expr: &DateExpr) -> Result<DateTime<Utc>, GeneratorError> {
    let invalid = |parts: &[i64]| {
        GeneratorError::bad_arguments("date", format!("invalid date components {parts:?}"))
    };

    match expr {
        DateExpr::Now => Ok(Utc::now()),
        DateExpr::Components(parts) => match parts.as_slice() {
            [] => Ok(Utc::now()),
            [millis] => DateTime::from_timestamp_millis(*millis).ok_or_else(|| invalid(parts)),
            components if components.len() <= 7 => {
                let year = i32::try_from(components[0]).map_err(|_| invalid(parts))?;
                let month0 = components[1];
                let month = u32::try_from(month0 + 1).map_err(|_| invalid(parts))?;
                let part = |idx: usize, default: i64| -> Result<u32, GeneratorError> {
                    let value = components.get(idx).copied().unwrap_or(default);
                    u32::try_from(value).map_err(|_| invalid(parts))
                };
                let day = part(2, 1)?;
                let hour = part(3, 0)?;
                let minute = part(4, 0)?;
                let second = part(5, 0)?;

                Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
                    .single()
                    .ok_or_else(|| invalid(parts))
            }
            components => Err(GeneratorError::bad_arguments(
                "date",
                format!("too many date components ({})", components.len()),
            )),
        },
    }
}
