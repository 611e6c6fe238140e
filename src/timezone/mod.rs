//! # Timezone Conversion
//!
//! Converts a timestamp between two fixed UTC offsets and reports both
//! local renderings plus the hour offset between the zones. Zones are
//! offset strings ("UTC", "Z", "+05:30", "-0700"); there is no tz
//! database and no DST awareness.

pub mod errors;

pub use errors::{TimezoneError, TimezoneResult};

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

const LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A timestamp rendered in two zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneConversion {
    /// Local time in the origin zone, `YYYY-MM-DD HH:MM:SS`
    pub origin_time: String,

    /// Local time in the target zone, `YYYY-MM-DD HH:MM:SS`
    pub target_time: String,

    /// Hours from origin to target (fractional for half-hour zones)
    pub hour_offset: f64,
}

/// Converts `iso` from the origin zone to the target zone.
///
/// The timestamp may carry its own offset (RFC 3339), in which case
/// that offset wins and the origin zone only affects the origin-local
/// rendering; a naive `YYYY-MM-DDTHH:MM:SS` timestamp is interpreted in
/// the origin zone.
pub fn convert_time_zone(
    origin: &str,
    target: &str,
    iso: &str,
) -> TimezoneResult<ZoneConversion> {
    let origin_offset = parse_offset(origin)?;
    let target_offset = parse_offset(target)?;

    let instant = parse_timestamp(iso, origin_offset)?;

    let origin_local = instant.with_timezone(&origin_offset);
    let target_local = instant.with_timezone(&target_offset);

    let seconds_apart = target_offset.local_minus_utc() - origin_offset.local_minus_utc();

    Ok(ZoneConversion {
        origin_time: origin_local.format(LOCAL_FORMAT).to_string(),
        target_time: target_local.format(LOCAL_FORMAT).to_string(),
        hour_offset: f64::from(seconds_apart) / 3600.0,
    })
}

fn parse_timestamp(iso: &str, origin: FixedOffset) -> TimezoneResult<DateTime<FixedOffset>> {
    if let Ok(stamped) = DateTime::parse_from_rfc3339(iso) {
        return Ok(stamped);
    }

    let naive = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| TimezoneError::InvalidTimestamp(iso.to_string()))?;

    naive
        .and_local_timezone(origin)
        .single()
        .ok_or_else(|| TimezoneError::InvalidTimestamp(iso.to_string()))
}

/// Parses "UTC"/"Z" or a signed offset: +HH, +HHMM, +HH:MM.
fn parse_offset(zone: &str) -> TimezoneResult<FixedOffset> {
    let invalid = || TimezoneError::InvalidOffset(zone.to_string());

    if zone.eq_ignore_ascii_case("utc") || zone.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let mut chars = zone.chars();
    let sign = match chars.next() {
        Some('+') => 1,
        Some('-') => -1,
        _ => return Err(invalid()),
    };

    let digits: String = chars.filter(|c| *c != ':').collect();
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().map_err(|_| invalid())?, 0),
        4 => (
            digits[..2].parse::<i32>().map_err(|_| invalid())?,
            digits[2..].parse::<i32>().map_err(|_| invalid())?,
        ),
        _ => return Err(invalid()),
    };

    if hours > 14 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
