//! Time utilities: parsing HH:MM, hour rounding, and the serde format used
//! for stored timestamps.

use chrono::{NaiveDateTime, NaiveTime};

/// Format of timestamps in the shift storage units.
pub const STAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";
/// Format of the manual-entry time prompts.
pub const TIME_FMT: &str = "%H:%M";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, TIME_FMT).ok()
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Round fractional hours to 2 decimals (half away from zero).
/// Shared by the clock-out and manual-entry paths so both produce the
/// same figure for the same interval.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Elapsed fractional hours between two timestamps, rounded.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let secs = (end - start).num_seconds() as f64;
    round_hours(secs / 3600.0)
}

/// Serde adapter for `NaiveDateTime` stored as "YYYY-MM-DD HH:MM:SS".
pub mod stamp {
    use super::STAMP_FMT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(STAMP_FMT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, STAMP_FMT).map_err(de::Error::custom)
    }
}

/// Serde adapter for `Option<NaiveDateTime>` in the same stored format,
/// with `null` for a still-open shift.
pub mod stamp_opt {
    use super::STAMP_FMT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(dt: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_str(&dt.format(STAMP_FMT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(s) => NaiveDateTime::parse_from_str(&s, STAMP_FMT)
                .map(Some)
                .map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}
