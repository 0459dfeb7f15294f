use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::validation::ValidationError;

/// Timestamp attribute value.
///
/// Offsets are preserved exactly as supplied, never normalized to UTC.
/// Date-only input expands to midnight without offset information.
/// Canonical text is ISO-8601 with the fractional second rendered at
/// microsecond precision only when it is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Instant with a UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// Wall-clock time without offset information.
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Current instant from the system clock.
    ///
    /// Truncated to microsecond precision: canonical text carries at
    /// most six fractional digits, and the value must round-trip
    /// through it losslessly.
    pub fn now() -> Self {
        let now = Utc::now().fixed_offset();
        let truncated = now
            .with_nanosecond(now.nanosecond() / 1_000 * 1_000)
            .unwrap_or(now);
        Timestamp::Zoned(truncated)
    }

    /// Parses an ISO-8601 date or datetime, with or without an offset.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if let Ok(zoned) = DateTime::parse_from_rfc3339(value) {
            return Ok(Timestamp::Zoned(zoned));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Timestamp::Naive(naive));
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Ok(Timestamp::Naive(date.and_time(NaiveTime::MIN)));
        }
        Err(ValidationError::InvalidTimestamp {
            value: value.to_string(),
        })
    }

    /// Canonical ISO-8601 text form.
    pub fn to_canonical(&self) -> String {
        match self {
            Timestamp::Zoned(dt) => {
                if dt.nanosecond() == 0 {
                    dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
                } else {
                    dt.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
                }
            }
            Timestamp::Naive(dt) => {
                if dt.nanosecond() == 0 {
                    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
                } else {
                    dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
                }
            }
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_preserved_as_given() {
        let ts = Timestamp::parse("2020-07-16T12:03:20.519216+04:00").unwrap();
        assert_eq!(ts.to_canonical(), "2020-07-16T12:03:20.519216+04:00");
    }

    #[test]
    fn utc_offset_renders_as_zero_offset() {
        let ts = Timestamp::parse("2020-07-16T12:03:20.519216Z").unwrap();
        assert_eq!(ts.to_canonical(), "2020-07-16T12:03:20.519216+00:00");
    }

    #[test]
    fn naive_datetime_omits_zero_fraction() {
        let ts = Timestamp::parse("2020-07-16T12:03:20").unwrap();
        assert_eq!(ts.to_canonical(), "2020-07-16T12:03:20");
    }

    #[test]
    fn date_only_expands_to_midnight() {
        let ts = Timestamp::parse("2020-07-16").unwrap();
        assert_eq!(ts.to_canonical(), "2020-07-16T00:00:00");
    }

    #[test]
    fn rejects_text_that_is_not_a_timestamp() {
        assert!(Timestamp::parse("not-a-time").is_err());
        assert!(Timestamp::parse("2020-13-40").is_err());
        assert!(Timestamp::parse("12:03:20").is_err());
    }

    #[test]
    fn canonical_text_round_trips() {
        for value in [
            "2022-07-16T12:03:20.519216+04:00",
            "2020-07-16T12:03:20+00:00",
            "2020-07-16T12:03:20",
            "2020-07-16T00:00:00",
        ] {
            let ts = Timestamp::parse(value).unwrap();
            assert_eq!(Timestamp::parse(&ts.to_canonical()).unwrap(), ts);
        }
    }

    #[test]
    fn now_is_microsecond_precise() {
        let Timestamp::Zoned(dt) = Timestamp::now() else {
            panic!("now() must carry an offset");
        };
        assert_eq!(dt.nanosecond() % 1_000, 0);
    }
}
