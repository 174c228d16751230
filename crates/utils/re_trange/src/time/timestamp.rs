use super::Duration;
use crate::TimeRangeError;

/// A naive wall-clock instant with microsecond resolution.
///
/// A [`Timestamp`] carries no time zone: it is whatever the local clock (or the caller) says it is.
/// Anything below a whole microsecond is truncated on construction, so equality, ordering and
/// hashing all operate at microsecond precision.
///
/// Can represent any instant between the years -9999 and 9999 CE.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(jiff::civil::DateTime);

impl Timestamp {
    /// The earliest representable instant.
    pub const MIN: Self = Self(jiff::civil::DateTime::MIN);

    /// The latest representable instant.
    pub const MAX: Self = Self(jiff::civil::DateTime::constant(
        9999,
        12,
        31,
        23,
        59,
        59,
        999_999_000,
    ));

    /// The current local wall-clock time.
    #[inline]
    pub fn now() -> Self {
        Self::from_civil(jiff::Zoned::now().datetime())
    }

    pub fn new(
        year: i16,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
    ) -> Result<Self, jiff::Error> {
        jiff::civil::DateTime::new(year, month, day, hour, minute, second, 0).map(Self)
    }

    /// Truncates `datetime` to whole microseconds.
    pub fn from_civil(datetime: jiff::civil::DateTime) -> Self {
        let sub_micros = datetime.subsec_nanosecond() % 1_000;
        if sub_micros == 0 {
            return Self(datetime);
        }

        // Moving back to the previous whole microsecond always stays in range.
        let truncated = datetime
            .checked_sub(jiff::SignedDuration::from_nanos(i64::from(sub_micros)))
            .unwrap_or(datetime);
        Self(truncated)
    }

    #[inline]
    pub fn to_civil(self) -> jiff::civil::DateTime {
        self.0
    }

    /// Returns `None` if the result falls outside of [`Self::MIN`]..=[`Self::MAX`].
    #[inline]
    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        self.0
            .checked_add(jiff::SignedDuration::from(duration))
            .ok()
            .map(Self)
    }

    /// Returns `None` if the result falls outside of [`Self::MIN`]..=[`Self::MAX`].
    #[inline]
    pub fn checked_sub(self, duration: Duration) -> Option<Self> {
        self.0
            .checked_sub(jiff::SignedDuration::from(duration))
            .ok()
            .map(Self)
    }

    /// `self - earlier`, negative if `earlier` is actually later.
    #[inline]
    pub fn duration_since(self, earlier: Self) -> Duration {
        Duration::from(self.0.duration_since(earlier.0))
    }

    /// Parses `text` as a timestamp, reporting a failure as a type error on `param`.
    pub fn parse_arg(param: &'static str, text: &str) -> Result<Self, TimeRangeError> {
        text.parse()
            .map_err(|_err| TimeRangeError::invalid_type(param, "Timestamp", text))
    }

    /// Formats the time as specified by ISO 8601, e.g. `2019-01-01T12:00:00`.
    pub fn format_iso(self) -> String {
        self.0.to_string()
    }
}

// ------------------------------------------
// `jiff` converters

impl From<jiff::civil::DateTime> for Timestamp {
    #[inline]
    fn from(datetime: jiff::civil::DateTime) -> Self {
        Self::from_civil(datetime)
    }
}

impl From<Timestamp> for jiff::civil::DateTime {
    #[inline]
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}

// ------------------------------------------
// Formatting and parsing

impl std::str::FromStr for Timestamp {
    type Err = jiff::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let datetime = s.trim().parse::<jiff::civil::DateTime>()?;
        Ok(Self::from_civil(datetime))
    }
}

impl std::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

/// `2019-01-01 12:00:00`, with a six digit fraction only if there are sub-second microseconds.
impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let datetime = self.0;
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            datetime.date(),
            datetime.hour(),
            datetime.minute(),
            datetime.second()
        )?;

        let micros = datetime.subsec_nanosecond() / 1_000;
        if micros != 0 {
            write!(f, ".{micros:06}")?;
        }
        Ok(())
    }
}

// ------------------------------------------
// Duration ops

impl std::ops::Sub for Timestamp {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Duration {
        self.duration_since(rhs)
    }
}

impl std::ops::Add<Duration> for Timestamp {
    type Output = Self;

    /// Saturates at [`Self::MIN`] / [`Self::MAX`].
    #[inline]
    fn add(self, duration: Duration) -> Self::Output {
        self.checked_add(duration).unwrap_or(if duration.is_negative() {
            Self::MIN
        } else {
            Self::MAX
        })
    }
}

impl std::ops::AddAssign<Duration> for Timestamp {
    #[inline]
    fn add_assign(&mut self, duration: Duration) {
        *self = *self + duration;
    }
}

impl std::ops::Sub<Duration> for Timestamp {
    type Output = Self;

    /// Saturates at [`Self::MIN`] / [`Self::MAX`].
    #[inline]
    fn sub(self, duration: Duration) -> Self::Output {
        self.checked_sub(duration).unwrap_or(if duration.is_negative() {
            Self::MAX
        } else {
            Self::MIN
        })
    }
}

// ---------------------------------------------

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    fn noon_new_years_2019() -> Timestamp {
        Timestamp::new(2019, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_formatting_whole_second() {
        let timestamp = noon_new_years_2019();
        assert_eq!(timestamp.to_string(), "2019-01-01 12:00:00");
        assert_eq!(timestamp.format_iso(), "2019-01-01T12:00:00");
        assert_eq!(format!("{timestamp:?}"), "2019-01-01T12:00:00");
    }

    #[test]
    fn test_formatting_subsecond() {
        let timestamp = Timestamp::from_str("2019-01-01T12:00:00.042").unwrap();
        assert_eq!(timestamp.to_string(), "2019-01-01 12:00:00.042000");
        assert_eq!(timestamp.format_iso(), "2019-01-01T12:00:00.042");
    }

    #[test]
    fn test_truncates_to_microseconds() {
        let timestamp = Timestamp::from_str("2019-01-01T12:00:00.123456789").unwrap();
        assert_eq!(timestamp.to_civil().subsec_nanosecond(), 123_456_000);
        assert_eq!(
            timestamp,
            Timestamp::from_str("2019-01-01T12:00:00.123456").unwrap()
        );
    }

    #[test]
    fn test_parsing_timestamp() {
        assert_eq!(
            Timestamp::from_str("2019-01-01T12:00:00").unwrap(),
            noon_new_years_2019()
        );
        assert_eq!(
            Timestamp::from_str("2019-01-01 12:00:00").unwrap(),
            noon_new_years_2019()
        );
        assert!(Timestamp::from_str("Chuck Norris").is_err());
        assert!(Timestamp::from_str("2019-02-29T00:00:00").is_err()); // Not a leap year

        let err = Timestamp::parse_arg("item", "Chuck Norris").unwrap_err();
        assert!(matches!(
            err,
            TimeRangeError::InvalidType {
                param: "item",
                expected: "Timestamp",
                ..
            }
        ));
    }

    #[test]
    fn test_duration_ops() {
        let a = noon_new_years_2019();
        let b = Timestamp::new(2019, 1, 2, 12, 0, 0).unwrap();

        assert_eq!(b - a, Duration::from_days(1));
        assert_eq!(a - b, Duration::from_days(-1));
        assert_eq!(a + Duration::from_days(1), b);
        assert_eq!(b - Duration::from_hours(24), a);

        let mut c = a;
        c += Duration::from_hours(24);
        assert_eq!(c, b);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(Timestamp::MAX.checked_add(Duration::from_micros(1)), None);
        assert_eq!(Timestamp::MIN.checked_sub(Duration::from_micros(1)), None);
        assert_eq!(Timestamp::MAX + Duration::from_days(1), Timestamp::MAX);
        assert_eq!(Timestamp::MIN + Duration::from_days(-1), Timestamp::MIN);
        assert_eq!(
            Timestamp::MAX.checked_sub(Duration::from_micros(1)),
            Timestamp::from_str("9999-12-31T23:59:59.999998").ok()
        );
    }
}
