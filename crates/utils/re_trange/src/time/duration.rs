use crate::TimeRangeError;

/// A signed span of time with microsecond resolution.
///
/// All arithmetic saturates instead of overflowing.
#[derive(Copy, Clone, Default, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    const MICROS_PER_MILLI: i64 = 1_000;
    const MICROS_PER_SEC: i64 = 1_000_000;
    const SEC_PER_MINUTE: i64 = 60;
    const SEC_PER_HOUR: i64 = 60 * Self::SEC_PER_MINUTE;
    const SEC_PER_DAY: i64 = 24 * Self::SEC_PER_HOUR;
    const SEC_PER_WEEK: i64 = 7 * Self::SEC_PER_DAY;

    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(Self::MICROS_PER_MILLI))
    }

    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(Self::MICROS_PER_SEC))
    }

    #[inline]
    pub const fn from_mins(mins: i64) -> Self {
        Self::from_secs(mins.saturating_mul(Self::SEC_PER_MINUTE))
    }

    #[inline]
    pub const fn from_hours(hours: i64) -> Self {
        Self::from_secs(hours.saturating_mul(Self::SEC_PER_HOUR))
    }

    #[inline]
    pub const fn from_days(days: i64) -> Self {
        Self::from_secs(days.saturating_mul(Self::SEC_PER_DAY))
    }

    #[inline]
    pub const fn from_weeks(weeks: i64) -> Self {
        Self::from_secs(weeks.saturating_mul(Self::SEC_PER_WEEK))
    }

    /// Sums all components of `parts` into a single duration.
    pub fn from_parts(parts: DurationParts) -> Self {
        let DurationParts {
            weeks,
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
        } = parts;

        Self::from_weeks(weeks)
            + Self::from_days(days)
            + Self::from_hours(hours)
            + Self::from_mins(minutes)
            + Self::from_secs(seconds)
            + Self::from_millis(milliseconds)
            + Self::from_micros(microseconds)
    }

    #[inline]
    pub const fn as_micros(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parses `text` as a duration, reporting a failure as a type error on `param`.
    pub fn parse_arg(param: &'static str, text: &str) -> Result<Self, TimeRangeError> {
        text.parse()
            .map_err(|_err| TimeRangeError::invalid_type(param, "Duration", text))
    }

    pub fn exact_format(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const MICROS_PER_SEC: u64 = 1_000_000;
        const SEC_PER_MINUTE: u64 = 60;
        const SEC_PER_HOUR: u64 = 60 * SEC_PER_MINUTE;
        const SEC_PER_DAY: u64 = 24 * SEC_PER_HOUR;

        if self.0 < 0 {
            write!(f, "-")?;
        }
        let total_micros = self.0.unsigned_abs(); // no overflow on `i64::MIN`

        let mut seconds_remaining = total_micros / MICROS_PER_SEC;
        let micros = total_micros % MICROS_PER_SEC;
        let mut did_write = false;

        for (unit_secs, suffix) in [(SEC_PER_DAY, "d"), (SEC_PER_HOUR, "h"), (SEC_PER_MINUTE, "m")]
        {
            let count = seconds_remaining / unit_secs;
            if count > 0 {
                if did_write {
                    write!(f, " ")?;
                }
                write!(f, "{count}{suffix}")?;
                seconds_remaining -= count * unit_secs;
                did_write = true;
            }
        }

        if seconds_remaining > 0 || micros > 0 || !did_write {
            if did_write {
                write!(f, " ")?;
            }

            if micros == 0 {
                write!(f, "{seconds_remaining}s")?;
            } else if micros % 1_000 == 0 {
                write!(f, "{}.{:03}s", seconds_remaining, micros / 1_000)?;
            } else {
                write!(f, "{seconds_remaining}.{micros:06}s")?;
            }
        }

        Ok(())
    }
}

// ------------------------------------------

/// The individual components of a [`Duration`], as accepted by
/// [`crate::StepOptions`] and [`Duration::from_parts`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DurationParts {
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub microseconds: i64,
}

impl DurationParts {
    /// Every component with its sign flipped.
    pub fn negated(self) -> Self {
        Self {
            weeks: self.weeks.saturating_neg(),
            days: self.days.saturating_neg(),
            hours: self.hours.saturating_neg(),
            minutes: self.minutes.saturating_neg(),
            seconds: self.seconds.saturating_neg(),
            milliseconds: self.milliseconds.saturating_neg(),
            microseconds: self.microseconds.saturating_neg(),
        }
    }
}

// ------------------------------------------
// Arithmetic

impl std::ops::Neg for Duration {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::ops::Add for Duration {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl std::ops::Sub for Duration {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::Mul<i64> for Duration {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self {
        Self(self.0.saturating_mul(rhs))
    }
}

// ------------------------------------------
// Converters

impl From<std::time::Duration> for Duration {
    #[inline]
    fn from(duration: std::time::Duration) -> Self {
        Self(i64::try_from(duration.as_micros()).unwrap_or(i64::MAX))
    }
}

impl From<jiff::SignedDuration> for Duration {
    #[inline]
    fn from(duration: jiff::SignedDuration) -> Self {
        let micros = duration.as_micros();
        Self(i64::try_from(micros).unwrap_or(if micros < 0 { i64::MIN } else { i64::MAX }))
    }
}

impl From<Duration> for jiff::SignedDuration {
    #[inline]
    fn from(duration: Duration) -> Self {
        Self::from_micros(duration.as_micros())
    }
}

// ------------------------------------------
// Formatting and parsing

impl std::str::FromStr for Duration {
    type Err = jiff::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let jiff_duration = s.parse::<jiff::SignedDuration>()?;
        Ok(Self::from(jiff_duration))
    }
}

impl std::fmt::Debug for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.exact_format(f)
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.exact_format(f)
    }
}

// ------------------------------------------
