use super::{DirectedRange, Direction, StepOptions, Steps, parse_repr, write_repr};
use crate::{TimeRangeError, Timestamp};

/// A range that moves backward in time: `start > end`, or no `end` at all.
///
/// ```text
///  <<=========================|
///  end                    start
/// ```
///
/// Without an `end` the range reaches infinitely far back into the past.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackwardTimeRange {
    start: Timestamp,
    end: Option<Timestamp>,
}

impl BackwardTimeRange {
    pub(crate) const NAME: &'static str = "BackwardTimeRange";

    /// Fails unless `end` lies strictly before `start`.
    pub fn new(start: Timestamp, end: Option<Timestamp>) -> Result<Self, TimeRangeError> {
        if let Some(end) = end
            && start <= end
        {
            log::debug!("Rejected {}({start:?}, {end:?})", Self::NAME);
            return Err(TimeRangeError::BackwardOrder { start, end });
        }
        Ok(Self { start, end })
    }

    /// Starts at `start` and reaches back to the beginning of time.
    #[inline]
    pub fn open_ended(start: Timestamp) -> Self {
        Self { start, end: None }
    }

    #[inline]
    pub(crate) fn new_unchecked(start: Timestamp, end: Option<Timestamp>) -> Self {
        debug_assert!(
            end.is_none_or(|end| start > end),
            "{start:?} <= {end:?} in a backward range"
        );
        Self { start, end }
    }
}

impl DirectedRange for BackwardTimeRange {
    #[inline]
    fn start(&self) -> Timestamp {
        self.start
    }

    #[inline]
    fn end(&self) -> Option<Timestamp> {
        self.end
    }

    #[inline]
    fn direction(&self) -> Direction {
        Direction::Backward
    }

    fn contains(&self, item: Timestamp, include_start: bool, include_end: bool) -> bool {
        let before_start = if include_start {
            item <= self.start
        } else {
            item < self.start
        };
        let after_end = match self.end {
            Some(end) if include_end => end <= item,
            Some(end) => end < item,
            None => true,
        };
        before_start && after_end
    }

    /// Step sizes are given as *positive* magnitudes, meaning "from `start` towards `end`".
    ///
    /// They are flipped before stepping, so `hours(1)` walks one hour into the past per step.
    fn steps(&self, options: StepOptions) -> Steps {
        Steps::new((*self).into(), options.reversed())
    }
}

// ------------------------------------------
// Formatting and parsing

/// `<end, ..., start]`, or `<..., start]` if infinite.
impl std::fmt::Display for BackwardTimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "<{end}, ..., {}]", self.start),
            None => write!(f, "<..., {}]", self.start),
        }
    }
}

/// `BackwardTimeRange(start, end)`, which [`std::str::FromStr`] parses back.
impl std::fmt::Debug for BackwardTimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_repr(f, Self::NAME, self.start, self.end)
    }
}

impl std::str::FromStr for BackwardTimeRange {
    type Err = TimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let repr = parse_repr(s)?;
        if repr.name != Self::NAME {
            return Err(TimeRangeError::InvalidRepr(s.to_owned()));
        }
        Self::new(repr.start, repr.end)
    }
}

// ------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(text: &str) -> Timestamp {
        text.parse().unwrap()
    }

    #[test]
    fn rejects_end_at_or_after_start() {
        let a = ts("2019-01-01T12:00:00");
        let b = ts("2019-01-02T12:00:00");

        assert_eq!(
            BackwardTimeRange::new(a, Some(b)),
            Err(TimeRangeError::BackwardOrder { start: a, end: b })
        );
        assert!(BackwardTimeRange::new(a, Some(a)).is_err());
        assert!(BackwardTimeRange::new(b, Some(a)).is_ok());
        assert!(BackwardTimeRange::new(a, None).is_ok());
    }

    #[test]
    fn contains_honors_inclusivity() {
        let a = ts("2019-01-01T12:00:00");
        let b = ts("2019-01-02T12:00:00");
        let range = BackwardTimeRange::new(b, Some(a)).unwrap();

        assert!(range.contains(b, true, true));
        assert!(!range.contains(b, false, true));
        assert!(range.contains(a, true, true));
        assert!(!range.contains(a, true, false));
        assert!(range.contains(ts("2019-01-02T00:00:00"), false, false));
        assert!(!range.contains(ts("2019-01-02T12:00:00.000001"), true, true));

        let until = BackwardTimeRange::open_ended(a);
        assert!(until.contains(Timestamp::MIN, true, false));
        assert!(!until.contains(b, true, true));
    }

    #[test]
    fn steps_walk_into_the_past() {
        let a = ts("2019-01-01T12:00:00");
        let b = ts("2019-01-01T15:00:00");
        let range = BackwardTimeRange::new(b, Some(a)).unwrap();

        let steps: Vec<_> = range.steps(StepOptions::default().hours(1)).collect();
        assert_eq!(
            steps,
            vec![
                b,
                ts("2019-01-01T14:00:00"),
                ts("2019-01-01T13:00:00"),
                a,
            ]
        );
    }

    #[test]
    fn formatting() {
        let a = ts("2019-01-01T12:00:00");
        let b = ts("2019-01-02T12:00:00");

        insta::assert_snapshot!(
            BackwardTimeRange::new(b, Some(a)).unwrap(),
            @"<2019-01-01 12:00:00, ..., 2019-01-02 12:00:00]"
        );
        insta::assert_snapshot!(BackwardTimeRange::open_ended(a), @"<..., 2019-01-01 12:00:00]");
        insta::assert_snapshot!(
            format!("{:?}", BackwardTimeRange::new(b, Some(a)).unwrap()),
            @"BackwardTimeRange(2019-01-02T12:00:00, 2019-01-01T12:00:00)"
        );
    }
}
