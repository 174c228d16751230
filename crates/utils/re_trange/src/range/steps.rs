use std::iter::FusedIterator;

use super::{DirectedRange as _, TimeRange};
use crate::{Duration, DurationParts, TimeRangeError, Timestamp};

/// How to step through a range, see [`super::DirectedRange::steps`].
///
/// The step size is either an explicit `delta` or the sum of the individual components.
/// A non-zero `delta` wins over the components; a zero-length `delta` falls back to them.
///
/// ```
/// # use re_trange::{Duration, StepOptions};
/// let hourly = StepOptions::every(Duration::from_hours(1));
/// let hourly_without_end = StepOptions::default().hours(1).include_end(false);
/// assert_eq!(hourly.step_size(), hourly_without_end.step_size());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOptions {
    pub delta: Option<Duration>,
    pub parts: DurationParts,

    /// Start the iteration at `start` rather than one step after it.
    pub include_start: bool,

    /// Yield an instant that lands exactly on `end`.
    ///
    /// Irrelevant for infinite ranges.
    pub include_end: bool,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self {
            delta: None,
            parts: DurationParts::default(),
            include_start: true,
            include_end: true,
        }
    }
}

impl StepOptions {
    /// Steps of exactly `delta`.
    #[inline]
    pub fn every(delta: Duration) -> Self {
        Self::default().with_delta(delta)
    }

    #[inline]
    pub fn with_delta(mut self, delta: Duration) -> Self {
        self.delta = Some(delta);
        self
    }

    /// Like [`Self::with_delta`], for a dynamically typed (textual) delta such as `"1h"`.
    pub fn with_delta_str(self, delta: &str) -> Result<Self, TimeRangeError> {
        Ok(self.with_delta(Duration::parse_arg("delta", delta)?))
    }

    #[inline]
    pub fn weeks(mut self, weeks: i64) -> Self {
        self.parts.weeks = weeks;
        self
    }

    #[inline]
    pub fn days(mut self, days: i64) -> Self {
        self.parts.days = days;
        self
    }

    #[inline]
    pub fn hours(mut self, hours: i64) -> Self {
        self.parts.hours = hours;
        self
    }

    #[inline]
    pub fn minutes(mut self, minutes: i64) -> Self {
        self.parts.minutes = minutes;
        self
    }

    #[inline]
    pub fn seconds(mut self, seconds: i64) -> Self {
        self.parts.seconds = seconds;
        self
    }

    #[inline]
    pub fn milliseconds(mut self, milliseconds: i64) -> Self {
        self.parts.milliseconds = milliseconds;
        self
    }

    #[inline]
    pub fn microseconds(mut self, microseconds: i64) -> Self {
        self.parts.microseconds = microseconds;
        self
    }

    #[inline]
    pub fn include_start(mut self, include_start: bool) -> Self {
        self.include_start = include_start;
        self
    }

    #[inline]
    pub fn include_end(mut self, include_end: bool) -> Self {
        self.include_end = include_end;
        self
    }

    /// The resolved size of a single step.
    pub fn step_size(&self) -> Duration {
        match self.delta {
            Some(delta) if !delta.is_zero() => delta,
            _ => Duration::from_parts(self.parts),
        }
    }

    /// The same options with the delta and every component negated.
    pub(crate) fn reversed(self) -> Self {
        Self {
            delta: self.delta.map(|delta| -delta),
            parts: self.parts.negated(),
            ..self
        }
    }
}

// ----------------------------------------------------------------------------

/// The lazy sequence of instants returned by [`super::DirectedRange::steps`].
///
/// Owns a copy of its range, so every call to `steps` starts over from `start`.
#[derive(Clone, Debug)]
pub struct Steps {
    range: TimeRange,
    step: Duration,
    include_end: bool,

    /// The next instant to yield, `None` once exhausted.
    cursor: Option<Timestamp>,
}

impl Steps {
    pub(crate) fn new(range: TimeRange, options: StepOptions) -> Self {
        let step = options.step_size();
        if step.is_zero() {
            log_once::warn_once!(
                "Stepping through {range} with a zero-length step: only the first instant is yielded"
            );
        }

        let cursor = if options.include_start {
            Some(range.start())
        } else {
            range.start().checked_add(step)
        };

        Self {
            range,
            step,
            include_end: options.include_end,
            cursor,
        }
    }

    /// The size of a single step, already signed for the direction of travel.
    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Only the far end honors `include_end`: the cursor never has to skip over `start`.
    #[inline]
    fn in_range(&self, instant: Timestamp) -> bool {
        self.range.is_infinite() || self.range.contains(instant, true, self.include_end)
    }

    /// Exact number of remaining items, `None` if unbounded.
    fn remaining(&self) -> Option<usize> {
        let Some(cursor) = self.cursor else {
            return Some(0);
        };
        let end = self.range.end()?;

        if !self.in_range(cursor) {
            return Some(0);
        }

        let distance = (end - cursor).as_micros();
        let step = self.step.as_micros();
        if step == 0 || distance == 0 || (distance > 0) != (step > 0) {
            // Either stuck or walking away from `end`: only `cursor` itself.
            return Some(1);
        }

        let whole_steps = distance / step;
        let lands_on_end = distance % step == 0;
        let count = if lands_on_end && !self.include_end {
            whole_steps
        } else {
            whole_steps + 1
        };
        Some(usize::try_from(count).unwrap_or(usize::MAX))
    }
}

impl Iterator for Steps {
    type Item = Timestamp;

    fn next(&mut self) -> Option<Timestamp> {
        let current = self.cursor?;
        if !self.in_range(current) {
            self.cursor = None;
            return None;
        }

        self.cursor = if self.step.is_zero() {
            None
        } else {
            current.checked_add(self.step)
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (0, None),
        }
    }
}

impl FusedIterator for Steps {}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectedRange as _, ForwardTimeRange};

    fn ts(text: &str) -> Timestamp {
        text.parse().unwrap()
    }

    fn day() -> TimeRange {
        TimeRange::new(ts("2019-01-01T12:00:00"), Some(ts("2019-01-02T12:00:00")))
    }

    #[test]
    fn delta_precedence() {
        let both = StepOptions::every(Duration::from_hours(2)).minutes(30);
        assert_eq!(both.step_size(), Duration::from_hours(2));

        let zero_delta = StepOptions::every(Duration::ZERO).minutes(30);
        assert_eq!(zero_delta.step_size(), Duration::from_mins(30));

        let components = StepOptions::default().hours(1).minutes(30);
        assert_eq!(components.step_size(), Duration::from_mins(90));

        let reversed = StepOptions::every(Duration::from_hours(2)).minutes(30).reversed();
        assert_eq!(reversed.step_size(), Duration::from_hours(-2));
        assert_eq!(reversed.parts.minutes, -30);
    }

    #[test]
    fn delta_str_is_type_checked() {
        assert_eq!(
            StepOptions::default().with_delta_str("1h").unwrap().step_size(),
            Duration::from_hours(1)
        );
        assert!(matches!(
            StepOptions::default().with_delta_str("silly walk"),
            Err(TimeRangeError::InvalidType { param: "delta", .. })
        ));
    }

    #[test]
    fn size_hint_is_exact_for_bounded_ranges() {
        for options in [
            StepOptions::default().hours(1),
            StepOptions::default().hours(1).include_end(false),
            StepOptions::default().hours(1).include_start(false),
            StepOptions::default().hours(1).include_start(false).include_end(false),
            StepOptions::default().hours(7),
            StepOptions::default().hours(24),
            StepOptions::default().hours(25),
            StepOptions::default().hours(-1),
        ] {
            let backward_day =
                TimeRange::new(ts("2019-01-02T12:00:00"), Some(ts("2019-01-01T12:00:00")));

            for range in [day(), backward_day] {
                let mut steps = range.steps(options);
                let mut expected = steps.clone().count();
                loop {
                    assert_eq!(
                        steps.size_hint(),
                        (expected, Some(expected)),
                        "{range} {options:?}"
                    );
                    if steps.next().is_none() {
                        break;
                    }
                    expected -= 1;
                }
            }
        }
    }

    #[test]
    fn wrong_way_steps_yield_at_most_start() {
        let range = day();
        let steps: Vec<_> = range.steps(StepOptions::default().hours(-1)).collect();
        assert_eq!(steps, vec![range.start()]);

        let steps: Vec<_> = range
            .steps(StepOptions::default().hours(-1).include_start(false))
            .collect();
        assert!(steps.is_empty());
    }

    #[test]
    fn zero_step_does_not_hang() {
        let steps: Vec<_> = day().steps(StepOptions::default()).collect();
        assert_eq!(steps, vec![day().start()]);

        let forever = ForwardTimeRange::open_ended(ts("2019-01-01T12:00:00"));
        assert_eq!(forever.steps(StepOptions::default()).count(), 1);
    }

    #[test]
    fn infinite_ranges_keep_going() {
        let forever = ForwardTimeRange::open_ended(ts("2019-01-01T12:00:00"));
        let mut steps = forever.steps(StepOptions::default().days(365));
        assert_eq!(steps.size_hint(), (0, None));
        assert_eq!(
            steps.nth(1_000),
            Some(ts("2019-01-01T12:00:00") + Duration::from_days(365_000))
        );
    }

    #[test]
    fn overflow_ends_iteration() {
        let range = ForwardTimeRange::open_ended(Timestamp::MAX - Duration::from_micros(1));
        let steps: Vec<_> = range.steps(StepOptions::default().microseconds(1)).collect();
        assert_eq!(steps, vec![Timestamp::MAX - Duration::from_micros(1), Timestamp::MAX]);
    }

    #[test]
    fn steps_are_restartable() {
        let range = day();
        let first: Vec<_> = range.steps(StepOptions::default().hours(6)).collect();
        let second: Vec<_> = range.steps(StepOptions::default().hours(6)).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }
}
