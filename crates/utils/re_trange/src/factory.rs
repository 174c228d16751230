use crate::{BackwardTimeRange, Duration, ForwardTimeRange, TimeRange, TimeRangeError, Timestamp};

/// One argument to [`trange`]: either an absolute instant or an offset.
///
/// An offset for `start` is relative to now; an offset for `end` is relative to the resolved start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeBound {
    At(Timestamp),
    Offset(Duration),
}

impl RangeBound {
    /// Interprets `text` as a [`Timestamp`] or, failing that, as a [`Duration`].
    ///
    /// `param` names the argument in the error if it is neither.
    pub fn parse(param: &'static str, text: &str) -> Result<Self, TimeRangeError> {
        if let Ok(timestamp) = text.parse::<Timestamp>() {
            Ok(Self::At(timestamp))
        } else if let Ok(duration) = text.parse::<Duration>() {
            Ok(Self::Offset(duration))
        } else {
            Err(TimeRangeError::invalid_type(
                param,
                "Timestamp or Duration",
                text,
            ))
        }
    }

    fn resolve(self, param: &'static str, anchor: Timestamp) -> Result<Timestamp, TimeRangeError> {
        match self {
            Self::At(timestamp) => Ok(timestamp),
            Self::Offset(offset) => anchor
                .checked_add(offset)
                .ok_or(TimeRangeError::Overflow { param }),
        }
    }
}

impl From<Timestamp> for RangeBound {
    #[inline]
    fn from(timestamp: Timestamp) -> Self {
        Self::At(timestamp)
    }
}

impl From<Duration> for RangeBound {
    #[inline]
    fn from(offset: Duration) -> Self {
        Self::Offset(offset)
    }
}

impl From<jiff::civil::DateTime> for RangeBound {
    #[inline]
    fn from(datetime: jiff::civil::DateTime) -> Self {
        Self::At(datetime.into())
    }
}

impl From<jiff::SignedDuration> for RangeBound {
    #[inline]
    fn from(offset: jiff::SignedDuration) -> Self {
        Self::Offset(offset.into())
    }
}

// ----------------------------------------------------------------------------

/// Creates the [`TimeRange`] that `start` and `end` describe, relative to the current time.
///
/// ```text
/// trange(Some(12:30), Some(14:15))      [=========>>            forward
/// trange(Some(14:15), Some(12:30))      <<=========]            backward
/// trange(Some(12:30), None)             [=================>> …  forward, forever
/// trange(None, Some(14:00))         … <<=========]              backward, forever ("until")
/// trange(None, None)                    [=================>> …  forward from now
/// ```
///
/// Note the "until" case: a lone `end` becomes the *start* of an infinite backward range.
///
/// See [`trange_at`] for the exact resolution rules.
pub fn trange(
    start: Option<RangeBound>,
    end: Option<RangeBound>,
) -> Result<TimeRange, TimeRangeError> {
    trange_at(Timestamp::now(), start, end)
}

/// Like [`trange`], but with an explicit `now`.
///
/// * `start` defaults to `now`; an offset `start` is added to `now`.
/// * With both `start` and `end`, an offset `end` is added to the resolved start, and the
///   direction follows from comparing the two.
/// * With only `start`, the range is forward and infinite.
/// * With only `end`, the range is backward and infinite, *starting* at the resolved `end`.
/// * With neither, the range is forward and infinite, starting at `now`.
///
/// Fails only if resolving an offset leaves the representable span of time.
///
/// ```
/// # use re_trange::{trange_at, DirectedRange as _, Direction, Duration, Timestamp};
/// let noon = Timestamp::new(2019, 1, 1, 12, 0, 0)?;
/// let range = trange_at(noon, None, Some(Duration::from_hours(1).into()))?;
/// assert_eq!(range.direction(), Direction::Backward);
/// assert_eq!(range.start(), Timestamp::new(2019, 1, 1, 13, 0, 0)?);
/// assert_eq!(range.end(), None);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn trange_at(
    now: Timestamp,
    start: Option<RangeBound>,
    end: Option<RangeBound>,
) -> Result<TimeRange, TimeRangeError> {
    let range = match (start, end) {
        (Some(start), Some(end)) => {
            let start = start.resolve("start", now)?;
            let end = end.resolve("end", start)?;
            TimeRange::new(start, Some(end))
        }
        (Some(start), None) => ForwardTimeRange::open_ended(start.resolve("start", now)?).into(),
        (None, Some(end)) => BackwardTimeRange::open_ended(end.resolve("end", now)?).into(),
        (None, None) => ForwardTimeRange::open_ended(now).into(),
    };

    log::trace!("trange({start:?}, {end:?}) at {now:?} -> {range:?}");

    Ok(range)
}

// ----------------------------------------------------------------------------
