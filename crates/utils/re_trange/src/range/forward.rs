use super::{DirectedRange, Direction, parse_repr, write_repr};
use crate::{TimeRangeError, Timestamp};

/// A range that moves forward in time: `start <= end`, or no `end` at all.
///
/// ```text
///  [=========================>>
///  start                     end
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForwardTimeRange {
    start: Timestamp,
    end: Option<Timestamp>,
}

impl ForwardTimeRange {
    pub(crate) const NAME: &'static str = "ForwardTimeRange";

    /// Fails if `end` lies before `start`.
    pub fn new(start: Timestamp, end: Option<Timestamp>) -> Result<Self, TimeRangeError> {
        if let Some(end) = end
            && start > end
        {
            log::debug!("Rejected {}({start:?}, {end:?})", Self::NAME);
            return Err(TimeRangeError::ForwardOrder { start, end });
        }
        Ok(Self { start, end })
    }

    /// Starts at `start` and never ends.
    #[inline]
    pub fn open_ended(start: Timestamp) -> Self {
        Self { start, end: None }
    }

    #[inline]
    pub(crate) fn new_unchecked(start: Timestamp, end: Option<Timestamp>) -> Self {
        debug_assert!(
            end.is_none_or(|end| start <= end),
            "{start:?} > {end:?} in a forward range"
        );
        Self { start, end }
    }
}

impl DirectedRange for ForwardTimeRange {
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
        Direction::Forward
    }

    fn contains(&self, item: Timestamp, include_start: bool, include_end: bool) -> bool {
        let after_start = if include_start {
            self.start <= item
        } else {
            self.start < item
        };
        let before_end = match self.end {
            Some(end) if include_end => item <= end,
            Some(end) => item < end,
            None => true,
        };
        after_start && before_end
    }
}

// ------------------------------------------
// Formatting and parsing

/// `[start, ..., end>`, or `[start, ...>` if infinite.
impl std::fmt::Display for ForwardTimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{}, ..., {end}>", self.start),
            None => write!(f, "[{}, ...>", self.start),
        }
    }
}

/// `ForwardTimeRange(start, end)`, which [`std::str::FromStr`] parses back.
impl std::fmt::Debug for ForwardTimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_repr(f, Self::NAME, self.start, self.end)
    }
}

impl std::str::FromStr for ForwardTimeRange {
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
