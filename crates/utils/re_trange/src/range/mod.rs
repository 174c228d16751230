//! Directed ranges of time.
//!
//! A range always has a concrete `start` and optionally an `end`. Iterating a range always moves
//! from `start` towards `end`, or forever if there is no `end`.

mod backward;
mod forward;
mod steps;

pub use self::{
    backward::BackwardTimeRange,
    forward::ForwardTimeRange,
    steps::{StepOptions, Steps},
};

use crate::{Duration, TimeRangeError, Timestamp};

// ----------------------------------------------------------------------------

/// Which way a range points in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `start <= end`, traversal moves towards the future.
    Forward,

    /// `start > end`, traversal moves towards the past.
    Backward,
}

/// The behavior shared by [`ForwardTimeRange`], [`BackwardTimeRange`] and [`TimeRange`].
pub trait DirectedRange: Copy + Into<TimeRange> {
    fn start(&self) -> Timestamp;

    /// `None` if the range is infinite in its direction of travel.
    fn end(&self) -> Option<Timestamp>;

    fn direction(&self) -> Direction;

    /// Is `item` in this range?
    ///
    /// `include_start` and `include_end` decide whether `item` may be equal to `start` or `end`.
    fn contains(&self, item: Timestamp, include_start: bool, include_end: bool) -> bool;

    /// `end - start`, or `None` if the range is infinite.
    #[inline]
    fn delta(&self) -> Option<Duration> {
        self.end().map(|end| end - self.start())
    }

    #[inline]
    fn is_infinite(&self) -> bool {
        self.end().is_none()
    }

    /// Membership with both ends included.
    #[inline]
    fn contains_instant(&self, item: Timestamp) -> bool {
        self.contains(item, true, true)
    }

    /// Does this range cover every instant covered by `other`?
    ///
    /// Both ends are treated as inclusive, and the direction of either range is irrelevant.
    fn contains_range(&self, other: &impl DirectedRange) -> bool {
        let (min, max) = covered_span(self);
        let (other_min, other_max) = covered_span(other);

        let covers_min = match (min, other_min) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(min), Some(other_min)) => min <= other_min,
        };
        let covers_max = match (max, other_max) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(max), Some(other_max)) => other_max <= max,
        };

        covers_min && covers_max
    }

    /// A fresh iterator walking from `start` towards `end` in steps described by `options`.
    ///
    /// The iterator never ends if the range is infinite.
    fn steps(&self, options: StepOptions) -> Steps {
        Steps::new((*self).into(), options)
    }
}

/// The earliest and latest instant covered by `range`, `None` meaning unbounded.
fn covered_span(range: &impl DirectedRange) -> (Option<Timestamp>, Option<Timestamp>) {
    match range.direction() {
        Direction::Forward => (Some(range.start()), range.end()),
        Direction::Backward => (range.end(), Some(range.start())),
    }
}

// ----------------------------------------------------------------------------

/// Either a [`ForwardTimeRange`] or a [`BackwardTimeRange`].
///
/// This is what [`crate::trange`] returns. Equality is direction sensitive: a forward and a
/// backward range are never equal, even if they span the same two instants.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeRange {
    Forward(ForwardTimeRange),
    Backward(BackwardTimeRange),
}

impl TimeRange {
    /// Picks whichever direction `start` and `end` call for.
    ///
    /// Without an `end` the range points forward, forever.
    pub fn new(start: Timestamp, end: Option<Timestamp>) -> Self {
        match end {
            Some(end) if start > end => {
                Self::Backward(BackwardTimeRange::new_unchecked(start, Some(end)))
            }
            _ => Self::Forward(ForwardTimeRange::new_unchecked(start, end)),
        }
    }

    /// Membership test for a dynamically typed (textual) `item`.
    pub fn contains_parsed(&self, item: &str) -> Result<bool, TimeRangeError> {
        let item = Timestamp::parse_arg("item", item)?;
        Ok(self.contains_instant(item))
    }

    #[inline]
    pub fn as_forward(&self) -> Option<&ForwardTimeRange> {
        match self {
            Self::Forward(range) => Some(range),
            Self::Backward(_) => None,
        }
    }

    #[inline]
    pub fn as_backward(&self) -> Option<&BackwardTimeRange> {
        match self {
            Self::Forward(_) => None,
            Self::Backward(range) => Some(range),
        }
    }
}

impl DirectedRange for TimeRange {
    #[inline]
    fn start(&self) -> Timestamp {
        match self {
            Self::Forward(range) => range.start(),
            Self::Backward(range) => range.start(),
        }
    }

    #[inline]
    fn end(&self) -> Option<Timestamp> {
        match self {
            Self::Forward(range) => range.end(),
            Self::Backward(range) => range.end(),
        }
    }

    #[inline]
    fn direction(&self) -> Direction {
        match self {
            Self::Forward(_) => Direction::Forward,
            Self::Backward(_) => Direction::Backward,
        }
    }

    #[inline]
    fn contains(&self, item: Timestamp, include_start: bool, include_end: bool) -> bool {
        match self {
            Self::Forward(range) => range.contains(item, include_start, include_end),
            Self::Backward(range) => range.contains(item, include_start, include_end),
        }
    }

    fn steps(&self, options: StepOptions) -> Steps {
        match self {
            Self::Forward(range) => range.steps(options),
            Self::Backward(range) => range.steps(options),
        }
    }
}

impl From<ForwardTimeRange> for TimeRange {
    #[inline]
    fn from(range: ForwardTimeRange) -> Self {
        Self::Forward(range)
    }
}

impl From<BackwardTimeRange> for TimeRange {
    #[inline]
    fn from(range: BackwardTimeRange) -> Self {
        Self::Backward(range)
    }
}

// ------------------------------------------
// Formatting and parsing

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward(range) => std::fmt::Display::fmt(range, f),
            Self::Backward(range) => std::fmt::Display::fmt(range, f),
        }
    }
}

impl std::fmt::Debug for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward(range) => std::fmt::Debug::fmt(range, f),
            Self::Backward(range) => std::fmt::Debug::fmt(range, f),
        }
    }
}

/// Parses the [`std::fmt::Debug`] representation of either variant.
impl std::str::FromStr for TimeRange {
    type Err = TimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let repr = parse_repr(s)?;
        match repr.name {
            ForwardTimeRange::NAME => Ok(ForwardTimeRange::new(repr.start, repr.end)?.into()),
            BackwardTimeRange::NAME => Ok(BackwardTimeRange::new(repr.start, repr.end)?.into()),
            _ => Err(TimeRangeError::InvalidRepr(s.to_owned())),
        }
    }
}

/// The pieces of `Name(start, end)`.
struct Repr<'a> {
    name: &'a str,
    start: Timestamp,
    end: Option<Timestamp>,
}

fn parse_repr(text: &str) -> Result<Repr<'_>, TimeRangeError> {
    let invalid = || TimeRangeError::InvalidRepr(text.to_owned());

    let (name, args) = text.trim().split_once('(').ok_or_else(invalid)?;
    let args = args.strip_suffix(')').ok_or_else(invalid)?;
    let (start, end) = args.split_once(',').ok_or_else(invalid)?;

    let start = start.parse::<Timestamp>().map_err(|_err| invalid())?;
    let end = match end.trim() {
        "None" => None,
        end => Some(end.parse::<Timestamp>().map_err(|_err| invalid())?),
    };

    Ok(Repr {
        name: name.trim(),
        start,
        end,
    })
}

/// Writes `Name(start, end)`, with `None` for a missing end.
fn write_repr(
    f: &mut std::fmt::Formatter<'_>,
    name: &str,
    start: Timestamp,
    end: Option<Timestamp>,
) -> std::fmt::Result {
    match end {
        Some(end) => write!(f, "{name}({start:?}, {end:?})"),
        None => write!(f, "{name}({start:?}, None)"),
    }
}

// ----------------------------------------------------------------------------
