//! Directed ranges of time that can be stepped through in fixed-size increments.
//!
//! A range has a concrete `start` and an optional `end`, and a direction:
//! [`ForwardTimeRange`] moves towards the future, [`BackwardTimeRange`] towards the past.
//! Use [`trange`] to have the direction (and any relative bounds) worked out for you:
//!
//! ```
//! use re_trange::{trange, DirectedRange as _, StepOptions, Timestamp};
//!
//! let noon = Timestamp::new(2019, 1, 1, 12, 0, 0)?;
//! let next_noon = Timestamp::new(2019, 1, 2, 12, 0, 0)?;
//!
//! let day = trange(Some(noon.into()), Some(next_noon.into()))?;
//! assert_eq!(day.steps(StepOptions::default().hours(1)).count(), 25);
//!
//! let day_backwards = trange(Some(next_noon.into()), Some(noon.into()))?;
//! assert_ne!(day, day_backwards);
//! assert_eq!(day_backwards.steps(StepOptions::default().hours(1)).count(), 25);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod factory;
mod range;
mod time;

pub use self::{
    error::TimeRangeError,
    factory::{RangeBound, trange, trange_at},
    range::{
        BackwardTimeRange, DirectedRange, Direction, ForwardTimeRange, StepOptions, Steps,
        TimeRange,
    },
    time::{Duration, DurationParts, Timestamp},
};
