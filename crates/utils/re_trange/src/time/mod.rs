//! The two leaf types every range is built from: a naive [`Timestamp`] and a signed [`Duration`].

mod duration;
mod timestamp;

pub use self::{
    duration::{Duration, DurationParts},
    timestamp::Timestamp,
};
