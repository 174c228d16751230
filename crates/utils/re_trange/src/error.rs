use crate::Timestamp;

/// Everything that can go wrong when building or querying a time range.
///
/// These are all contract violations by the caller: nothing is retried or recovered internally.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeRangeError {
    /// A dynamically typed (textual) argument could not be interpreted as any of the accepted types.
    #[error("argument '{param}' must be an instance of {expected}, not {actual:?}")]
    InvalidType {
        param: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error(
        "A ForwardTimeRange does not allow start ({start}) to be greater than end ({end}), \
         use BackwardTimeRange instead."
    )]
    ForwardOrder { start: Timestamp, end: Timestamp },

    #[error(
        "A BackwardTimeRange does not allow start ({start}) to be lesser than or equal to end ({end}), \
         use ForwardTimeRange instead."
    )]
    BackwardOrder { start: Timestamp, end: Timestamp },

    /// Resolving a relative argument left the representable span of time.
    #[error("argument '{param}' resolves to an instant outside of {min}..={max}", min = Timestamp::MIN, max = Timestamp::MAX)]
    Overflow { param: &'static str },

    #[error("Not a valid time range representation: {0:?}")]
    InvalidRepr(String),
}

impl TimeRangeError {
    #[inline]
    pub(crate) fn invalid_type(param: &'static str, expected: &'static str, actual: &str) -> Self {
        Self::InvalidType {
            param,
            expected,
            actual: actual.to_owned(),
        }
    }
}
