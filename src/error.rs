use core::fmt;

use thiserror::Error;

use crate::pair::Pair;

/// Error types for `Pair` and `PairArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PairError {
    /// The allocator could not supply storage for the requested number of pairs
    #[error("Memory allocation failed: could not reserve {requested} pair slots")]
    AllocationFailed {
        /// Number of pair slots requested
        requested: usize,
    },
    /// A missing handle was passed where a valid one is required
    #[error("Invalid argument: {argument} is missing")]
    InvalidArgument {
        /// Name of the missing argument
        argument: &'static str,
    },
}

impl PairError {
    /// Negative status code for callers that expect `0 = success`.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            PairError::InvalidArgument { .. } => -1,
            PairError::AllocationFailed { .. } => -2,
        }
    }
}

/// Error returned when a pair could not be appended.
///
/// The array never takes ownership of a rejected pair, so it is handed back
/// to the caller through `into_pair()`.
pub struct PushError<A, B> {
    error: PairError,
    pair: Option<Pair<A, B>>,
}

impl<A, B> PushError<A, B> {
    pub(crate) fn new(error: PairError, pair: Option<Pair<A, B>>) -> Self {
        Self { error, pair }
    }

    #[must_use]
    pub fn error(&self) -> &PairError {
        &self.error
    }

    /// Returns the rejected pair, if one was supplied.
    #[must_use]
    pub fn into_pair(self) -> Option<Pair<A, B>> {
        self.pair
    }
}

impl<A, B> fmt::Debug for PushError<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError")
            .field("error", &self.error)
            .field("has_pair", &self.pair.is_some())
            .finish()
    }
}

impl<A, B> fmt::Display for PushError<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl<A, B> core::error::Error for PushError<A, B> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<A, B> From<PushError<A, B>> for PairError {
    fn from(error: PushError<A, B>) -> Self {
        error.error
    }
}
