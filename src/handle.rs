//! Nullable handle surface.
//!
//! Each function mirrors one of the classic `create`/`add`/`print`/`free`
//! entry points, with `None` standing in for an empty handle. Freeing or
//! printing `None` is harmless; adding with a missing handle is an
//! `InvalidArgument` error that mutates nothing.

use log::error;

use crate::core::PairArray;
use crate::error::{PairError, PushError};
use crate::pair::Pair;

pub fn create_pair<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair::new(first, second)
}

pub fn free_pair<A, B>(pair: Option<Pair<A, B>>) {
    if let Some(pair) = pair {
        pair.free();
    }
}

/// Creates an array with room for `initial_capacity` pairs, or `None` if the
/// storage cannot be reserved (the failure is logged).
#[must_use]
pub fn create_pair_array<A, B>(initial_capacity: usize) -> Option<PairArray<A, B>> {
    PairArray::with_capacity(initial_capacity).ok()
}

/// Appends `pair` to `array`.
///
/// # Errors
///
/// Returns a `PushError` wrapping:
/// - `PairError::InvalidArgument` if `array` or `pair` is `None`
/// - `PairError::AllocationFailed` if the array cannot grow
///
/// A supplied pair is always handed back on failure.
pub fn add_pair_to_array<A, B>(
    array: Option<&mut PairArray<A, B>>,
    pair: Option<Pair<A, B>>,
) -> Result<(), PushError<A, B>> {
    let Some(array) = array else {
        error!("Invalid input to add_pair_to_array: missing array");
        return Err(PushError::new(
            PairError::InvalidArgument { argument: "array" },
            pair,
        ));
    };
    let Some(pair) = pair else {
        error!("Invalid input to add_pair_to_array: missing pair");
        return Err(PushError::new(
            PairError::InvalidArgument { argument: "pair" },
            None,
        ));
    };

    array.push(pair)
}

/// Collapses a result into a status code: `0` on success, negative on failure.
#[must_use]
pub fn status<A, B>(result: &Result<(), PushError<A, B>>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => e.error().code(),
    }
}

#[cfg(feature = "std")]
pub fn print_pair_array<A: core::fmt::Pointer, B: core::fmt::Pointer>(
    array: Option<&PairArray<A, B>>,
) {
    match array {
        Some(array) => array.print(),
        None => error!("Invalid pair array to print"),
    }
}

pub fn free_pair_array<A, B>(array: Option<PairArray<A, B>>) {
    if let Some(array) = array {
        array.free();
    }
}
