use alloc::vec::Vec;

use log::{debug, error};

use crate::error::{PairError, PushError};
use crate::pair::Pair;

pub const DEFAULT_CAPACITY: usize = 8;

/// A growable, append-only array of owned pairs
#[derive(Debug)]
pub struct PairArray<A, B> {
    pairs: Vec<Pair<A, B>>,
    capacity: usize,
}

/// Capacity after one growth step: doubling, with an empty array growing to one slot.
pub(crate) fn grown_capacity(capacity: usize) -> Option<usize> {
    if capacity == 0 {
        Some(1)
    } else {
        capacity.checked_mul(2)
    }
}

impl<A, B> PairArray<A, B> {
    /// Creates a new `PairArray` with room for `initial_capacity` pairs.
    ///
    /// # Errors
    ///
    /// Returns `PairError::AllocationFailed` if the storage for
    /// `initial_capacity` pairs cannot be reserved.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, PairError> {
        let mut pairs = Vec::new();
        if pairs.try_reserve_exact(initial_capacity).is_err() {
            error!("Memory allocation failed for pair array data ({initial_capacity} slots)");
            return Err(PairError::AllocationFailed {
                requested: initial_capacity,
            });
        }

        Ok(Self {
            pairs,
            capacity: initial_capacity,
        })
    }

    /// Creates a new `PairArray` with the default capacity (8).
    ///
    /// # Errors
    ///
    /// Returns `PairError::AllocationFailed` if the storage cannot be reserved.
    pub fn with_default_capacity() -> Result<Self, PairError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of slots available before the next growth step.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn ensure_capacity(&mut self) -> Result<(), PairError> {
        if self.pairs.len() < self.capacity {
            return Ok(());
        }

        let Some(new_capacity) = grown_capacity(self.capacity) else {
            return Err(PairError::AllocationFailed {
                requested: usize::MAX,
            });
        };

        // Reserve relative to the logical capacity, the Vec may already hold more
        let additional = new_capacity - self.pairs.len();
        self.pairs
            .try_reserve_exact(additional)
            .map_err(|_| PairError::AllocationFailed {
                requested: new_capacity,
            })?;

        debug!(
            "Grew pair array capacity from {} to {new_capacity}",
            self.capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Appends a pair, doubling the capacity if the array is full.
    ///
    /// On success the array owns the pair.
    ///
    /// # Errors
    ///
    /// Returns a `PushError` wrapping `PairError::AllocationFailed` if the
    /// array is full and cannot grow. The array is left unchanged and the
    /// pair is handed back through `PushError::into_pair`.
    pub fn push(&mut self, pair: Pair<A, B>) -> Result<(), PushError<A, B>> {
        if let Err(e) = self.ensure_capacity() {
            error!("Memory reallocation failed while adding a pair: {e}");
            return Err(PushError::new(e, Some(pair)));
        }

        self.pairs.push(pair);
        Ok(())
    }

    /// Releases every pair in insertion order, then the array storage.
    pub fn free(self) {
        debug!("Freeing pair array with {} pairs", self.pairs.len());
        for pair in self.pairs {
            pair.free();
        }
    }

    #[cfg(feature = "display")]
    pub(crate) fn pairs(&self) -> &[Pair<A, B>] {
        &self.pairs
    }
}

impl<A, B> Default for PairArray<A, B> {
    /// An empty array with no reserved storage. Reserving `DEFAULT_CAPACITY`
    /// slots is left to `with_default_capacity`, which can report failure.
    fn default() -> Self {
        Self {
            pairs: Vec::new(),
            capacity: 0,
        }
    }
}
