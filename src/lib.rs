#![cfg_attr(not(feature = "std"), no_std)]

//! `paired`: a generic pair type and a growable array of pairs.
//!
//! A [`Pair`] holds two independently-typed values. When they are references,
//! the pair only borrows the referents and never frees them.
//!
//! A [`PairArray`] is an append-only, ordered sequence of owned pairs. It starts
//! with a caller-chosen capacity and doubles it whenever an append finds the
//! array full. An array created with capacity 0 grows to 1 on the first append.
//!
//! ```
//! # use paired::{Pair, PairArray};
//! let (a, b, c) = (1u32, 2u32, 3u32);
//!
//! let mut array = PairArray::with_capacity(2).unwrap();
//! array.push(Pair::new(&a, &b)).unwrap();
//! array.push(Pair::new(&b, &c)).unwrap();
//! array.push(Pair::new(&c, &a)).unwrap();
//!
//! assert_eq!(array.len(), 3);
//! assert_eq!(array.capacity(), 4);
//!
//! // One line per pair, in insertion order
//! assert_eq!(array.display().to_string().lines().count(), 3);
//!
//! array.free();
//! ```
//!
//! # Error Handling
//!
//! Storage is reserved fallibly. When the allocator cannot supply it,
//! creation returns [`PairError::AllocationFailed`] and a failed append
//! returns a [`PushError`] that hands the rejected pair back:
//!
//! ```
//! # use paired::{Pair, PairArray, PairError};
//! let result = PairArray::<u64, u64>::with_capacity(usize::MAX);
//! assert_eq!(
//!     result.unwrap_err(),
//!     PairError::AllocationFailed { requested: usize::MAX }
//! );
//! ```
//!
//! Failures are also reported through the `log` facade at error level.
//!
//! # Handle Interface
//!
//! The [`handle`] module offers free functions in which `None` plays the role
//! of an empty handle:
//!
//! ```
//! # use paired::handle::{add_pair_to_array, create_pair, create_pair_array, free_pair_array, status};
//! let (x, y) = ("left", "right");
//! let mut array = create_pair_array(1);
//!
//! let ok = add_pair_to_array(array.as_mut(), Some(create_pair(&x, &y)));
//! assert_eq!(status(&ok), 0);
//!
//! let rejected = add_pair_to_array(array.as_mut(), None);
//! assert!(status(&rejected) < 0);
//!
//! free_pair_array(array);
//! free_pair_array::<&str, &str>(None);
//! ```
//!
//! # Features
//!
//! - `std` (default): printing to standard output, implies `display`
//! - `display`: `Display` formatting of pairs and arrays
//!
//! Without `std` the crate is `no_std` and needs only `alloc`.

extern crate alloc;

mod core;
#[cfg(feature = "display")]
mod display;
mod error;
pub mod handle;
mod pair;

// Re-export public types
pub use crate::core::{PairArray, DEFAULT_CAPACITY};
#[cfg(feature = "display")]
pub use crate::display::PairArrayDisplay;
pub use crate::error::{PairError, PushError};
pub use crate::pair::Pair;
