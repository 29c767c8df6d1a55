//! # lazyseq: lazy generators with shared suspension
//!
//! A generator wraps a producer routine that suspends after every value it
//! emits and resumes on demand. Callers pull values through a cursor with
//! the classic single-pass iteration contract: dereference, advance, and
//! compare with an end marker.
//!
//! ## Layers
//!
//! - **[`Frame`]**: the producer's suspended state, its current value, and
//!   whether it has terminated.
//! - **[`FrameHandle`]**: shared ownership of a frame; the frame (and every
//!   local the producer captured) is dropped exactly once, when the last
//!   handle goes away.
//! - **[`Generator`] / [`Cursor`] / [`Sentinel`]**: the public iteration
//!   surface. [`Iter`] bridges it to [`Iterator`].
//!
//! ## Writing producers
//!
//! - [`from_fn`] - a step closure returning [`Step::Yielded`] or [`Step::Complete`]
//! - [`from_async`] - an `async` body that yields with `co.yield_(value).await`
//! - [`once`], [`repeat_with`], [`successors`], [`from_iter`]
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let gen = from_async(|co| async move {
//!     for i in 0..5 {
//!         co.yield_(i).await;
//!     }
//! })
//! .into_generator();
//!
//! let mut cursor = gen.begin();
//! assert_eq!(*cursor.get(), 0);
//! let mut seen = vec![];
//! while cursor != gen.end() {
//!     seen.push(*cursor.post_advance());
//! }
//! assert_eq!(seen, vec![0, 1, 2, 3, 4]);
//! ```
//!
//! Everything here is single-threaded: generators and cursors are `!Send`.

pub mod build;
mod cursor;
mod frame;
mod generator;
mod handle;
mod iter;
pub mod prelude;
mod produce;
mod step;

pub use build::{from_async, from_fn, from_iter, once, repeat_with, successors, Co};
pub use cursor::{Cursor, PostAdvance};
pub use frame::{Frame, FrameState, ResumeError};
pub use generator::{Generator, Sentinel};
pub use handle::FrameHandle;
pub use iter::Iter;
pub use produce::Producer;
pub use step::Step;
