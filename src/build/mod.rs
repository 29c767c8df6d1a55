//! Building producers from scratch
//!
//! Functions and types for creating the routines a [`Generator`](crate::Generator)
//! drives: step closures, fixed and infinite sequences, adapters over existing
//! iterators, and `async` bodies that yield through a [`Co`] handle.

mod coroutine;
mod func;

pub use coroutine::{from_async, Co, Coroutine, Yield};
pub use func::{
    from_fn, from_iter, once, repeat_with, successors, FromFn, FromIter, Once, RepeatWith,
    Successors,
};
