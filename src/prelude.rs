//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Cursor, Generator, Producer, Sentinel, Step};

// Producers
pub use crate::build::{from_async, from_fn, from_iter, once, repeat_with, successors, Co};
