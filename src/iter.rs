//! Iterator adapter for generators.
//!
//! [`Iter`] lets anything written against [`Iterator`] (filters, maps,
//! `take`, `collect`, `for` loops) consume a [`Generator`]. Each item is
//! moved out of the frame, so element types need not be `Clone`.
//!
//! The adapter is lazy about advancing: the resume that replaces an item
//! happens when the *next* item is requested, not when the current one is
//! handed out. Pulling `k` items therefore costs exactly `k` resumes, and
//! `take(k)` never runs the producer past its `k`-th yield.
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let naturals = successors(Some(0_u64), |n| Some(n + 1)).into_generator();
//! let firsts: Vec<_> = naturals.iter().take(5).collect();
//! assert_eq!(firsts, vec![0, 1, 2, 3, 4]);
//! ```

use std::iter::FusedIterator;

use crate::{cursor::Cursor, generator::Generator};

/// Iterator over the remaining values of a [`Generator`].
///
/// Shares the generator's frame, like every other handle to it.
#[derive(Debug)]
pub struct Iter<T> {
    state: IterState<T>,
}

#[derive(Debug)]
enum IterState<T> {
    Unstarted(Generator<T>),
    Active(Cursor<T>),
}

impl<T> Iter<T> {
    pub fn new(generator: Generator<T>) -> Self {
        Self {
            state: IterState::Unstarted(generator),
        }
    }

    /// `true` once the underlying sequence has ended.
    pub fn is_complete(&self) -> bool {
        match &self.state {
            IterState::Unstarted(generator) => generator.is_terminated(),
            IterState::Active(cursor) => cursor.is_end(),
        }
    }

    fn cursor(&mut self) -> &mut Cursor<T> {
        match &mut self.state {
            IterState::Unstarted(generator) => {
                let cursor = generator.begin();
                self.state = IterState::Active(cursor);
            }
            IterState::Active(cursor) => {
                if !cursor.is_end() {
                    cursor.advance();
                }
            }
        }
        match &mut self.state {
            IterState::Active(cursor) => cursor,
            IterState::Unstarted(_) => unreachable!("iterator state was just activated"),
        }
    }
}

impl<T> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let cursor = self.cursor();
        if cursor.is_end() {
            None
        } else {
            Some(cursor.take())
        }
    }
}

impl<T> FusedIterator for Iter<T> {}
