//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Install `env_logger` once; honours `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Resource that counts how many times it has been dropped.
///
/// Clones share the counter but are not counted separately; every
/// `Tracked` created with [`Tracked::new`] must be dropped exactly once.
#[derive(Debug)]
pub struct Tracked {
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    pub fn new(drops: &Rc<Cell<usize>>) -> Self {
        Self {
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Move-only element type: neither `Copy` nor `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct Token(pub Box<u32>);

impl Token {
    pub fn new(value: u32) -> Self {
        Self(Box::new(value))
    }

    pub fn value(&self) -> u32 {
        *self.0
    }
}
