#![no_std]

extern crate alloc;

pub mod keyed_store;

pub use keyed_store::{IdSequence, KeyedStore, MemoryStore};
