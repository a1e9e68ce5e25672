//! Adapters for backing stores.

pub mod memory;

pub use memory::MemoryStore;
