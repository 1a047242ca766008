//! Storage implementations for resource collections

pub mod in_memory;

pub use in_memory::InMemoryStore;
