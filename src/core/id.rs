//! Identifier generation for newly created entities

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces a fresh, never reused identifier on each call
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random 32-character lowercase hex identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Predictable identifiers (`{prefix}{n}`), for tests and fixtures
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}
