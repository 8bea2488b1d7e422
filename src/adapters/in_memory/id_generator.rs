// Identity generators used by the in memory repository.
//
// Purpose
// - Produce a fresh identity every time an entity is attached.
//
// Responsibilities
// - UuidV7Generator: time-ordered identities for normal use.
// - SequenceIdGenerator: deterministic identities for reproducible runs and tests.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

pub trait IdGenerator<Id>: Send + Sync {
    fn next_id(&self) -> Id;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl<Id: From<Uuid>> IdGenerator<Id> for UuidV7Generator {
    fn next_id(&self) -> Id {
        Uuid::now_v7().into()
    }
}

/// Hands out `Uuid::from_u128(start)`, `Uuid::from_u128(start + 1)`, and so on.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequenceIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl<Id: From<Uuid>> IdGenerator<Id> for SequenceIdGenerator {
    fn next_id(&self) -> Id {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Uuid::from_u128(u128::from(n)).into()
    }
}
