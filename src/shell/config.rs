// Process configuration for the shell, read from environment variables.
//
// Variables
// - REPOSITORY_ID_STRATEGY: `uuid-v7` (default) or `sequence`.
// - REPOSITORY_SEQUENCE_START: first value handed out by the `sequence` strategy (default 1).
// - RUST_LOG: log filter, read by the telemetry module.

use crate::adapters::in_memory::id_generator::{SequenceIdGenerator, UuidV7Generator};
use crate::adapters::in_memory::in_memory_repository::InMemoryRepository;
use crate::core::entity::Entity;
use thiserror::Error;
use uuid::Uuid;

pub const ID_STRATEGY_VAR: &str = "REPOSITORY_ID_STRATEGY";
pub const SEQUENCE_START_VAR: &str = "REPOSITORY_SEQUENCE_START";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown id strategy {0:?}, expected \"uuid-v7\" or \"sequence\"")]
    UnknownIdStrategy(String),

    #[error("invalid sequence start {0:?}")]
    InvalidSequenceStart(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    UuidV7,
    Sequence { start: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellConfig {
    pub id_strategy: IdStrategy,
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let id_strategy = match lookup(ID_STRATEGY_VAR).as_deref().map(str::trim) {
            None | Some("") | Some("uuid-v7") => IdStrategy::UuidV7,
            Some("sequence") => {
                let start = match lookup(SEQUENCE_START_VAR) {
                    None => 1,
                    Some(raw) => raw
                        .trim()
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidSequenceStart(raw))?,
                };
                IdStrategy::Sequence { start }
            }
            Some(other) => return Err(ConfigError::UnknownIdStrategy(other.to_string())),
        };
        Ok(Self { id_strategy })
    }

    pub fn build_repository<E>(&self) -> InMemoryRepository<E>
    where
        E: Entity,
        E::Id: From<Uuid>,
    {
        match self.id_strategy {
            IdStrategy::UuidV7 => InMemoryRepository::with_id_generator(UuidV7Generator),
            IdStrategy::Sequence { start } => {
                InMemoryRepository::with_id_generator(SequenceIdGenerator::starting_at(start))
            }
        }
    }
}
