// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the repository capability as a trait over any Entity.
//
// Responsibilities
// - Keep callers independent of the backing store by coding against the trait.
// - Absent identities are not errors: lookups return None and deletes are no-ops.
//
// Boundaries
// - No concrete storage here. Adapters implement this trait in the adapters layer.
//
// Testing guidance
// - Use the in memory implementation for tests and local development.

use crate::core::entity::Entity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    #[error("identity collision: {id} is already stored")]
    IdentityCollision { id: String },
}

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Inserts a new entity or updates an attached one.
    ///
    /// Returns `true` when the entity was new and got an identity assigned,
    /// `false` when an existing identity was saved over.
    async fn save(&self, entity: &mut E) -> Result<bool, RepositoryError>;

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, RepositoryError>;

    /// All stored entities in insertion order.
    async fn find_all(&self) -> Result<Vec<E>, RepositoryError>;

    async fn delete_by_id(&self, id: &E::Id) -> Result<(), RepositoryError>;

    async fn delete_all(&self) -> Result<(), RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;

    async fn exists_by_id(&self, id: &E::Id) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn save_all(&self, entities: &mut [E]) -> Result<Vec<bool>, RepositoryError> {
        let mut inserted = Vec::with_capacity(entities.len());
        for entity in entities.iter_mut() {
            inserted.push(self.save(entity).await?);
        }
        Ok(inserted)
    }

    /// Entities for the given identities in the order asked for; absent ones are skipped.
    async fn find_all_by_id(&self, ids: &[E::Id]) -> Result<Vec<E>, RepositoryError> {
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(entity) = self.find_by_id(id).await? {
                found.push(entity);
            }
        }
        Ok(found)
    }

    async fn delete(&self, entity: &E) -> Result<(), RepositoryError> {
        match entity.id() {
            Some(id) => self.delete_by_id(&id).await,
            None => Ok(()),
        }
    }
}
