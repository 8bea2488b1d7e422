// In memory implementation of the Repository port.
//
// Purpose
// - Store entities without a database, for tests and local development.
//
// Responsibilities
// - Assign identities on first save and overwrite the stored copy on later saves.
// - Keep insertion order for full scans. An update keeps the slot the entity was inserted in.
// - Never store two entities under the same identity.

use crate::adapters::in_memory::id_generator::{IdGenerator, UuidV7Generator};
use crate::core::entity::Entity;
use crate::core::ports::{Repository, RepositoryError};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

const MAX_ID_DRAWS: usize = 1024;

// Entities keyed by insertion sequence, plus an index from identity to sequence.
struct Slots<E: Entity> {
    entries: BTreeMap<u64, E>,
    positions: HashMap<E::Id, u64>,
    next_slot: u64,
}

impl<E: Entity> Default for Slots<E> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            positions: HashMap::new(),
            next_slot: 0,
        }
    }
}

impl<E: Entity> Slots<E> {
    fn append(&mut self, id: E::Id, entity: E) {
        let slot = self.next_slot;
        self.next_slot += 1;
        self.entries.insert(slot, entity);
        self.positions.insert(id, slot);
    }
}

pub struct InMemoryRepository<E: Entity> {
    slots: RwLock<Slots<E>>,
    id_generator: Box<dyn IdGenerator<E::Id>>,
    is_offline: bool,
}

impl<E> InMemoryRepository<E>
where
    E: Entity,
    E::Id: From<Uuid>,
{
    pub fn new() -> Self {
        Self::with_id_generator(UuidV7Generator)
    }
}

impl<E> Default for InMemoryRepository<E>
where
    E: Entity,
    E::Id: From<Uuid>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn with_id_generator(id_generator: impl IdGenerator<E::Id> + 'static) -> Self {
        Self {
            slots: RwLock::new(Slots::default()),
            id_generator: Box::new(id_generator),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    // Re-attached entities may already hold identities the generator has yet to hand out.
    fn draw_free_id(&self, slots: &Slots<E>) -> Result<E::Id, RepositoryError> {
        let mut id = self.id_generator.next_id();
        let mut draws = 1;
        while slots.positions.contains_key(&id) {
            if draws == MAX_ID_DRAWS {
                warn!(%id, draws, "no free identity left to draw");
                return Err(RepositoryError::IdentityCollision { id: id.to_string() });
            }
            debug!(%id, "generated identity is already stored, drawing again");
            id = self.id_generator.next_id();
            draws += 1;
        }
        Ok(id)
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            warn!("rejected operation on offline repository");
            return Err(RepositoryError::Unavailable(
                "In memory repository offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn save(&self, entity: &mut E) -> Result<bool, RepositoryError> {
        self.ensure_online()?;
        let mut slots = self.slots.write().await;

        let Some(id) = entity.id() else {
            let id = self.draw_free_id(&slots)?;
            entity.assign_id(id.clone());
            slots.append(id.clone(), entity.clone());
            debug!(%id, "inserted entity");
            return Ok(true);
        };

        match slots.positions.get(&id).copied() {
            Some(slot) => {
                slots.entries.insert(slot, entity.clone());
                debug!(%id, slot, "updated entity");
            }
            None => {
                slots.append(id.clone(), entity.clone());
                debug!(%id, "re-attached entity under its existing identity");
            }
        }
        Ok(false)
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, RepositoryError> {
        self.ensure_online()?;
        let slots = self.slots.read().await;
        Ok(slots
            .positions
            .get(id)
            .and_then(|slot| slots.entries.get(slot))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.slots.read().await.entries.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: &E::Id) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut slots = self.slots.write().await;
        if let Some(slot) = slots.positions.remove(id) {
            slots.entries.remove(&slot);
            debug!(%id, "deleted entity");
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut slots = self.slots.write().await;
        let removed = slots.entries.len();
        slots.entries.clear();
        slots.positions.clear();
        debug!(removed, "deleted all entities");
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.ensure_online()?;
        Ok(self.slots.read().await.entries.len() as u64)
    }
}
