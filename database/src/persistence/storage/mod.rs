use thiserror::Error;

use crate::{consts::consts::PersonId, model::person::Person};

use self::{memory::MemoryPersonStore, postgres::PgPersonStore};

use super::options::{DatabaseOptions, StorageEngineKind};

pub mod memory;
pub mod postgres;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Not found, record does not exist: {0}")]
    NotFound(PersonId),

    #[error("Cannot update a person that has no id")]
    MissingId,

    #[error("Postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("In-memory store lock was poisoned")]
    Poisoned,

    #[error("No person ids left to assign")]
    IdsExhausted,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Maps person records to and from rows. Every operation is a single statement.
#[allow(async_fn_in_trait)]
pub trait PersonStore {
    /// All people ordered by first name, last name, then id
    async fn list_people(&self) -> StoreResult<Vec<Person>>;

    /// Stores a new row, ignoring any id on `person`, and returns the assigned id
    async fn create_person(&self, person: &Person) -> StoreResult<PersonId>;

    async fn read_person(&self, id: PersonId) -> StoreResult<Person>;

    /// Overwrites every mutable field of the row matching `person.person_id`
    async fn update_person(&self, person: &Person) -> StoreResult<()>;

    /// Returns the number of rows removed, deleting a missing id is not an error
    async fn delete_person(&self, id: PersonId) -> StoreResult<u64>;
}

/// The engine chosen at startup
pub enum StorageEngine {
    Postgres(PgPersonStore),
    Memory(MemoryPersonStore),
}

impl StorageEngine {
    pub async fn connect(options: &DatabaseOptions) -> StoreResult<Self> {
        match &options.storage_engine {
            StorageEngineKind::Postgres(config) => {
                Ok(StorageEngine::Postgres(PgPersonStore::connect(config).await?))
            }
            StorageEngineKind::Memory => Ok(StorageEngine::Memory(MemoryPersonStore::new())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StorageEngine::Postgres(_) => "postgres",
            StorageEngine::Memory(_) => "memory",
        }
    }
}

// Is there a way to avoid this duplication?
impl PersonStore for StorageEngine {
    async fn list_people(&self) -> StoreResult<Vec<Person>> {
        match self {
            StorageEngine::Postgres(s) => s.list_people().await,
            StorageEngine::Memory(s) => s.list_people().await,
        }
    }

    async fn create_person(&self, person: &Person) -> StoreResult<PersonId> {
        match self {
            StorageEngine::Postgres(s) => s.create_person(person).await,
            StorageEngine::Memory(s) => s.create_person(person).await,
        }
    }

    async fn read_person(&self, id: PersonId) -> StoreResult<Person> {
        match self {
            StorageEngine::Postgres(s) => s.read_person(id).await,
            StorageEngine::Memory(s) => s.read_person(id).await,
        }
    }

    async fn update_person(&self, person: &Person) -> StoreResult<()> {
        match self {
            StorageEngine::Postgres(s) => s.update_person(person).await,
            StorageEngine::Memory(s) => s.update_person(person).await,
        }
    }

    async fn delete_person(&self, id: PersonId) -> StoreResult<u64> {
        match self {
            StorageEngine::Postgres(s) => s.delete_person(id).await,
            StorageEngine::Memory(s) => s.delete_person(id).await,
        }
    }
}
