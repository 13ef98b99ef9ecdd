use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use crate::{
    consts::consts::{PersonId, START_AT_ID},
    model::person::Person,
};

use super::{PersonStore, StoreError, StoreResult};

struct MemoryTable {
    people: BTreeMap<PersonId, Person>,
    /// Only ever increases, so ids of deleted rows are never handed out again.
    /// `None` once `i32::MAX` has been assigned.
    next_id: Option<PersonId>,
}

/// Keeps the person table in process memory, used for local runs and tests
pub struct MemoryPersonStore {
    table: Mutex<MemoryTable>,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(MemoryTable {
                people: BTreeMap::new(),
                next_id: Some(START_AT_ID),
            }),
        }
    }

    fn table(&self) -> StoreResult<MutexGuard<'_, MemoryTable>> {
        self.table.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for MemoryPersonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonStore for MemoryPersonStore {
    #[tracing::instrument(skip(self))]
    async fn list_people(&self) -> StoreResult<Vec<Person>> {
        let table = self.table()?;

        let mut people: Vec<Person> = table.people.values().cloned().collect();

        people.sort_by(|a, b| {
            (&a.first_name, &a.last_name, a.person_id).cmp(&(
                &b.first_name,
                &b.last_name,
                b.person_id,
            ))
        });

        Ok(people)
    }

    #[tracing::instrument(skip(self))]
    async fn create_person(&self, person: &Person) -> StoreResult<PersonId> {
        let mut table = self.table()?;

        let id = table.next_id.ok_or(StoreError::IdsExhausted)?;
        table.next_id = id.increment();

        table.people.insert(id, person.clone().with_id(id));

        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    async fn read_person(&self, id: PersonId) -> StoreResult<Person> {
        self.table()?
            .people
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    #[tracing::instrument(skip(self))]
    async fn update_person(&self, person: &Person) -> StoreResult<()> {
        let id = person.person_id.ok_or(StoreError::MissingId)?;

        let mut table = self.table()?;

        match table.people.get_mut(&id) {
            Some(row) => {
                *row = person.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete_person(&self, id: PersonId) -> StoreResult<u64> {
        let removed = self.table()?.people.remove(&id);

        Ok(removed.map_or(0, |_| 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(first_name: &str, last_name: &str) -> Person {
        Person::new(
            first_name.to_string(),
            last_name.to_string(),
            format!("{}@example.com", first_name.to_lowercase()),
        )
    }

    mod create {
        use super::*;

        #[tokio::test]
        async fn create_then_read_returns_identical_fields() {
            // Given an empty store
            let store = MemoryPersonStore::new();

            // When we create a person
            let id = store
                .create_person(&Person::new_test())
                .await
                .expect("should create");

            // Then reading it back yields the same attributes with the assigned id
            let read = store.read_person(id).await.expect("should read");

            assert_eq!(read, Person::new_test().with_id(id));
        }

        #[tokio::test]
        async fn ids_start_at_one_and_increase() {
            let store = MemoryPersonStore::new();

            let first = store.create_person(&person("A", "A")).await.unwrap();
            let second = store.create_person(&person("B", "B")).await.unwrap();

            assert_eq!(first, PersonId(1));
            assert_eq!(second, PersonId(2));
        }

        #[tokio::test]
        async fn supplied_id_is_ignored() {
            let store = MemoryPersonStore::new();

            let id = store
                .create_person(&Person::new_test().with_id(PersonId(42)))
                .await
                .unwrap();

            assert_eq!(id, PersonId(1));
            assert!(matches!(
                store.read_person(PersonId(42)).await,
                Err(StoreError::NotFound(PersonId(42)))
            ));
        }

        #[tokio::test]
        async fn last_id_is_assigned_then_creates_fail() {
            // Given a store about to hand out the largest id
            let store = MemoryPersonStore::new();
            store.table.lock().unwrap().next_id = Some(PersonId(i32::MAX));

            // When we create twice
            let last = store.create_person(&person("A", "A")).await;
            let overflow = store.create_person(&person("B", "B")).await;

            // Then the first gets i32::MAX and the second is refused without panicking
            assert_eq!(last.unwrap(), PersonId(i32::MAX));
            assert!(matches!(overflow, Err(StoreError::IdsExhausted)));
            assert_eq!(store.list_people().await.unwrap().len(), 1);
        }

        #[tokio::test]
        async fn ids_are_not_reused_after_delete() {
            let store = MemoryPersonStore::new();

            let first = store.create_person(&person("A", "A")).await.unwrap();
            store.delete_person(first).await.unwrap();

            let second = store.create_person(&person("B", "B")).await.unwrap();

            assert_ne!(first, second);
        }
    }

    mod list {
        use super::*;

        #[tokio::test]
        async fn orders_by_first_name() {
            let store = MemoryPersonStore::new();

            store.create_person(&person("Bob", "Smith")).await.unwrap();
            store.create_person(&person("Alice", "Jones")).await.unwrap();

            let names: Vec<String> = store
                .list_people()
                .await
                .unwrap()
                .into_iter()
                .map(|p| p.first_name)
                .collect();

            assert_eq!(names, vec!["Alice".to_string(), "Bob".to_string()]);
        }

        #[tokio::test]
        async fn ties_break_on_last_name_then_id() {
            let store = MemoryPersonStore::new();

            let smith_one = store.create_person(&person("Ann", "Smith")).await.unwrap();
            let jones = store.create_person(&person("Ann", "Jones")).await.unwrap();
            let smith_two = store.create_person(&person("Ann", "Smith")).await.unwrap();

            let ids: Vec<Option<PersonId>> = store
                .list_people()
                .await
                .unwrap()
                .into_iter()
                .map(|p| p.person_id)
                .collect();

            assert_eq!(ids, vec![Some(jones), Some(smith_one), Some(smith_two)]);
        }

        #[tokio::test]
        async fn empty_store_lists_nothing() {
            let store = MemoryPersonStore::new();

            assert!(store.list_people().await.unwrap().is_empty());
        }
    }

    mod update {
        use super::*;

        #[tokio::test]
        async fn overwrites_all_fields() {
            let store = MemoryPersonStore::new();
            let id = store.create_person(&Person::new_test()).await.unwrap();

            let changed = person("John", "Roe")
                .with_address(
                    "2 Side Street".to_string(),
                    "Denver".to_string(),
                    "CO".to_string(),
                    "80202".to_string(),
                )
                .with_id(id);

            store.update_person(&changed).await.expect("should update");

            assert_eq!(store.read_person(id).await.unwrap(), changed);
        }

        #[tokio::test]
        async fn missing_row_is_not_found() {
            let store = MemoryPersonStore::new();

            let result = store
                .update_person(&Person::new_test().with_id(PersonId(9)))
                .await;

            assert!(matches!(result, Err(StoreError::NotFound(PersonId(9)))));
        }

        #[tokio::test]
        async fn person_without_id_is_rejected() {
            let store = MemoryPersonStore::new();

            let result = store.update_person(&Person::new_test()).await;

            assert!(matches!(result, Err(StoreError::MissingId)));
        }
    }

    mod delete {
        use super::*;

        #[tokio::test]
        async fn deleted_person_is_not_found() {
            // Given a stored person
            let store = MemoryPersonStore::new();
            let id = store.create_person(&Person::new_test()).await.unwrap();

            // When we delete it
            let affected = store.delete_person(id).await.unwrap();

            // Then reading it fails
            assert_eq!(affected, 1);
            assert!(matches!(
                store.read_person(id).await,
                Err(StoreError::NotFound(_))
            ));
        }

        #[tokio::test]
        async fn deleting_missing_id_affects_nothing() {
            let store = MemoryPersonStore::new();

            let affected = store
                .delete_person(PersonId(5))
                .await
                .expect("should not error");

            assert_eq!(affected, 0);
        }
    }
}
