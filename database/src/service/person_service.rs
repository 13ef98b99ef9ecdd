use strum_macros::{AsRefStr, EnumString};

use crate::{
    consts::consts::PersonId,
    model::person::Person,
    persistence::storage::{PersonStore, StorageEngine, StoreError, StoreResult},
    validation::{PersonValidator, Validator},
};

/// Outcome of a create or edit form submission
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    /// Validation passed and the store was written once
    Saved(PersonId),
    /// Validation failed, sorted messages, nothing was written
    Rejected(Vec<String>),
}

/// The `command` field of the delete confirmation form. Anything other than
/// `Delete` cancels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum DeleteCommand {
    Delete,
    Cancel,
}

impl DeleteCommand {
    pub fn from_form(command: &str) -> Self {
        command.parse().unwrap_or(DeleteCommand::Cancel)
    }
}

/// Person operations, composed from a store and a validator at startup
pub struct PersonService<S = StorageEngine, V = PersonValidator> {
    store: S,
    validator: V,
}

impl<S, V> PersonService<S, V>
where
    S: PersonStore,
    V: Validator<Person>,
{
    pub fn new(store: S, validator: V) -> Self {
        Self { store, validator }
    }

    pub async fn list_people(&self) -> StoreResult<Vec<Person>> {
        self.store.list_people().await
    }

    pub async fn read_person(&self, id: PersonId) -> StoreResult<Person> {
        self.store.read_person(id).await
    }

    pub async fn create_person(&self, person: &Person) -> StoreResult<PersonId> {
        let id = self.store.create_person(person).await?;
        log::info!("Created person [PersonId: {}]", id);
        Ok(id)
    }

    pub async fn update_person(&self, person: &Person) -> StoreResult<()> {
        self.store.update_person(person).await?;
        if let Some(id) = person.person_id {
            log::info!("Updated person [PersonId: {}]", id);
        }
        Ok(())
    }

    pub async fn delete_person(&self, id: PersonId) -> StoreResult<()> {
        let deleted = self.store.delete_person(id).await?;
        log::info!("Deleted person [PersonId: {}, Rows: {}]", id, deleted);
        Ok(())
    }

    pub fn validate_person(&self, person: &Person) -> Vec<String> {
        self.validator.validate(person)
    }

    /// Validates, then creates only when there are no errors
    pub async fn submit_create(&self, person: &Person) -> StoreResult<Submission> {
        let errors = self.validate_person(person);
        if !errors.is_empty() {
            log::debug!("Rejected create: {:?}", errors);
            return Ok(Submission::Rejected(errors));
        }

        Ok(Submission::Saved(self.create_person(person).await?))
    }

    /// Validates, then updates only when there are no errors
    pub async fn submit_update(&self, person: &Person) -> StoreResult<Submission> {
        let errors = self.validate_person(person);
        if !errors.is_empty() {
            log::debug!("Rejected update: {:?}", errors);
            return Ok(Submission::Rejected(errors));
        }

        let id = person.person_id.ok_or(StoreError::MissingId)?;

        self.update_person(person).await?;

        Ok(Submission::Saved(id))
    }

    /// Deletes only when the form carried the `Delete` command
    pub async fn confirm_delete(&self, command: &str, id: PersonId) -> StoreResult<DeleteCommand> {
        let command = DeleteCommand::from_form(command);

        match command {
            DeleteCommand::Delete => self.delete_person(id).await?,
            DeleteCommand::Cancel => log::debug!("Cancelled delete [PersonId: {}]", id),
        }

        Ok(command)
    }
}
