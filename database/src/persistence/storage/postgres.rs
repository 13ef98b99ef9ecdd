use tokio_postgres::{Client, NoTls, Row};

use crate::{consts::consts::PersonId, model::person::Person};

use super::{PersonStore, StoreError, StoreResult};

const SQL_CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS person (
        person_id      SERIAL PRIMARY KEY,
        first_name     VARCHAR(50) NOT NULL,
        last_name      VARCHAR(50) NOT NULL,
        email_address  VARCHAR(50) NOT NULL,
        street_address VARCHAR(100),
        city           VARCHAR(50),
        state          VARCHAR(2),
        zip_code       VARCHAR(5)
    );
"#;

const SQL_LIST_PEOPLE: &str = r#"
    SELECT person_id, first_name, last_name, email_address, street_address, city, state, zip_code
    FROM person
    ORDER BY first_name, last_name, person_id;
"#;

const SQL_READ_PERSON: &str = r#"
    SELECT person_id, first_name, last_name, email_address, street_address, city, state, zip_code
    FROM person
    WHERE person_id = $1;
"#;

const SQL_CREATE_PERSON: &str = r#"
    INSERT INTO person (first_name, last_name, email_address, street_address, city, state, zip_code)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    RETURNING person_id;
"#;

const SQL_UPDATE_PERSON: &str = r#"
    UPDATE person
    SET (first_name, last_name, email_address, street_address, city, state, zip_code)
      = ($2, $3, $4, $5, $6, $7, $8)
    WHERE person_id = $1;
"#;

const SQL_DELETE_PERSON: &str = r#"
    DELETE FROM person WHERE person_id = $1;
"#;

pub struct PgPersonStore {
    client: Client,
}

impl PgPersonStore {
    /// Connects, spawns the connection task on the current runtime and makes sure
    /// the person table exists
    pub async fn connect(config: &str) -> StoreResult<Self> {
        let (client, connection) = tokio_postgres::connect(config, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("postgres connection error: {}", e);
            }
        });

        client.batch_execute(SQL_CREATE_TABLE).await?;

        Ok(Self { client })
    }
}

/// Nullable columns read back as empty strings
fn text(row: &Row, column: &str) -> StoreResult<String> {
    let value: Option<String> = row.try_get(column)?;
    Ok(value.unwrap_or_default())
}

fn person_from_row(row: &Row) -> StoreResult<Person> {
    let person_id: i32 = row.try_get("person_id")?;

    Ok(Person {
        person_id: Some(PersonId(person_id)),
        first_name: text(row, "first_name")?,
        last_name: text(row, "last_name")?,
        email_address: text(row, "email_address")?,
        street_address: text(row, "street_address")?,
        city: text(row, "city")?,
        state: text(row, "state")?,
        zip_code: text(row, "zip_code")?,
    })
}

impl PersonStore for PgPersonStore {
    #[tracing::instrument(skip(self))]
    async fn list_people(&self) -> StoreResult<Vec<Person>> {
        let rows = self.client.query(SQL_LIST_PEOPLE, &[]).await?;

        rows.iter().map(person_from_row).collect()
    }

    #[tracing::instrument(skip(self))]
    async fn create_person(&self, person: &Person) -> StoreResult<PersonId> {
        let row = self
            .client
            .query_one(
                SQL_CREATE_PERSON,
                &[
                    &person.first_name,
                    &person.last_name,
                    &person.email_address,
                    &person.street_address,
                    &person.city,
                    &person.state,
                    &person.zip_code,
                ],
            )
            .await?;

        Ok(PersonId(row.try_get("person_id")?))
    }

    #[tracing::instrument(skip(self))]
    async fn read_person(&self, id: PersonId) -> StoreResult<Person> {
        match self
            .client
            .query_opt(SQL_READ_PERSON, &[&id.to_number()])
            .await?
        {
            Some(row) => person_from_row(&row),
            None => Err(StoreError::NotFound(id)),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn update_person(&self, person: &Person) -> StoreResult<()> {
        let id = person.person_id.ok_or(StoreError::MissingId)?;

        let updated = self
            .client
            .execute(
                SQL_UPDATE_PERSON,
                &[
                    &id.to_number(),
                    &person.first_name,
                    &person.last_name,
                    &person.email_address,
                    &person.street_address,
                    &person.city,
                    &person.state,
                    &person.zip_code,
                ],
            )
            .await?;

        if updated == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_person(&self, id: PersonId) -> StoreResult<u64> {
        Ok(self
            .client
            .execute(SQL_DELETE_PERSON, &[&id.to_number()])
            .await?)
    }
}
