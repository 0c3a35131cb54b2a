use crate::db::models::{Person, PersonInput};
use crate::db::schema::SQLITE_INIT;
use crate::error::PeopleError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Open the pool for `database_url` and make sure the schema exists.
pub async fn connect(database_url: &str) -> Result<PeopleStore, PeopleError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    let store = PeopleStore::new(pool);
    store.init_schema().await?;
    info!(database_url = %database_url, "people store ready");
    Ok(store)
}

#[derive(Clone)]
pub struct PeopleStore {
    pool: SqlitePool,
}

impl PeopleStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), PeopleError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// All rows in storage order. Fails as a whole if any row does not decode.
    pub async fn list(&self) -> Result<Vec<Person>, PeopleError> {
        let people = sqlx::query_as::<_, Person>("SELECT id, name, email FROM people")
            .fetch_all(&self.pool)
            .await?;
        Ok(people)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Person, PeopleError> {
        sqlx::query_as::<_, Person>("SELECT id, name, email FROM people WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(PeopleError::NotFound)
    }

    /// Insert a new row and return it with the id storage assigned.
    pub async fn insert(&self, input: PersonInput) -> Result<Person, PeopleError> {
        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO people (name, email) VALUES (?, ?) RETURNING id")
                .bind(input.name())
                .bind(input.email())
                .fetch_one(&self.pool)
                .await?;
        Ok(input.into_person(id))
    }

    /// Overwrite name and email by id. Returns the number of rows changed.
    pub async fn update_by_id(&self, id: i64, input: &PersonInput) -> Result<u64, PeopleError> {
        let result = sqlx::query("UPDATE people SET name = ?, email = ? WHERE id = ?")
            .bind(input.name())
            .bind(input.email())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete by id. Returns the number of rows removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, PeopleError> {
        let result = sqlx::query("DELETE FROM people WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Release every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
