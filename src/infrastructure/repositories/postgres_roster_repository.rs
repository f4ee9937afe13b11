use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::domain::group::{Group, GroupName};
use crate::domain::person::{Person, PersonName, Team};
use crate::domain::repositories::{GroupRepository, RosterRepository, StorageError};

const CREATE_GROUPS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS roster_groups (
        name TEXT PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const CREATE_DOCUMENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS roster_documents (
        group_name TEXT PRIMARY KEY,
        people JSONB NOT NULL DEFAULT '[]'::jsonb
    )
"#;

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Backend(err.to_string())
    }
}

/// PostgreSQL implementation of RosterRepository and GroupRepository
///
/// Each group's roster is a single JSONB document keyed by the group name,
/// so the store stays a document store addressed by group. Mutations lock
/// the document row for the duration of a transaction.
pub struct PostgresRosterRepository {
    pool: PgPool,
}

impl PostgresRosterRepository {
    /// Creates a new PostgresRosterRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the roster tables if they do not exist yet
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_GROUPS_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_DOCUMENTS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn load_roster(&self, group: &GroupName) -> Result<Vec<Person>, StorageError> {
        let row = sqlx::query("SELECT people FROM roster_documents WHERE group_name = $1")
            .bind(group.as_str())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => decode_people(&row),
            None => Ok(Vec::new()),
        }
    }

    /// Locks the group's document row, creating it first when missing
    async fn lock_roster(
        tx: &mut Transaction<'_, Postgres>,
        group: &GroupName,
    ) -> Result<Vec<Person>, StorageError> {
        sqlx::query(
            r#"
            INSERT INTO roster_documents (group_name, people)
            VALUES ($1, '[]'::jsonb)
            ON CONFLICT (group_name) DO NOTHING
            "#,
        )
        .bind(group.as_str())
        .execute(&mut **tx)
        .await?;

        let row = sqlx::query(
            "SELECT people FROM roster_documents WHERE group_name = $1 FOR UPDATE",
        )
        .bind(group.as_str())
        .fetch_one(&mut **tx)
        .await?;

        decode_people(&row)
    }

    async fn store_roster(
        tx: &mut Transaction<'_, Postgres>,
        group: &GroupName,
        people: Vec<Person>,
    ) -> Result<(), StorageError> {
        sqlx::query("UPDATE roster_documents SET people = $2 WHERE group_name = $1")
            .bind(group.as_str())
            .bind(Json(people))
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}

fn decode_people(row: &PgRow) -> Result<Vec<Person>, StorageError> {
    let document: serde_json::Value = row.try_get("people")?;
    Ok(serde_json::from_value(document)?)
}

#[async_trait]
impl RosterRepository for PostgresRosterRepository {
    async fn add_person(&self, group: &GroupName, person: &Person) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        let mut people = Self::lock_roster(&mut tx, group).await?;

        if people.iter().any(|existing| existing.name == person.name) {
            return Err(StorageError::DuplicateName {
                name: person.name.to_string(),
            });
        }

        people.push(person.clone());
        Self::store_roster(&mut tx, group, people).await?;
        tx.commit().await?;

        Ok(())
    }

    async fn list_by_group(&self, group: &GroupName) -> Result<Vec<Person>, StorageError> {
        self.load_roster(group).await
    }

    async fn list_by_group_and_team(
        &self,
        group: &GroupName,
        team: Team,
    ) -> Result<Vec<Person>, StorageError> {
        let people = self.load_roster(group).await?;
        Ok(people.into_iter().filter(|p| p.is_on(team)).collect())
    }

    async fn remove_person(
        &self,
        group: &GroupName,
        name: &PersonName,
    ) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        let mut people = Self::lock_roster(&mut tx, group).await?;

        people.retain(|person| &person.name != name);
        Self::store_roster(&mut tx, group, people).await?;
        tx.commit().await?;

        Ok(())
    }

    async fn remove_group(&self, group: &GroupName) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM roster_documents WHERE group_name = $1")
            .bind(group.as_str())
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM roster_groups WHERE name = $1")
            .bind(group.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl GroupRepository for PostgresRosterRepository {
    async fn create(&self, group: &Group) -> Result<(), StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO roster_groups (name, created_at)
            VALUES ($1, $2)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(group.name().as_str())
        .bind(group.created_at())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::DuplicateGroup {
                name: group.name().to_string(),
            });
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Group>, StorageError> {
        let rows =
            sqlx::query("SELECT name, created_at FROM roster_groups ORDER BY created_at, name")
                .fetch_all(&self.pool)
                .await?;

        rows.iter()
            .map(|row| -> Result<Group, StorageError> {
                let name: String = row.try_get("name")?;
                let created_at: DateTime<Utc> = row.try_get("created_at")?;
                let name = GroupName::new(&name)
                    .map_err(|e| StorageError::Corrupt(format!("group {:?}: {}", name, e)))?;
                Ok(Group::from_persistence(name, created_at))
            })
            .collect()
    }
}
