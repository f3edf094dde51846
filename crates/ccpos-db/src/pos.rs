//! Postgres-backed `PosStore`.
//!
//! The `pos` table carries the `UNIQUE (name)` constraint that backs the
//! pipeline's name-uniqueness guarantee: a colliding write fails atomically
//! at commit time and surfaces as [`StoreError::DuplicateName`]. Ids and
//! timestamps are assigned by the database, never by callers.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use ccpos_core::{CampusType, Pos, PosType};
use ccpos_import::{PosStore, StoreError};

const POS_COLUMNS: &str = "id, name, description, pos_type, campus, street, house_number, \
                           postal_code, city, created_at, updated_at";

/// A row from the `pos` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PosRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub pos_type: String,
    pub campus: String,
    pub street: String,
    pub house_number: String,
    pub postal_code: i32,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PosRow> for Pos {
    type Error = StoreError;

    fn try_from(row: PosRow) -> Result<Self, StoreError> {
        let pos_type = PosType::from_str(&row.pos_type)
            .map_err(|e| StoreError::Backend(Box::new(e)))?;
        let campus = CampusType::from_str(&row.campus)
            .map_err(|e| StoreError::Backend(Box::new(e)))?;

        Ok(Pos {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            pos_type,
            campus,
            street: row.street,
            house_number: row.house_number,
            postal_code: row.postal_code,
            city: row.city,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        })
    }
}

/// `PosStore` implementation over a Postgres pool.
#[derive(Clone)]
pub struct PgPosStore {
    pool: PgPool,
}

impl PgPosStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PosStore for PgPosStore {
    async fn upsert(&self, pos: Pos) -> Result<Pos, StoreError> {
        let row = match pos.id {
            None => {
                let insert = format!(
                    "INSERT INTO pos \
                         (name, description, pos_type, campus, street, house_number, postal_code, city) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                     RETURNING {POS_COLUMNS}"
                );
                sqlx::query_as::<_, PosRow>(&insert)
                    .bind(&pos.name)
                    .bind(&pos.description)
                    .bind(pos.pos_type.as_str())
                    .bind(pos.campus.as_str())
                    .bind(&pos.street)
                    .bind(&pos.house_number)
                    .bind(pos.postal_code)
                    .bind(&pos.city)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| map_write_error(e, &pos.name))?
            }
            Some(id) => {
                let update = format!(
                    "UPDATE pos \
                     SET name = $1, description = $2, pos_type = $3, campus = $4, street = $5, \
                         house_number = $6, postal_code = $7, city = $8, updated_at = NOW() \
                     WHERE id = $9 \
                     RETURNING {POS_COLUMNS}"
                );
                sqlx::query_as::<_, PosRow>(&update)
                    .bind(&pos.name)
                    .bind(&pos.description)
                    .bind(pos.pos_type.as_str())
                    .bind(pos.campus.as_str())
                    .bind(&pos.street)
                    .bind(&pos.house_number)
                    .bind(pos.postal_code)
                    .bind(&pos.city)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(|e| map_write_error(e, &pos.name))?
                    .ok_or(StoreError::NotFound(id))?
            }
        };

        row.try_into()
    }

    async fn get_by_id(&self, id: i64) -> Result<Pos, StoreError> {
        let query = format!("SELECT {POS_COLUMNS} FROM pos WHERE id = $1");
        let row = sqlx::query_as::<_, PosRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(Box::new(e)))?;

        row.ok_or(StoreError::NotFound(id))?.try_into()
    }

    async fn get_all(&self) -> Result<Vec<Pos>, StoreError> {
        let query = format!("SELECT {POS_COLUMNS} FROM pos ORDER BY name");
        let rows = sqlx::query_as::<_, PosRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(Box::new(e)))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM pos")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(Box::new(e)))?;
        Ok(())
    }
}

/// Maps a write failure, turning a unique violation on the name constraint
/// into the typed duplicate error the pipeline propagates verbatim.
fn map_write_error(err: sqlx::Error, name: &str) -> StoreError {
    if let sqlx::Error::Database(ref db) = err {
        if db.is_unique_violation() {
            return StoreError::DuplicateName(name.to_owned());
        }
    }
    StoreError::Backend(Box::new(err))
}
