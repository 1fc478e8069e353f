//! Claimant repository
//!
//! PostgreSQL adapter for the [`ClaimantStore`] port. Queries use the
//! runtime API (`sqlx::query_as`) so the crate builds without a live
//! database; the schema lives in `migrations/`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use domain_claimant::{
    Claimant, ClaimantQuery, ClaimantStore, ClaimantUpdate, NewClaimant, StoreError,
};

use crate::error::DatabaseError;

const SELECT_COLUMNS: &str =
    "id, first_name, last_name, street, city, post_code, ref_no, driving_licence_no, nino, dob";

/// Row shape for the `claimants` table
#[derive(Debug, sqlx::FromRow)]
struct ClaimantRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    street: String,
    city: String,
    post_code: String,
    ref_no: String,
    driving_licence_no: Option<String>,
    nino: Option<String>,
    dob: NaiveDate,
}

impl From<ClaimantRow> for Claimant {
    fn from(row: ClaimantRow) -> Self {
        Claimant {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            street: row.street,
            city: row.city,
            post_code: row.post_code,
            ref_no: row.ref_no,
            driving_licence_no: row.driving_licence_no,
            nino: row.nino,
            dob: row.dob,
        }
    }
}

/// PostgreSQL-backed claimant store
#[derive(Debug, Clone)]
pub struct PostgresClaimantStore {
    pool: PgPool,
}

impl PostgresClaimantStore {
    /// Creates a store over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_optional(
        &self,
        sql: String,
        bind: &str,
    ) -> Result<Option<Claimant>, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimantRow>(&sql)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Claimant::from))
    }
}

#[async_trait]
impl ClaimantStore for PostgresClaimantStore {
    async fn find_all(&self) -> Result<Vec<Claimant>, StoreError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM claimants ORDER BY created_at");
        let rows = sqlx::query_as::<_, ClaimantRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(StoreError::from)?;
        Ok(rows.into_iter().map(Claimant::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Claimant, StoreError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM claimants WHERE id = $1");
        let row = sqlx::query_as::<_, ClaimantRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(StoreError::from)?;
        row.map(Claimant::from)
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn find_one(&self, query: ClaimantQuery) -> Result<Claimant, StoreError> {
        let column = match query {
            ClaimantQuery::RefNo(_) => "ref_no",
            ClaimantQuery::Nino(_) => "nino",
        };
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM claimants WHERE {column} = $1 ORDER BY created_at LIMIT 1"
        );
        let found = self
            .fetch_optional(sql, query.value())
            .await
            .map_err(StoreError::from)?;
        found.ok_or_else(|| StoreError::not_found(query.value()))
    }

    async fn create(&self, claimant: NewClaimant) -> Result<Claimant, StoreError> {
        let sql = format!(
            "INSERT INTO claimants \
             (first_name, last_name, street, city, post_code, ref_no, driving_licence_no, nino, dob) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {SELECT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ClaimantRow>(&sql)
            .bind(&claimant.first_name)
            .bind(&claimant.last_name)
            .bind(&claimant.street)
            .bind(&claimant.city)
            .bind(&claimant.post_code)
            .bind(&claimant.ref_no)
            .bind(&claimant.driving_licence_no)
            .bind(&claimant.nino)
            .bind(claimant.dob)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(StoreError::from)?;
        Ok(row.into())
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        update: ClaimantUpdate,
    ) -> Result<Claimant, StoreError> {
        // Partial merge: COALESCE keeps the stored value for unset fields.
        // ref_no, driving_licence_no, nino, and dob are immutable and never
        // appear in the SET list.
        let sql = format!(
            "UPDATE claimants SET \
             first_name = COALESCE($2, first_name), \
             last_name = COALESCE($3, last_name), \
             street = COALESCE($4, street), \
             city = COALESCE($5, city), \
             post_code = COALESCE($6, post_code) \
             WHERE id = $1 \
             RETURNING {SELECT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ClaimantRow>(&sql)
            .bind(id)
            .bind(&update.first_name)
            .bind(&update.last_name)
            .bind(&update.street)
            .bind(&update.city)
            .bind(&update.post_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(StoreError::from)?;
        row.map(Claimant::from)
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Claimant, StoreError> {
        let sql = format!("DELETE FROM claimants WHERE id = $1 RETURNING {SELECT_COLUMNS}");
        let row = sqlx::query_as::<_, ClaimantRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(StoreError::from)?;
        row.map(Claimant::from)
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(StoreError::from)?;
        Ok(())
    }
}
