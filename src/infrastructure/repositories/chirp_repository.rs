//! Chirp Repository Implementation
//!
//! PostgreSQL implementation of the ChirpRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Chirp, ChirpQuery, ChirpRepository, SortOrder};
use crate::shared::error::AppError;

/// Internal row type for chirp queries.
#[derive(Debug, sqlx::FromRow)]
struct ChirpRow {
    id: Uuid,
    body: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ChirpRow {
    fn into_chirp(self) -> Chirp {
        Chirp {
            id: self.id,
            body: self.body,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Listing query, ordered by insertion through the `seq` column.
///
/// Timestamps can tie within one clock tick and ids are random, so neither
/// gives insertion order on its own.
fn list_query(order: SortOrder) -> String {
    format!(
        r#"
        SELECT id, body, user_id, created_at, updated_at
        FROM chirps
        WHERE ($1::uuid IS NULL OR user_id = $1)
        ORDER BY seq {}
        "#,
        order.as_sql()
    )
}

/// PostgreSQL chirp repository implementation.
#[derive(Clone)]
pub struct PgChirpRepository {
    pool: PgPool,
}

impl PgChirpRepository {
    /// Creates a new PgChirpRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChirpRepository for PgChirpRepository {
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp, AppError> {
        let chirp = Chirp::new(body, user_id);

        let row = sqlx::query_as::<_, ChirpRow>(
            r#"
            INSERT INTO chirps (id, body, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, body, user_id, created_at, updated_at
            "#,
        )
        .bind(chirp.id)
        .bind(&chirp.body)
        .bind(chirp.user_id)
        .bind(chirp.created_at)
        .bind(chirp.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::BadRequest("Author does not exist".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_chirp())
    }

    async fn find_all(&self, query: &ChirpQuery) -> Result<Vec<Chirp>, AppError> {
        let sql = list_query(query.order);

        let rows = sqlx::query_as::<_, ChirpRow>(&sql)
            .bind(query.author_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ChirpRow::into_chirp).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Chirp, AppError> {
        let row = sqlx::query_as::<_, ChirpRow>(
            r#"
            SELECT id, body, user_id, created_at, updated_at
            FROM chirps
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Chirp not found".to_string()))?;

        Ok(row.into_chirp())
    }
}
