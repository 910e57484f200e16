use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::log::errors::LogRepositoryError;
use crate::domain::log::ports::LogErrorRepository;

pub struct PostgresLogErrorRepository {
    pool: PgPool,
}

impl PostgresLogErrorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogErrorRepository for PostgresLogErrorRepository {
    async fn log_error(&self, trace: &str) -> Result<(), LogRepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO errors (id, stack, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(trace)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| LogRepositoryError::PersistFailed(e.to_string()))?;

        Ok(())
    }
}
