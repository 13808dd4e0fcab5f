use async_trait::async_trait;
use sqlx::SqlitePool;

use super::expect_affected;
use crate::models::{Cleaner, CreateCleaner};
use crate::store::{CleanerStore, StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct SqliteCleanerStore {
    pool: SqlitePool,
}

impl SqliteCleanerStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CleanerStore for SqliteCleanerStore {
    async fn create(&self, cleaner: &CreateCleaner) -> StoreResult<Cleaner> {
        let cleaner = sqlx::query_as::<_, Cleaner>(
            "INSERT INTO cleaners (name, surname) VALUES (?, ?) RETURNING id, name, surname",
        )
        .bind(&cleaner.name)
        .bind(&cleaner.surname)
        .fetch_one(&self.pool)
        .await?;

        Ok(cleaner)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Cleaner> {
        sqlx::query_as::<_, Cleaner>("SELECT id, name, surname FROM cleaners WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> StoreResult<Vec<Cleaner>> {
        let cleaners =
            sqlx::query_as::<_, Cleaner>("SELECT id, name, surname FROM cleaners ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(cleaners)
    }

    async fn update(&self, cleaner: &Cleaner) -> StoreResult<()> {
        let result = sqlx::query("UPDATE cleaners SET name = ?, surname = ? WHERE id = ?")
            .bind(&cleaner.name)
            .bind(&cleaner.surname)
            .bind(cleaner.id)
            .execute(&self.pool)
            .await?;
        expect_affected(result)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM cleaners WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        expect_affected(result)
    }
}
