use std::sync::Arc;

use validator::Validate;

use crate::error::{Context, ServiceError};
use crate::models::{Cleaner, CreateCleaner, UpdateCleaner};
use crate::store::CleanerStore;

#[derive(Clone)]
pub struct CleanerService {
    cleaners: Arc<dyn CleanerStore>,
}

impl CleanerService {
    pub fn new(cleaners: Arc<dyn CleanerStore>) -> Self {
        Self { cleaners }
    }

    pub async fn create(&self, req: CreateCleaner) -> Result<Cleaner, ServiceError> {
        req.validate()?;
        self.cleaners
            .create(&req)
            .await
            .context("failed to create cleaner")
    }

    pub async fn get(&self, id: i64) -> Result<Cleaner, ServiceError> {
        self.cleaners.get_by_id(id).await.context("cleaner not found")
    }

    pub async fn list(&self) -> Result<Vec<Cleaner>, ServiceError> {
        self.cleaners.list().await.context("failed to get cleaners")
    }

    pub async fn update(&self, id: i64, req: UpdateCleaner) -> Result<Cleaner, ServiceError> {
        let mut cleaner = self.get(id).await?;
        req.validate()?;

        if let Some(name) = req.name {
            cleaner.name = name;
        }
        if let Some(surname) = req.surname {
            cleaner.surname = surname;
        }

        self.cleaners
            .update(&cleaner)
            .await
            .context("failed to update cleaner")?;
        Ok(cleaner)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.cleaners
            .delete(id)
            .await
            .context("failed to delete cleaner")
    }
}
