use std::sync::Arc;

use crate::core::error::AppError;
use crate::core::traits::Repository;
use crate::modules::surveys::models::Survey;

/// Service for survey record operations
///
/// Mediates between the HTTP layer and the survey store. Holds no state of
/// its own; persistence mechanics are delegated entirely to the injected
/// store and store failures propagate to the caller untranslated.
pub struct SurveyService {
    store: Arc<dyn Repository<Survey, i64>>,
}

impl SurveyService {
    pub fn new(store: Arc<dyn Repository<Survey, i64>>) -> Self {
        Self { store }
    }

    /// Create a new survey record
    ///
    /// The record is handed to the store unchanged; the returned record is
    /// exactly what the store returned, identifier included.
    pub async fn create_survey(&self, survey: Survey) -> Result<Survey, AppError> {
        let created = self.store.save(survey).await?;

        tracing::info!(id = ?created.id, "Survey created");

        Ok(created)
    }

    /// Update an existing survey record
    ///
    /// Copies `first_name`, `last_name` and `email` from the input onto the
    /// record stored under `id` and persists the result. The input's own id
    /// field, if any, is ignored; the returned record keeps `id`.
    ///
    /// # Errors
    /// * `AppError::NotFound` - when `id` does not resolve to a record
    pub async fn update_survey(&self, survey: Survey, id: i64) -> Result<Survey, AppError> {
        let mut existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Survey Not Found: {}", id)))?;

        existing.first_name = survey.first_name;
        existing.last_name = survey.last_name;
        existing.email = survey.email;

        let updated = self.store.save(existing).await?;

        tracing::info!(id, "Survey updated");

        Ok(updated)
    }

    /// List every survey record, in the store's natural order
    pub async fn list_surveys(&self) -> Result<Vec<Survey>, AppError> {
        self.store.find_all().await
    }

    /// Fetch a survey record by id
    ///
    /// A missing record is a normal outcome here, not an error; unlike
    /// `update_survey` this never fails on an unknown id.
    pub async fn get_survey(&self, id: i64) -> Result<Option<Survey>, AppError> {
        self.store.find_by_id(id).await
    }

    /// Delete a survey record by id
    ///
    /// No existence check is made beforehand; an unknown id is handled by
    /// whatever the store does on its own.
    pub async fn delete_survey(&self, id: i64) -> Result<(), AppError> {
        self.store.delete_by_id(id).await?;

        tracing::info!(id, "Survey deleted");

        Ok(())
    }
}
