use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::traits::Repository;
use crate::core::Result;
use crate::modules::surveys::models::Survey;

/// MySQL-backed survey store
///
/// Expects a `surveys` table with an auto-increment `id` column and
/// `first_name`, `last_name`, `email` text columns.
#[derive(Clone)]
pub struct MySqlSurveyRepository {
    pool: MySqlPool,
}

impl MySqlSurveyRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Survey, i64> for MySqlSurveyRepository {
    async fn save(&self, entity: Survey) -> Result<Survey> {
        match entity.id {
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO surveys (first_name, last_name, email)
                    VALUES (?, ?, ?)
                    "#,
                )
                .bind(&entity.first_name)
                .bind(&entity.last_name)
                .bind(&entity.email)
                .execute(&self.pool)
                .await?;

                Ok(Survey {
                    id: Some(result.last_insert_id() as i64),
                    ..entity
                })
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE surveys
                    SET first_name = ?, last_name = ?, email = ?
                    WHERE id = ?
                    "#,
                )
                .bind(&entity.first_name)
                .bind(&entity.last_name)
                .bind(&entity.email)
                .bind(id)
                .execute(&self.pool)
                .await?;

                Ok(entity)
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Survey>> {
        let survey = sqlx::query_as::<_, Survey>(
            r#"
            SELECT id, first_name, last_name, email
            FROM surveys
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(survey)
    }

    async fn find_all(&self) -> Result<Vec<Survey>> {
        let surveys = sqlx::query_as::<_, Survey>(
            r#"
            SELECT id, first_name, last_name, email
            FROM surveys
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(surveys)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        // Unknown ids fall through as a no-op; callers get no row count
        sqlx::query("DELETE FROM surveys WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
