use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use proptest::prelude::*;

use surveyhub::core::traits::Repository;
use surveyhub::core::{AppError, Result};
use surveyhub::modules::surveys::models::Survey;
use surveyhub::modules::surveys::services::SurveyService;

/// In-memory survey store for exercising the service without a database
#[derive(Default)]
struct InMemorySurveyStore {
    records: Mutex<HashMap<i64, Survey>>,
    next_id: AtomicI64,
}

#[async_trait]
impl Repository<Survey, i64> for InMemorySurveyStore {
    async fn save(&self, mut entity: Survey) -> Result<Survey> {
        let id = match entity.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
        };
        entity.id = Some(id);
        self.records.lock().unwrap().insert(id, entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Survey>> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Survey>> {
        let records = self.records.lock().unwrap();
        let mut all: Vec<Survey> = records.values().cloned().collect();
        all.sort_by_key(|s| s.id);
        Ok(all)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.records.lock().unwrap().remove(&id);
        Ok(())
    }
}

fn service() -> SurveyService {
    SurveyService::new(Arc::new(InMemorySurveyStore::default()))
}

#[tokio::test]
async fn test_create_assigns_id_and_keeps_fields() {
    let service = service();

    let created = service
        .create_survey(Survey::new("Jane", "Doe", "jane@x.com"))
        .await
        .unwrap();

    assert!(created.id.is_some());
    assert_eq!(created.first_name, "Jane");
    assert_eq!(created.last_name, "Doe");
    assert_eq!(created.email, "jane@x.com");
}

#[tokio::test]
async fn test_update_overwrites_fields_and_keeps_id() {
    let service = service();

    let created = service
        .create_survey(Survey::new("Jane", "Doe", "jane@x.com"))
        .await
        .unwrap();
    let id = created.id.unwrap();

    // The input record's own id must be ignored
    let input = Survey {
        id: Some(42),
        first_name: "Janet".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@x.com".to_string(),
    };

    let updated = service.update_survey(input, id).await.unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.first_name, "Janet");
    assert_eq!(updated.last_name, "Doe");
    assert_eq!(updated.email, "jane@x.com");
}

#[tokio::test]
async fn test_update_unknown_id_fails_with_not_found() {
    let service = service();

    let result = service
        .update_survey(Survey::new("Jane", "Doe", "jane@x.com"), 999)
        .await;

    match result {
        Err(AppError::NotFound(msg)) => {
            assert!(msg.contains("Survey Not Found"));
            assert!(msg.contains("999"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_unknown_id_returns_none() {
    let service = service();

    let result = service.get_survey(999).await.unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn test_get_returns_current_fields() {
    let service = service();

    let created = service
        .create_survey(Survey::new("Jane", "Doe", "jane@x.com"))
        .await
        .unwrap();
    let id = created.id.unwrap();

    service
        .update_survey(Survey::new("Janet", "Doe", "janet@x.com"), id)
        .await
        .unwrap();

    let fetched = service.get_survey(id).await.unwrap().unwrap();

    assert_eq!(fetched.id, Some(id));
    assert_eq!(fetched.first_name, "Janet");
    assert_eq!(fetched.email, "janet@x.com");
}

#[tokio::test]
async fn test_delete_then_get_returns_none() {
    let service = service();

    let created = service
        .create_survey(Survey::new("Jane", "Doe", "jane@x.com"))
        .await
        .unwrap();
    let id = created.id.unwrap();

    service.delete_survey(id).await.unwrap();

    assert_eq!(service.get_survey(id).await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_an_error() {
    let service = service();

    // The in-memory store no-ops on unknown ids, as the MySQL store does
    assert!(service.delete_survey(999).await.is_ok());
}

#[tokio::test]
async fn test_list_returns_every_live_record_once() {
    let service = service();

    let a = service
        .create_survey(Survey::new("Jane", "Doe", "jane@x.com"))
        .await
        .unwrap();
    let b = service
        .create_survey(Survey::new("John", "Smith", "john@x.com"))
        .await
        .unwrap();
    let c = service
        .create_survey(Survey::new("Ada", "Lovelace", "ada@x.com"))
        .await
        .unwrap();

    service.delete_survey(b.id.unwrap()).await.unwrap();

    let all = service.list_surveys().await.unwrap();

    assert_eq!(all.len(), 2);
    let ids: Vec<Option<i64>> = all.iter().map(|s| s.id).collect();
    assert!(ids.contains(&a.id));
    assert!(ids.contains(&c.id));
    assert!(!ids.contains(&b.id));
}

#[tokio::test]
async fn test_list_on_empty_store_is_empty() {
    let service = service();

    assert!(service.list_surveys().await.unwrap().is_empty());
}

proptest! {
    // The field copy is the only logic the service owns; check it holds for
    // arbitrary values and regardless of the input record's own id.
    #[test]
    fn test_update_copies_arbitrary_fields_and_preserves_id(
        first in "\\PC{0,40}",
        last in "\\PC{0,40}",
        email in "\\PC{0,40}",
        stray_id in proptest::option::of(0i64..1_000),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        rt.block_on(async {
            let service = service();

            let created = service
                .create_survey(Survey::new("Jane", "Doe", "jane@x.com"))
                .await
                .unwrap();
            let id = created.id.unwrap();

            let input = Survey {
                id: stray_id,
                first_name: first.clone(),
                last_name: last.clone(),
                email: email.clone(),
            };

            let updated = service.update_survey(input, id).await.unwrap();

            assert_eq!(updated.id, Some(id));
            assert_eq!(updated.first_name, first);
            assert_eq!(updated.last_name, last);
            assert_eq!(updated.email, email);
        });
    }
}
