use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use sea_orm::sea_query::OnConflict;

use crate::content::application::domain::document::{ContentDocument, ContentPatch};
use crate::content::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};

use super::sea_orm_entity::{
    ActiveModel as DocumentActiveModel, Column as DocumentColumn, Entity as DocumentEntity,
    Model as DocumentModel,
};

/// Postgres rendition of the remote document store: one JSONB row per key.
#[derive(Debug, Clone)]
pub struct DocumentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl DocumentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore for DocumentStorePostgres {
    async fn fetch(&self, key: &str) -> Result<Option<ContentDocument>, DocumentStoreError> {
        let row: Option<DocumentModel> = DocumentEntity::find_by_id(key.to_string())
            .one(&*self.db)
            .await
            .map_err(|err| DocumentStoreError::Unavailable(err.to_string()))?;

        match row {
            None => Ok(None),
            Some(model) => serde_json::from_value(model.data)
                .map(Some)
                .map_err(|err| DocumentStoreError::Corrupt(err.to_string())),
        }
    }

    async fn create_if_absent(
        &self,
        key: &str,
        document: &ContentDocument,
    ) -> Result<(), DocumentStoreError> {
        let data = serde_json::to_value(document)
            .map_err(|err| DocumentStoreError::Corrupt(err.to_string()))?;

        let row = DocumentActiveModel {
            key: Set(key.to_string()),
            data: Set(data),
            updated_at: Set(chrono::Utc::now().into()),
        };

        let insert = DocumentEntity::insert(row)
            .on_conflict(
                OnConflict::column(DocumentColumn::Key)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&*self.db)
            .await;

        match insert {
            Ok(_) => Ok(()),
            // Conflict: a document already exists, which is exactly the contract.
            Err(DbErr::RecordNotInserted) => Ok(()),
            Err(err) => Err(DocumentStoreError::Unavailable(err.to_string())),
        }
    }

    async fn merge_update(
        &self,
        key: &str,
        patch: &ContentPatch,
    ) -> Result<(), DocumentStoreError> {
        let existing = DocumentEntity::find_by_id(key.to_string())
            .one(&*self.db)
            .await
            .map_err(|err| DocumentStoreError::Unavailable(err.to_string()))?
            .ok_or_else(|| DocumentStoreError::NotFound(key.to_string()))?;

        // Shallow merge: the patch's top-level keys replace the stored ones.
        let mut data = existing.data.clone();
        let patch_value = serde_json::to_value(patch)
            .map_err(|err| DocumentStoreError::Corrupt(err.to_string()))?;

        let (Some(target), Some(sections)) = (data.as_object_mut(), patch_value.as_object())
        else {
            return Err(DocumentStoreError::Corrupt(format!(
                "document under '{}' is not a JSON object",
                key
            )));
        };
        for (section, value) in sections {
            target.insert(section.clone(), value.clone());
        }

        let mut row: DocumentActiveModel = existing.into();
        row.data = Set(data);
        row.updated_at = Set(chrono::Utc::now().into());

        row.update(&*self.db)
            .await
            .map(|_| ())
            .map_err(|err| DocumentStoreError::Unavailable(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::domain::document::{Navbar, DOCUMENT_KEY};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    fn stored_model(document: &ContentDocument) -> DocumentModel {
        DocumentModel {
            key: DOCUMENT_KEY.to_string(),
            data: serde_json::to_value(document).unwrap(),
            updated_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_deserialized_document() {
        let document = ContentDocument::default_document();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_model(&document)]])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let fetched = store.fetch(DOCUMENT_KEY).await.unwrap();

        assert_eq!(fetched, Some(document));
    }

    #[tokio::test]
    async fn test_fetch_returns_none_when_no_row_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<DocumentModel>::new()])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        assert_eq!(store.fetch(DOCUMENT_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_fetch_maps_malformed_row_to_corrupt() {
        let broken = DocumentModel {
            key: DOCUMENT_KEY.to_string(),
            data: serde_json::json!({ "hero": 42 }),
            updated_at: chrono::Utc::now().into(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![broken]])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let err = store.fetch(DOCUMENT_KEY).await.unwrap_err();

        assert!(matches!(err, DocumentStoreError::Corrupt(_)));
    }

    #[tokio::test]
    async fn test_create_if_absent_inserts_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        store
            .create_if_absent(DOCUMENT_KEY, &ContentDocument::default_document())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_merge_update_rewrites_only_patched_sections() {
        let document = ContentDocument::default_document();
        let mut updated = document.clone();
        updated.navbar = Navbar {
            logo: "Patched".to_string(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_model(&document)]])
            .append_query_results([vec![stored_model(&updated)]])
            .into_connection();

        let db = Arc::new(db);
        let store = DocumentStorePostgres::new(Arc::clone(&db));
        let patch = ContentPatch {
            navbar: Some(Navbar {
                logo: "Patched".to_string(),
            }),
            ..ContentPatch::default()
        };
        store.merge_update(DOCUMENT_KEY, &patch).await.unwrap();

        // The UPDATE statement must carry the merged document: the patched
        // navbar plus the untouched sibling sections.
        drop(store);
        let log: Vec<Transaction> = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let update_stmt = format!("{:?}", log.last().unwrap());
        assert!(update_stmt.contains("Patched"));
        assert!(update_stmt.contains("Get In Touch"));
    }

    #[tokio::test]
    async fn test_merge_update_fails_when_document_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<DocumentModel>::new()])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let err = store
            .merge_update(DOCUMENT_KEY, &ContentPatch::full(&ContentDocument::default_document()))
            .await
            .unwrap_err();

        assert!(matches!(err, DocumentStoreError::NotFound(_)));
    }
}
