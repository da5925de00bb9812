//! Implementación en memoria del almacén de documentos

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::document_store::{Document, DocumentStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn batch_upsert(&self, collection: &str, documents: Vec<Document>) -> Result<usize, StoreError> {
        let written = documents.len();
        // Todo el lote bajo un solo write lock
        let mut collections = self.collections.write().await;
        let entries = collections.entry(collection.to_string()).or_default();
        for document in documents {
            entries.insert(document.id, document.data);
        }
        log::debug!("💾 {} documentos escritos en memoria ('{}')", written, collection);
        Ok(written)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|docs| docs.get(id)).cloned())
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, data)| Document::new(id.clone(), data.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_upsert_replaces_whole_document() {
        let store = MemoryDocumentStore::new();
        store
            .batch_upsert("brands", vec![Document::new("peugeot", json!({ "name": "Peugeot", "old": true }))])
            .await
            .unwrap();
        store
            .batch_upsert("brands", vec![Document::new("peugeot", json!({ "name": "Peugeot" }))])
            .await
            .unwrap();

        assert_eq!(store.count("brands").await, 1);
        let doc = store.get("brands", "peugeot").await.unwrap().unwrap();
        assert_eq!(doc, json!({ "name": "Peugeot" }));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = MemoryDocumentStore::new();
        store
            .batch_upsert(
                "cities",
                vec![
                    Document::new("paris", json!({})),
                    Document::new("lyon", json!({})),
                    Document::new("marseille", json!({})),
                ],
            )
            .await
            .unwrap();

        let ids: Vec<String> = store.list("cities").await.unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["lyon", "marseille", "paris"]);
    }

    #[tokio::test]
    async fn test_unknown_collection_is_empty() {
        let store = MemoryDocumentStore::new();
        assert!(store.list("vehicles").await.unwrap().is_empty());
        assert!(store.get("vehicles", "x").await.unwrap().is_none());
        assert_eq!(store.count("vehicles").await, 0);
    }
}
