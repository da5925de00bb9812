use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::document_store::{DocumentStore, StoreError};
use crate::models::{Brand, City, Vehicle};

pub const BRANDS_COLLECTION: &str = "brands";
pub const VEHICLES_COLLECTION: &str = "vehicles";
pub const CITIES_COLLECTION: &str = "cities";

/// Lectura tipada del catálogo persistido
#[derive(Clone)]
pub struct CatalogRepository {
    store: Arc<dyn DocumentStore>,
}

impl CatalogRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn find<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(collection, id).await? {
            Some(data) => Ok(Some(serde_json::from_value(data)?)),
            None => Ok(None),
        }
    }

    async fn list<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, StoreError> {
        self.store
            .list(collection)
            .await?
            .into_iter()
            .map(|doc| serde_json::from_value(doc.data).map_err(StoreError::from))
            .collect()
    }

    pub async fn list_brands(&self) -> Result<Vec<Brand>, StoreError> {
        self.list(BRANDS_COLLECTION).await
    }

    pub async fn find_brand(&self, id: &str) -> Result<Option<Brand>, StoreError> {
        self.find(BRANDS_COLLECTION, id).await
    }

    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, StoreError> {
        self.list(VEHICLES_COLLECTION).await
    }

    pub async fn find_vehicle(&self, id: &str) -> Result<Option<Vehicle>, StoreError> {
        self.find(VEHICLES_COLLECTION, id).await
    }

    pub async fn list_cities(&self) -> Result<Vec<City>, StoreError> {
        self.list(CITIES_COLLECTION).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::document_store::Document;
    use crate::repositories::memory_document_store::MemoryDocumentStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_find_and_list_decode_documents() {
        let store = Arc::new(MemoryDocumentStore::new());
        store
            .batch_upsert(
                CITIES_COLLECTION,
                vec![Document::new("lyon", json!({ "name": "Lyon" }))],
            )
            .await
            .unwrap();
        let repository = CatalogRepository::new(store);

        let cities = repository.list_cities().await.unwrap();
        assert_eq!(cities[0].name, "Lyon");
        assert!(repository.find_vehicle("peugeot-208").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_document_is_an_error() {
        let store = Arc::new(MemoryDocumentStore::new());
        store
            .batch_upsert(BRANDS_COLLECTION, vec![Document::new("broken", json!({ "id": 3 }))])
            .await
            .unwrap();
        let repository = CatalogRepository::new(store);

        assert!(matches!(
            repository.find_brand("broken").await,
            Err(StoreError::Serialization(_))
        ));
    }
}
