//! Almacén de documentos
//!
//! Colecciones de documentos JSON direccionados por id. Una escritura por
//! lotes es atómica y hace upsert: crea el documento o lo reemplaza entero.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Documento listo para escribirse en una colección
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

impl Document {
    pub fn new(id: impl Into<String>, data: Value) -> Self {
        Self { id: id.into(), data }
    }

    pub fn from_record<T: Serialize>(id: impl Into<String>, record: &T) -> Result<Self, StoreError> {
        Ok(Self::new(id, serde_json::to_value(record)?))
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Upsert atómico de todos los documentos. Devuelve cuántos se escribieron.
    async fn batch_upsert(&self, collection: &str, documents: Vec<Document>) -> Result<usize, StoreError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Todos los documentos de la colección, ordenados por id
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;
}
