//! Implementación PostgreSQL del almacén de documentos
//!
//! Tabla `documents(collection, id, data JSONB, updated_at)` con clave
//! primaria `(collection, id)`. Cada lote es una transacción.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use super::document_store::{Document, DocumentStore, StoreError};

pub const CREATE_DOCUMENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS documents (
        collection TEXT NOT NULL,
        id TEXT NOT NULL,
        data JSONB NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        PRIMARY KEY (collection, id)
    )
"#;

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn batch_upsert(&self, collection: &str, documents: Vec<Document>) -> Result<usize, StoreError> {
        let written = documents.len();
        let mut tx = self.pool.begin().await?;

        for document in documents {
            sqlx::query(
                r#"
                INSERT INTO documents (collection, id, data, updated_at)
                VALUES ($1, $2, $3, now())
                ON CONFLICT (collection, id)
                DO UPDATE SET data = EXCLUDED.data, updated_at = EXCLUDED.updated_at
                "#,
            )
            .bind(collection)
            .bind(&document.id)
            .bind(&document.data)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        log::info!("💾 {} documentos escritos en '{}'", written, collection);
        Ok(written)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let row: Option<(Value,)> =
            sqlx::query_as("SELECT data FROM documents WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(data,)| data))
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows: Vec<(String, Value)> =
            sqlx::query_as("SELECT id, data FROM documents WHERE collection = $1 ORDER BY id")
                .bind(collection)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(id, data)| Document::new(id, data)).collect())
    }
}
