//! Repositorios
//!
//! Almacén de documentos (PostgreSQL o memoria) y lectura del catálogo.

pub mod catalog_repository;
pub mod document_store;
pub mod memory_document_store;
pub mod pg_document_store;

pub use catalog_repository::CatalogRepository;
pub use document_store::{Document, DocumentStore, StoreError};
pub use memory_document_store::MemoryDocumentStore;
pub use pg_document_store::PgDocumentStore;
