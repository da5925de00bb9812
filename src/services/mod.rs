//! Servicios
//!
//! Lógica que coordina modelos y almacén de documentos.

pub mod catalog_import;

pub use catalog_import::{CatalogImporter, ImportReport, ImportTarget};
