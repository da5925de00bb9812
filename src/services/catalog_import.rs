//! Importación del catálogo al almacén de documentos
//!
//! Una escritura por lotes por colección, con upsert por id estable:
//! id de marca, id de vehículo o nombre de ciudad en minúsculas. Sin
//! reintentos: el error se registra y se devuelve a quien llama.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::models::{Brand, Catalog, City, Vehicle};
use crate::repositories::catalog_repository::{
    BRANDS_COLLECTION, CITIES_COLLECTION, VEHICLES_COLLECTION,
};
use crate::repositories::document_store::{Document, DocumentStore, StoreError};

/// Qué colecciones importar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportTarget {
    Brands,
    Vehicles,
    Cities,
    All,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown import target '{0}' (expected brands, vehicles, cities or all)")]
pub struct UnknownImportTarget(pub String);

impl FromStr for ImportTarget {
    type Err = UnknownImportTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brands" => Ok(ImportTarget::Brands),
            "vehicles" => Ok(ImportTarget::Vehicles),
            "cities" => Ok(ImportTarget::Cities),
            "all" => Ok(ImportTarget::All),
            _ => Err(UnknownImportTarget(s.to_string())),
        }
    }
}

/// Resultado de importar una colección
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub collection: &'static str,
    pub written: usize,
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} documents written to '{}'", self.written, self.collection)
    }
}

pub struct CatalogImporter {
    store: Arc<dyn DocumentStore>,
}

impl CatalogImporter {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn write_batch(
        &self,
        collection: &'static str,
        documents: Vec<Document>,
    ) -> Result<ImportReport, StoreError> {
        info!("📦 Importando {} documentos en '{}'", documents.len(), collection);
        match self.store.batch_upsert(collection, documents).await {
            Ok(written) => {
                info!("✅ {} documentos importados en '{}'", written, collection);
                Ok(ImportReport { collection, written })
            }
            Err(e) => {
                error!("❌ Error importando '{}': {}", collection, e);
                Err(e)
            }
        }
    }

    pub async fn import_brands(&self, brands: &[Brand]) -> Result<ImportReport, StoreError> {
        let documents = brands
            .iter()
            .map(|brand| Document::from_record(brand.id.clone(), brand))
            .collect::<Result<Vec<_>, _>>()?;
        self.write_batch(BRANDS_COLLECTION, documents).await
    }

    pub async fn import_vehicles(&self, vehicles: &[Vehicle]) -> Result<ImportReport, StoreError> {
        let documents = vehicles
            .iter()
            .map(|vehicle| Document::from_record(vehicle.id.clone(), vehicle))
            .collect::<Result<Vec<_>, _>>()?;
        self.write_batch(VEHICLES_COLLECTION, documents).await
    }

    pub async fn import_cities(&self, cities: &[City]) -> Result<ImportReport, StoreError> {
        let documents = cities
            .iter()
            .map(|city| Document::from_record(city.document_id(), city))
            .collect::<Result<Vec<_>, _>>()?;
        self.write_batch(CITIES_COLLECTION, documents).await
    }

    /// Importar las colecciones pedidas, en orden marcas, vehículos, ciudades.
    /// Se detiene en el primer lote que falle.
    pub async fn import(
        &self,
        catalog: &Catalog,
        target: ImportTarget,
    ) -> Result<Vec<ImportReport>, StoreError> {
        let mut reports = Vec::new();
        if matches!(target, ImportTarget::Brands | ImportTarget::All) {
            reports.push(self.import_brands(&catalog.brands).await?);
        }
        if matches!(target, ImportTarget::Vehicles | ImportTarget::All) {
            reports.push(self.import_vehicles(&catalog.vehicles).await?);
        }
        if matches!(target, ImportTarget::Cities | ImportTarget::All) {
            reports.push(self.import_cities(&catalog.cities).await?);
        }
        Ok(reports)
    }
}
