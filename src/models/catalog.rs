//! Catálogo completo
//!
//! El catálogo es un documento JSON (`data/catalog.json` embebido en el
//! binario, o un fichero indicado por `CATALOG_PATH`) que se carga una vez
//! al arrancar y se valida antes de usarse.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::brand::Brand;
use super::city::City;
use super::vehicle::Vehicle;

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {collection} id '{id}'")]
    DuplicateId { collection: &'static str, id: String },

    #[error("Vehicle '{vehicle}' references unknown brand '{brand}'")]
    UnknownBrand { vehicle: String, brand: String },

    #[error("Vehicle '{vehicle}' is not listed among the models of brand '{brand}'")]
    UnknownModel { vehicle: String, brand: String },

    #[error("Vehicle '{vehicle}' must have at least one seat")]
    InvalidSeats { vehicle: String },

    #[error("Vehicle '{vehicle}' has invalid subscription options: {reason}")]
    InvalidSubscription { vehicle: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub cities: Vec<City>,
}

impl Catalog {
    /// Catálogo embebido en el binario
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Fichero si se indica uno, catálogo embebido si no
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    pub fn find_brand(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique("brand", self.brands.iter().map(|b| b.id.clone()))?;
        ensure_unique("vehicle", self.vehicles.iter().map(|v| v.id.clone()))?;
        ensure_unique("city", self.cities.iter().map(City::document_id))?;

        for vehicle in &self.vehicles {
            let brand = self.find_brand(&vehicle.brand_id).ok_or_else(|| {
                CatalogError::UnknownBrand {
                    vehicle: vehicle.id.clone(),
                    brand: vehicle.brand_id.clone(),
                }
            })?;

            if brand.find_model(&vehicle.id).is_none() {
                return Err(CatalogError::UnknownModel {
                    vehicle: vehicle.id.clone(),
                    brand: brand.id.clone(),
                });
            }

            if vehicle.seats == 0 {
                return Err(CatalogError::InvalidSeats { vehicle: vehicle.id.clone() });
            }

            if let Some(options) = &vehicle.subscription_options {
                options.validate(&vehicle.id)?;
            }
        }

        Ok(())
    }
}

fn ensure_unique(
    collection: &'static str,
    ids: impl Iterator<Item = String>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            return Err(CatalogError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::brand::ModelCategory;

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.brands.is_empty());
        assert!(!catalog.vehicles.is_empty());
        assert!(!catalog.cities.is_empty());
    }

    #[test]
    fn test_embedded_catalog_normalizes_utilitaire() {
        let catalog = Catalog::embedded().unwrap();
        let kangoo = catalog.vehicles.iter().find(|v| v.id == "renault-kangoo").unwrap();
        assert_eq!(kangoo.category, ModelCategory::Utilitaire);
    }

    #[test]
    fn test_every_priced_vehicle_has_free_options() {
        let catalog = Catalog::embedded().unwrap();
        for options in catalog.vehicles.iter().filter_map(|v| v.subscription_options.as_ref()) {
            assert!(options.included_mileage().is_some());
            assert!(options.included_insurance().is_some());
        }
    }

    #[test]
    fn test_duplicate_brand_rejected() {
        let mut catalog = Catalog::embedded().unwrap();
        let copy = catalog.brands[0].clone();
        catalog.brands.push(copy);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateId { collection: "brand", .. })
        ));
    }

    #[test]
    fn test_duplicate_city_names_differ_only_by_case() {
        let mut catalog = Catalog::embedded().unwrap();
        let mut copy = catalog.cities[0].clone();
        copy.name = copy.name.to_uppercase();
        catalog.cities.push(copy);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateId { collection: "city", .. })
        ));
    }

    #[test]
    fn test_unknown_brand_rejected() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.vehicles[0].brand_id = "tesla".to_string();
        assert!(matches!(catalog.validate(), Err(CatalogError::UnknownBrand { .. })));
    }

    #[test]
    fn test_vehicle_must_match_a_model() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.vehicles[0].id = "peugeot-9999".to_string();
        assert!(matches!(catalog.validate(), Err(CatalogError::UnknownModel { .. })));
    }

    #[test]
    fn test_zero_seats_rejected() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.vehicles[0].seats = 0;
        assert!(matches!(catalog.validate(), Err(CatalogError::InvalidSeats { .. })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Catalog::from_json("{ not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Catalog::load(Some(Path::new("/nonexistent/catalog.json")));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
