//! Modelo de Vehicle
//!
//! Ficha completa de un vehículo del catálogo, persistida en
//! `vehicles/{id}`. El `id` coincide con el de un modelo de su marca.

use serde::{Deserialize, Serialize};

use super::brand::ModelCategory;
use super::subscription::SubscriptionOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manuelle,
    Automatique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Essence,
    Diesel,
    Hybride,
    Electrique,
}

/// Vehicle del catálogo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub brand_id: String,
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub category: ModelCategory,
    pub transmission: Transmission,
    pub fuel: FuelType,
    pub seats: u8,
    #[serde(default)]
    pub features: Vec<String>,
    pub available: bool,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_options: Option<SubscriptionOptions>,
}

/// Filtros para búsqueda de vehículos
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub brand: Option<String>,
    pub category: Option<ModelCategory>,
    pub available: Option<bool>,
}

impl VehicleFilters {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.brand.as_deref().map_or(true, |b| vehicle.brand_id == b)
            && self.category.map_or(true, |c| vehicle.category == c)
            && self.available.map_or(true, |a| vehicle.available == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kangoo() -> Vehicle {
        serde_json::from_value(json!({
            "id": "renault-kangoo",
            "name": "Renault Kangoo Van",
            "brandId": "renault",
            "image": "/vehicles/renault-kangoo.png",
            "category": "Utilitaire",
            "transmission": "manuelle",
            "fuel": "diesel",
            "seats": 2,
            "available": false,
            "description": "Utilitaire compact"
        }))
        .unwrap()
    }

    #[test]
    fn test_optional_fields_default() {
        let vehicle = kangoo();
        assert!(vehicle.gallery.is_empty());
        assert!(vehicle.features.is_empty());
        assert!(vehicle.subscription_options.is_none());
        assert_eq!(vehicle.category, ModelCategory::Utilitaire);
    }

    #[test]
    fn test_serialized_document_normalizes_category() {
        let value = serde_json::to_value(kangoo()).unwrap();
        assert_eq!(value["category"], "utilitaire");
        assert_eq!(value["brandId"], "renault");
        assert!(value.get("subscriptionOptions").is_none());
    }

    #[test]
    fn test_filters() {
        let vehicle = kangoo();
        assert!(VehicleFilters::default().matches(&vehicle));
        assert!(VehicleFilters {
            brand: Some("renault".to_string()),
            category: Some(ModelCategory::Utilitaire),
            available: Some(false),
        }
        .matches(&vehicle));
        assert!(!VehicleFilters { available: Some(true), ..Default::default() }.matches(&vehicle));
        assert!(!VehicleFilters { brand: Some("dacia".to_string()), ..Default::default() }
            .matches(&vehicle));
    }
}
