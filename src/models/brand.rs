//! Modelo de Brand
//!
//! Marca del catálogo con su lista ordenada de modelos. Se persiste en
//! `brands/{id}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Categoría de un modelo. Se acepta cualquier capitalización al leer
/// (`"Utilitaire"` y `"utilitaire"` son lo mismo) y se escribe en minúsculas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelCategory {
    Compact,
    MiniSuv,
    Suv,
    Utilitaire,
}

impl ModelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelCategory::Compact => "compact",
            ModelCategory::MiniSuv => "mini-suv",
            ModelCategory::Suv => "suv",
            ModelCategory::Utilitaire => "utilitaire",
        }
    }
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown model category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for ModelCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(ModelCategory::Compact),
            "mini-suv" => Ok(ModelCategory::MiniSuv),
            "suv" => Ok(ModelCategory::Suv),
            "utilitaire" => Ok(ModelCategory::Utilitaire),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

impl Serialize for ModelCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Resumen de un modelo dentro de una marca (no direccionable por sí mismo)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: ModelCategory,
    pub description: String,
}

/// Marca del catálogo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub cover_image: String,
    pub description: String,
    pub cta_label: String,
    #[serde(default)]
    pub models: Vec<ModelSummary>,
}

impl Brand {
    pub fn find_model(&self, model_id: &str) -> Option<&ModelSummary> {
        self.models.iter().find(|m| m.id == model_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_parsing_is_case_insensitive() {
        assert_eq!("Utilitaire".parse::<ModelCategory>().unwrap(), ModelCategory::Utilitaire);
        assert_eq!("MINI-SUV".parse::<ModelCategory>().unwrap(), ModelCategory::MiniSuv);
        assert!("berline".parse::<ModelCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let value: ModelCategory = serde_json::from_value(json!("Utilitaire")).unwrap();
        assert_eq!(serde_json::to_value(value).unwrap(), json!("utilitaire"));
    }

    #[test]
    fn test_brand_document_shape() {
        let brand: Brand = serde_json::from_value(json!({
            "id": "peugeot",
            "name": "Peugeot",
            "logo": "/brands/peugeot/logo.svg",
            "coverImage": "/brands/peugeot/cover.jpg",
            "description": "Le lion français",
            "ctaLabel": "Voir les modèles",
            "models": [{
                "id": "peugeot-208",
                "name": "208",
                "image": "/vehicles/peugeot-208.png",
                "category": "compact",
                "description": "Citadine"
            }]
        }))
        .unwrap();

        assert_eq!(brand.models.len(), 1);
        assert!(brand.find_model("peugeot-208").is_some());
        assert!(brand.find_model("peugeot-3008").is_none());

        let back = serde_json::to_value(&brand).unwrap();
        assert_eq!(back["coverImage"], "/brands/peugeot/cover.jpg");
        assert_eq!(back["ctaLabel"], "Voir les modèles");
    }
}
