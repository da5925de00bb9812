//! Ciudades donde se ofrece el servicio. Solo `name` es conocido; el resto
//! del registro se conserva tal cual.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl City {
    /// Clave del documento en `cities/{key}`
    pub fn document_id(&self) -> String {
        self.name.trim().to_lowercase()
    }
}
