//! Modelos del sistema
//!
//! Catálogo (marcas, vehículos, opciones de suscripción, ciudades) y
//! estado de edición del perfil.

pub mod brand;
pub mod catalog;
pub mod city;
pub mod profile;
pub mod subscription;
pub mod vehicle;

pub use brand::{Brand, ModelCategory, ModelSummary};
pub use catalog::{Catalog, CatalogError};
pub use city::City;
pub use subscription::{Quote, QuoteError, QuoteSelection, SubscriptionOptions};
pub use vehicle::Vehicle;
