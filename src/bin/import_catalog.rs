//! Importar el catálogo estático al almacén de documentos
//!
//! Uso: `import_catalog [brands|vehicles|cities|all]` (por defecto `all`).
//! Requiere `DATABASE_URL`. Un lote por colección, sin reintentos.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use tracing::{error, info};

use car_subscription::config::database::DatabaseConfig;
use car_subscription::config::environment::EnvironmentConfig;
use car_subscription::database::DatabaseConnection;
use car_subscription::models::Catalog;
use car_subscription::repositories::PgDocumentStore;
use car_subscription::services::{CatalogImporter, ImportTarget};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let target: ImportTarget = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => ImportTarget::All,
    };

    let Some(url) = config.database_url.clone() else {
        bail!("DATABASE_URL must be set to run the import");
    };

    let catalog = Catalog::load(config.catalog_path.as_deref()).context("loading catalog")?;
    info!(
        "📚 Catálogo cargado: {} marcas, {} vehículos, {} ciudades",
        catalog.brands.len(),
        catalog.vehicles.len(),
        catalog.cities.len()
    );

    let connection = DatabaseConnection::connect(&DatabaseConfig::new(url)).await?;
    connection.ensure_schema().await?;
    let importer = CatalogImporter::new(Arc::new(PgDocumentStore::new(connection.pool().clone())));

    match importer.import(&catalog, target).await {
        Ok(reports) => {
            for report in reports {
                info!("✅ {}", report);
            }
            Ok(())
        }
        Err(e) => {
            error!("❌ La importación falló: {}", e);
            Err(e.into())
        }
    }
}
