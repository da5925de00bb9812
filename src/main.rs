use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use car_subscription::config::database::DatabaseConfig;
use car_subscription::config::environment::EnvironmentConfig;
use car_subscription::database::DatabaseConnection;
use car_subscription::models::Catalog;
use car_subscription::repositories::{DocumentStore, MemoryDocumentStore, PgDocumentStore};
use car_subscription::routes::create_app_router;
use car_subscription::services::{CatalogImporter, ImportTarget};
use car_subscription::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Car Subscription API");
    info!("================================================");
    info!(
        "⚙️  Entorno: {} | región: {} | instancias máx: {} | memoria: {} MiB | timeout: {}s",
        config.environment,
        config.function.region,
        config.function.max_instances,
        config.function.memory_mib,
        config.function.timeout_secs
    );

    let store = build_store(&config).await?;

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app_router(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Health check");
    info!("   GET  /api/brands - Listar marcas");
    info!("   GET  /api/brands/:id - Obtener marca");
    info!("   GET  /api/vehicles - Listar vehículos (?brand=&category=&available=)");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   POST /api/vehicles/:id/quote - Calcular cuota mensual");
    info!("   GET  /api/cities - Listar ciudades");
    info!("   POST /api/validation/field - Validar campo de perfil");
    info!("   POST /api/validation/address - Validar dirección");
    info!("   POST /api/validation/format-phone - Formatear teléfono");
    info!("   POST /api/validation/mask - Enmascarar email o teléfono");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// PostgreSQL si hay `DATABASE_URL`; si no, memoria sembrada con el catálogo
async fn build_store(config: &EnvironmentConfig) -> Result<Arc<dyn DocumentStore>> {
    match &config.database_url {
        Some(url) => {
            let connection = DatabaseConnection::connect(&DatabaseConfig::new(url.clone())).await?;
            connection.ensure_schema().await?;
            Ok(Arc::new(PgDocumentStore::new(connection.pool().clone())))
        }
        None => {
            if config.is_production() {
                warn!("⚠️ Entorno de producción sin DATABASE_URL: los datos no se persisten");
            }
            warn!("⚠️ DATABASE_URL no definida: usando almacén en memoria");
            let catalog = Catalog::load(config.catalog_path.as_deref())?;
            let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
            CatalogImporter::new(store.clone())
                .import(&catalog, ImportTarget::All)
                .await?;
            Ok(store)
        }
    }
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
