use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::catalog_controller::CatalogController;
use crate::dto::api_response::ApiResponse;
use crate::dto::catalog_dto::QuoteRequest;
use crate::models::vehicle::VehicleFilters;
use crate::models::{Brand, City, Quote, Vehicle};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/brands", get(list_brands))
        .route("/brands/:id", get(get_brand))
        .route("/vehicles", get(list_vehicles))
        .route("/vehicles/:id", get(get_vehicle))
        .route("/vehicles/:id/quote", post(quote_vehicle))
        .route("/cities", get(list_cities))
}

async fn list_brands(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Brand>>>, AppError> {
    let controller = CatalogController::new(state.store.clone());
    Ok(Json(controller.list_brands().await?))
}

async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Brand>, AppError> {
    let controller = CatalogController::new(state.store.clone());
    Ok(Json(controller.get_brand(&id).await?))
}

async fn list_vehicles(
    State(state): State<AppState>,
    filters: Result<Query<VehicleFilters>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Vehicle>>>, AppError> {
    // Filtros inválidos (categoría desconocida, booleano mal escrito) como error JSON
    let Query(filters) = filters.map_err(|e| bad_request_error(&e.body_text()))?;
    let controller = CatalogController::new(state.store.clone());
    Ok(Json(controller.list_vehicles(&filters).await?))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = CatalogController::new(state.store.clone());
    Ok(Json(controller.get_vehicle(&id).await?))
}

async fn quote_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<ApiResponse<Quote>>, AppError> {
    let controller = CatalogController::new(state.store.clone());
    Ok(Json(controller.quote(&id, request).await?))
}

async fn list_cities(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<City>>>, AppError> {
    let controller = CatalogController::new(state.store.clone());
    Ok(Json(controller.list_cities().await?))
}
