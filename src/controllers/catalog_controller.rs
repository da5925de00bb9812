use std::sync::Arc;

use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::catalog_dto::QuoteRequest;
use crate::models::vehicle::VehicleFilters;
use crate::models::{Brand, City, Quote, QuoteError, Vehicle};
use crate::repositories::catalog_repository::CatalogRepository;
use crate::repositories::document_store::DocumentStore;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub struct CatalogController {
    repository: CatalogRepository,
}

impl CatalogController {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repository: CatalogRepository::new(store),
        }
    }

    pub async fn list_brands(&self) -> Result<ApiResponse<Vec<Brand>>, AppError> {
        let brands = self.repository.list_brands().await?;
        Ok(ApiResponse::success(brands))
    }

    pub async fn get_brand(&self, id: &str) -> Result<Brand, AppError> {
        self.repository
            .find_brand(id)
            .await?
            .ok_or_else(|| not_found_error("Brand", id))
    }

    pub async fn list_vehicles(
        &self,
        filters: &VehicleFilters,
    ) -> Result<ApiResponse<Vec<Vehicle>>, AppError> {
        if let Some(brand) = filters.brand.as_deref() {
            if self.repository.find_brand(brand).await?.is_none() {
                return Err(not_found_error("Brand", brand));
            }
        }

        let vehicles = self
            .repository
            .list_vehicles()
            .await?
            .into_iter()
            .filter(|v| filters.matches(v))
            .collect();
        Ok(ApiResponse::success(vehicles))
    }

    pub async fn get_vehicle(&self, id: &str) -> Result<Vehicle, AppError> {
        self.repository
            .find_vehicle(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    pub async fn quote(&self, id: &str, request: QuoteRequest) -> Result<ApiResponse<Quote>, AppError> {
        request.validate()?;

        let vehicle = self.get_vehicle(id).await?;
        if !vehicle.available {
            return Err(bad_request_error("Ce véhicule n'est pas disponible à l'abonnement"));
        }
        let options = vehicle
            .subscription_options
            .as_ref()
            .ok_or_else(|| bad_request_error("Ce véhicule n'a pas d'offre d'abonnement"))?;

        let quote = options
            .quote(&request.into())
            .map_err(|e: QuoteError| bad_request_error(&e.to_string()))?;

        Ok(ApiResponse::success(quote))
    }

    pub async fn list_cities(&self) -> Result<ApiResponse<Vec<City>>, AppError> {
        let cities = self.repository.list_cities().await?;
        Ok(ApiResponse::success(cities))
    }
}
