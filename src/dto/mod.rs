//! DTOs de la API HTTP

pub mod api_response;
pub mod catalog_dto;
pub mod validation_dto;

pub use api_response::ApiResponse;
