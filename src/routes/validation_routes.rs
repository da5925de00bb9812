use axum::{routing::post, Json, Router};

use crate::controllers::validation_controller::ValidationController;
use crate::dto::validation_dto::{
    FormatPhoneRequest, FormatPhoneResponse, MaskRequest, MaskResponse, ValidateFieldRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{AddressFields, ValidationResult};

pub fn create_validation_router() -> Router<AppState> {
    Router::new()
        .route("/validation/field", post(validate_field))
        .route("/validation/address", post(validate_address))
        .route("/validation/format-phone", post(format_phone))
        .route("/validation/mask", post(mask_value))
}

async fn validate_field(
    Json(request): Json<ValidateFieldRequest>,
) -> Result<Json<ValidationResult>, AppError> {
    Ok(Json(ValidationController::validate_field(request)?))
}

async fn validate_address(Json(address): Json<AddressFields>) -> Json<ValidationResult> {
    Json(ValidationController::validate_address(address))
}

async fn format_phone(
    Json(request): Json<FormatPhoneRequest>,
) -> Result<Json<FormatPhoneResponse>, AppError> {
    Ok(Json(ValidationController::format_phone(request)?))
}

async fn mask_value(Json(request): Json<MaskRequest>) -> Result<Json<MaskResponse>, AppError> {
    Ok(Json(ValidationController::mask(request)?))
}
