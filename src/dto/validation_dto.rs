use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para validar un campo del perfil
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateFieldRequest {
    #[validate(length(min = 1, max = 64))]
    pub field: String,

    #[serde(default)]
    #[validate(length(max = 512))]
    pub value: String,
}

// Request para formatear un teléfono
#[derive(Debug, Deserialize, Validate)]
pub struct FormatPhoneRequest {
    #[validate(length(max = 64))]
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct FormatPhoneResponse {
    pub formatted: String,
}

// Request para enmascarar un email o teléfono
#[derive(Debug, Deserialize, Validate)]
pub struct MaskRequest {
    pub field: String,

    #[validate(length(max = 512))]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct MaskResponse {
    pub masked: String,
}
