use validator::Validate;

use crate::dto::validation_dto::{
    FormatPhoneRequest, FormatPhoneResponse, MaskRequest, MaskResponse, ValidateFieldRequest,
};
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::{
    format_phone, mask_email, mask_phone, validate_address, validate_field, AddressFields,
    ProfileField, ValidationResult,
};

/// Exposición HTTP del módulo de validación. Sin estado.
pub struct ValidationController;

impl ValidationController {
    pub fn validate_field(request: ValidateFieldRequest) -> Result<ValidationResult, AppError> {
        request.validate()?;
        let field = match request.field.parse::<ProfileField>() {
            Ok(field) => field,
            Err(never) => match never {},
        };
        Ok(validate_field(&field, &request.value))
    }

    pub fn validate_address(address: AddressFields) -> ValidationResult {
        validate_address(&address)
    }

    pub fn format_phone(request: FormatPhoneRequest) -> Result<FormatPhoneResponse, AppError> {
        request.validate()?;
        Ok(FormatPhoneResponse {
            formatted: format_phone(&request.phone),
        })
    }

    pub fn mask(request: MaskRequest) -> Result<MaskResponse, AppError> {
        request.validate()?;
        let masked = match request.field.as_str() {
            "email" => mask_email(&request.value),
            "phone" => mask_phone(&request.value),
            other => {
                return Err(bad_request_error(&format!(
                    "Field '{}' cannot be masked (expected email or phone)",
                    other
                )))
            }
        };
        Ok(MaskResponse { masked })
    }
}
