use serde::Deserialize;
use validator::Validate;

use crate::models::QuoteSelection;

// Request para calcular la cuota mensual de un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub engagement_months: u32,

    pub km_per_month: Option<u32>,

    #[validate(length(min = 1, max = 64))]
    pub insurance: Option<String>,

    #[serde(default)]
    #[validate(range(max = 4))]
    pub additional_drivers: u32,
}

impl From<QuoteRequest> for QuoteSelection {
    fn from(request: QuoteRequest) -> Self {
        Self {
            engagement_months: request.engagement_months,
            km_per_month: request.km_per_month,
            insurance: request.insurance,
            additional_drivers: request.additional_drivers,
        }
    }
}
