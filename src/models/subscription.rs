//! Opciones de suscripción de un vehículo
//!
//! Tres familias de opciones (compromiso, kilometraje, seguro) más el
//! recargo por conductor adicional, y el cálculo de la cuota mensual.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::CatalogError;

/// Duración de compromiso con su precio mensual (0 meses = sin compromiso)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementTier {
    pub months: u32,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Franquicia kilométrica mensual con su suplemento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MileageTier {
    pub km_per_month: u32,
    pub additional_price: Decimal,
}

/// Nivel de seguro con su franquicia y suplemento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceTier {
    #[serde(rename = "type")]
    pub kind: String,
    pub franchise: Decimal,
    pub additional_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionOptions {
    pub engagement: Vec<EngagementTier>,
    pub mileage: Vec<MileageTier>,
    pub insurance: Vec<InsuranceTier>,
    pub additional_driver_price: Decimal,
}

/// Selección del cliente. Kilometraje y seguro vacíos = opción sin suplemento.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteSelection {
    pub engagement_months: u32,
    pub km_per_month: Option<u32>,
    pub insurance: Option<String>,
    pub additional_drivers: u32,
}

/// Desglose de la cuota mensual
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub engagement_months: u32,
    pub km_per_month: u32,
    pub insurance: String,
    pub additional_drivers: u32,
    pub monthly_base: Decimal,
    pub mileage_supplement: Decimal,
    pub insurance_supplement: Decimal,
    pub additional_driver_supplement: Decimal,
    pub monthly_total: Decimal,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuoteError {
    #[error("No engagement tier of {0} months")]
    UnknownEngagement(u32),

    #[error("No mileage tier of {0} km/month")]
    UnknownMileage(u32),

    #[error("No insurance tier '{0}'")]
    UnknownInsurance(String),

    #[error("No included mileage or insurance tier")]
    MissingIncludedTier,
}

impl SubscriptionOptions {
    /// Comprobar las invariantes de las opciones de `vehicle_id`
    pub fn validate(&self, vehicle_id: &str) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidSubscription {
            vehicle: vehicle_id.to_string(),
            reason: reason.to_string(),
        };

        if self.engagement.is_empty() {
            return Err(invalid("no engagement tier"));
        }

        let has_negative = self.engagement.iter().any(|t| t.price.is_sign_negative())
            || self.mileage.iter().any(|t| t.additional_price.is_sign_negative())
            || self
                .insurance
                .iter()
                .any(|t| t.additional_price.is_sign_negative() || t.franchise.is_sign_negative())
            || self.additional_driver_price.is_sign_negative();
        if has_negative {
            return Err(invalid("negative price"));
        }

        for pair in self.mileage.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if upper.km_per_month <= lower.km_per_month {
                return Err(invalid("mileage allowances must increase"));
            }
            if upper.additional_price < lower.additional_price {
                return Err(invalid("mileage prices must not decrease"));
            }
        }

        if self.included_mileage().is_none() {
            return Err(invalid("no included mileage tier"));
        }
        if self.included_insurance().is_none() {
            return Err(invalid("no included insurance tier"));
        }

        Ok(())
    }

    /// Tier de kilometraje sin suplemento
    pub fn included_mileage(&self) -> Option<&MileageTier> {
        self.mileage.iter().find(|t| t.additional_price.is_zero())
    }

    /// Tier de seguro sin suplemento
    pub fn included_insurance(&self) -> Option<&InsuranceTier> {
        self.insurance.iter().find(|t| t.additional_price.is_zero())
    }

    pub fn quote(&self, selection: &QuoteSelection) -> Result<Quote, QuoteError> {
        let engagement = self
            .engagement
            .iter()
            .find(|t| t.months == selection.engagement_months)
            .ok_or(QuoteError::UnknownEngagement(selection.engagement_months))?;

        let mileage = match selection.km_per_month {
            Some(km) => self
                .mileage
                .iter()
                .find(|t| t.km_per_month == km)
                .ok_or(QuoteError::UnknownMileage(km))?,
            None => self.included_mileage().ok_or(QuoteError::MissingIncludedTier)?,
        };

        let insurance = match selection.insurance.as_deref() {
            Some(kind) => self
                .insurance
                .iter()
                .find(|t| t.kind.eq_ignore_ascii_case(kind))
                .ok_or_else(|| QuoteError::UnknownInsurance(kind.to_string()))?,
            None => self.included_insurance().ok_or(QuoteError::MissingIncludedTier)?,
        };

        let additional_driver_supplement =
            self.additional_driver_price * Decimal::from(selection.additional_drivers);
        let monthly_total = (engagement.price
            + mileage.additional_price
            + insurance.additional_price
            + additional_driver_supplement)
            .round_dp(2);

        Ok(Quote {
            engagement_months: engagement.months,
            km_per_month: mileage.km_per_month,
            insurance: insurance.kind.clone(),
            additional_drivers: selection.additional_drivers,
            monthly_base: engagement.price,
            mileage_supplement: mileage.additional_price,
            insurance_supplement: insurance.additional_price,
            additional_driver_supplement,
            monthly_total,
        })
    }
}
