//! Utilidades de validación
//!
//! Validación de campos de perfil (email, teléfono, fecha de nacimiento,
//! nombre, código postal) y transformaciones de presentación
//! (formato de teléfono y enmascarado).
//!
//! Ninguna función de este módulo falla: los errores se devuelven
//! dentro de [`ValidationResult`] para mostrarse tal cual en el formulario.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex");
    static ref DISPLAY_NAME_REGEX: Regex =
        Regex::new(r"^[a-zA-ZÀ-ÿ\s'-]+$").expect("display name regex");
    static ref POSTAL_CODE_REGEX: Regex = Regex::new(r"^[0-9]{5}$").expect("postal code regex");
}

pub const REQUIRED_MESSAGE: &str = "Ce champ est requis";
pub const INVALID_EMAIL_MESSAGE: &str = "Adresse email invalide";
pub const INVALID_PHONE_MESSAGE: &str = "Numéro de téléphone invalide (9 à 15 chiffres)";
pub const INVALID_DATE_MESSAGE: &str = "Format de date invalide";
pub const FUTURE_DATE_MESSAGE: &str = "La date de naissance ne peut pas être dans le futur";
pub const TOO_YOUNG_MESSAGE: &str = "Vous devez avoir au moins 16 ans";
pub const TOO_OLD_MESSAGE: &str = "Date de naissance invalide";
pub const NAME_TOO_SHORT_MESSAGE: &str = "Le nom doit contenir au moins 2 caractères";
pub const INVALID_NAME_MESSAGE: &str =
    "Le nom ne peut contenir que des lettres, espaces, apostrophes et tirets";
pub const INVALID_POSTAL_CODE_MESSAGE: &str = "Code postal invalide (5 chiffres)";
pub const ADDRESS_REQUIRED_MESSAGE: &str = "L'adresse est requise";
pub const POSTAL_CODE_REQUIRED_MESSAGE: &str = "Le code postal est requis";

const PHONE_MIN_DIGITS: usize = 9;
const PHONE_MAX_DIGITS: usize = 15;
const MIN_AGE: i32 = 16;
const MAX_AGE: i32 = 120;

/// Campo de perfil validable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileField {
    Email,
    Phone,
    BirthDate,
    DisplayName,
    PostalCode,
    /// Cualquier otro campo: solo se exige que no esté vacío
    Other(String),
}

impl ProfileField {
    pub fn as_str(&self) -> &str {
        match self {
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::BirthDate => "birthDate",
            ProfileField::DisplayName => "displayName",
            ProfileField::PostalCode => "postal_code",
            ProfileField::Other(name) => name,
        }
    }
}

impl FromStr for ProfileField {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "email" => ProfileField::Email,
            "phone" => ProfileField::Phone,
            "birthDate" => ProfileField::BirthDate,
            "displayName" => ProfileField::DisplayName,
            "postal_code" => ProfileField::PostalCode,
            other => ProfileField::Other(other.to_string()),
        })
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-campos de una dirección postal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub complement: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub door: String,
}

/// Resultado de una validación de campo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            error: Some(message.to_string()),
        }
    }
}

/// Validar un campo de perfil contra la fecha de hoy
pub fn validate_field(field: &ProfileField, value: &str) -> ValidationResult {
    validate_field_on(field, value, Local::now().date_naive())
}

/// Validar un campo de perfil tomando `today` como fecha de referencia
pub fn validate_field_on(field: &ProfileField, value: &str, today: NaiveDate) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::invalid(REQUIRED_MESSAGE);
    }

    match field {
        ProfileField::Email => {
            if EMAIL_REGEX.is_match(value) {
                ValidationResult::valid()
            } else {
                ValidationResult::invalid(INVALID_EMAIL_MESSAGE)
            }
        }
        ProfileField::Phone => {
            let digits = value.chars().filter(char::is_ascii_digit).count();
            if (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
                ValidationResult::valid()
            } else {
                ValidationResult::invalid(INVALID_PHONE_MESSAGE)
            }
        }
        ProfileField::BirthDate => validate_birth_date(value, today),
        ProfileField::DisplayName => {
            let trimmed = value.trim();
            if trimmed.chars().count() < 2 {
                ValidationResult::invalid(NAME_TOO_SHORT_MESSAGE)
            } else if !DISPLAY_NAME_REGEX.is_match(trimmed) {
                ValidationResult::invalid(INVALID_NAME_MESSAGE)
            } else {
                ValidationResult::valid()
            }
        }
        ProfileField::PostalCode => {
            if POSTAL_CODE_REGEX.is_match(value) {
                ValidationResult::valid()
            } else {
                ValidationResult::invalid(INVALID_POSTAL_CODE_MESSAGE)
            }
        }
        ProfileField::Other(_) => ValidationResult::valid(),
    }
}

/// Fechas aceptadas: `YYYY-MM-DD` (input HTML) o `DD/MM/YYYY`
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .ok()
}

// La edad es año actual menos año de nacimiento, sin ajustar por mes/día.
fn validate_birth_date(value: &str, today: NaiveDate) -> ValidationResult {
    let Some(birth) = parse_date(value) else {
        return ValidationResult::invalid(INVALID_DATE_MESSAGE);
    };

    if birth > today {
        return ValidationResult::invalid(FUTURE_DATE_MESSAGE);
    }

    let age = today.year() - birth.year();
    if age < MIN_AGE {
        ValidationResult::invalid(TOO_YOUNG_MESSAGE)
    } else if age > MAX_AGE {
        ValidationResult::invalid(TOO_OLD_MESSAGE)
    } else {
        ValidationResult::valid()
    }
}

/// Validar una dirección: `address` y `postal_code` obligatorios.
/// `complement`, `floor` y `door` no se validan.
pub fn validate_address(address: &AddressFields) -> ValidationResult {
    if address.address.trim().is_empty() {
        return ValidationResult::invalid(ADDRESS_REQUIRED_MESSAGE);
    }
    if address.postal_code.trim().is_empty() {
        return ValidationResult::invalid(POSTAL_CODE_REQUIRED_MESSAGE);
    }
    validate_field(&ProfileField::PostalCode, &address.postal_code)
}

/// Formatear un teléfono marroquí (`+212 X XX XX XX XX`) o francés
/// (`XX XX XX XX XX`). Cualquier otro número se devuelve tal cual.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    if digits.len() == 12 && digits.starts_with("212") {
        let (prefix, rest) = digits.split_at(4);
        return format!("+212 {} {}", &prefix[3..], group_pairs(rest));
    }

    if digits.len() == 10 && digits.starts_with('0') {
        return group_pairs(&digits);
    }

    phone.to_string()
}

fn group_pairs(digits: &str) -> String {
    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Enmascarar un email: `alice@example.com` -> `al***@example.com`
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    if local.is_empty() || domain.is_empty() {
        return email.to_string();
    }

    let local_len = local.chars().count();
    if local_len <= 2 {
        return email.to_string();
    }

    let visible: String = local.chars().take(2).collect();
    let hidden = "*".repeat((local_len - 2).max(3));
    format!("{visible}{hidden}@{domain}")
}

/// Enmascarar un teléfono conservando los dos primeros grupos del formato.
///
/// Cada grupo restante se sustituye por `**`: `06 12 34 56 78` ->
/// `06 12 ** ** **`, `+212 6 12 34 56 78` -> `+212 6 ** ** ** **`.
/// Sin grupos reconocibles se conservan los tres primeros y tres últimos
/// caracteres.
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() < 6 {
        return phone.to_string();
    }

    let formatted = format_phone(phone);
    let groups: Vec<&str> = formatted.split(' ').collect();
    if let [first, second, rest @ ..] = groups.as_slice() {
        if !rest.is_empty() {
            let hidden = vec!["**"; rest.len()].join(" ");
            return format!("{first} {second} {hidden}");
        }
    }

    let head: String = chars.iter().take(3).collect();
    let tail: String = chars.iter().skip(chars.len() - 3).collect();
    format!("{head}{}{tail}", "*".repeat(chars.len() - 6))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn check(field: &str, value: &str) -> ValidationResult {
        let field: ProfileField = field.parse().unwrap();
        validate_field_on(&field, value, today())
    }

    #[test]
    fn test_blank_values_are_required_for_every_field() {
        for field in ["email", "phone", "birthDate", "displayName", "postal_code", "city"] {
            for value in ["", "   ", "\t\n"] {
                let result = check(field, value);
                assert!(!result.is_valid, "{field} accepted {value:?}");
                assert_eq!(result.error.as_deref(), Some(REQUIRED_MESSAGE));
            }
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(check("email", "a@b.co").is_valid);
        assert!(check("email", "jean.dupont@example.fr").is_valid);
        assert!(!check("email", "not-an-email").is_valid);
        assert!(!check("email", "a@b").is_valid);
        assert!(!check("email", "a@@b.co").is_valid);
        assert!(!check("email", "a b@c.co").is_valid);
        assert_eq!(
            check("email", "test@").error.as_deref(),
            Some(INVALID_EMAIL_MESSAGE)
        );
    }

    #[test]
    fn test_validate_phone() {
        assert!(check("phone", "0612345678").is_valid);
        assert!(check("phone", "+212 6 12 34 56 78").is_valid);
        assert!(check("phone", "123456789").is_valid);
        assert!(!check("phone", "12345").is_valid);
        assert!(!check("phone", "1234567890123456").is_valid);
        assert!(!check("phone", "abc").is_valid);
    }

    #[test]
    fn test_validate_postal_code() {
        assert!(check("postal_code", "75001").is_valid);
        assert!(!check("postal_code", "7500").is_valid);
        assert!(!check("postal_code", "AB123").is_valid);
        assert!(!check("postal_code", "750011").is_valid);
        assert!(!check("postal_code", "٧٥٠٠١").is_valid);
    }

    #[test]
    fn test_validate_birth_date_age_bounds() {
        assert!(check("birthDate", "2010-10-14").is_valid);
        assert!(check("birthDate", "14/10/2010").is_valid);

        let too_young = check("birthDate", "2011-01-01");
        assert_eq!(too_young.error.as_deref(), Some(TOO_YOUNG_MESSAGE));

        assert!(check("birthDate", "1906-01-01").is_valid);
        let too_old = check("birthDate", "1905-12-31");
        assert_eq!(too_old.error.as_deref(), Some(TOO_OLD_MESSAGE));
    }

    #[test]
    fn test_birth_date_age_ignores_month_and_day() {
        // Nacido más tarde en el año: sigue contando como 16 años
        assert!(check("birthDate", "2010-12-31").is_valid);
    }

    #[test]
    fn test_birth_date_day_after_sixteenth_birthday_still_counts_as_sixteen() {
        // Un día después de la fecha de hace 16 años: la diferencia de años
        // sigue siendo 16, así que la fecha se acepta.
        assert!(check("birthDate", "2010-10-15").is_valid);
        assert!(!check("birthDate", "2011-10-14").is_valid);
    }

    #[test]
    fn test_validate_birth_date_rejects_future_and_garbage() {
        let future = check("birthDate", "2026-10-15");
        assert_eq!(future.error.as_deref(), Some(FUTURE_DATE_MESSAGE));

        let garbage = check("birthDate", "hier");
        assert_eq!(garbage.error.as_deref(), Some(INVALID_DATE_MESSAGE));
        assert!(!check("birthDate", "2020-02-30").is_valid);
    }

    #[test]
    fn test_validate_display_name() {
        assert!(check("displayName", "Jean-Luc").is_valid);
        assert!(check("displayName", "Hélène D'Artois").is_valid);
        assert_eq!(
            check("displayName", " J ").error.as_deref(),
            Some(NAME_TOO_SHORT_MESSAGE)
        );
        assert_eq!(
            check("displayName", "R2D2").error.as_deref(),
            Some(INVALID_NAME_MESSAGE)
        );
    }

    #[test]
    fn test_other_fields_only_need_a_value() {
        assert!(check("city", "Paris").is_valid);
        assert!(check("anything", "x").is_valid);
    }

    #[test]
    fn test_validate_address() {
        let mut address = AddressFields {
            address: "12 rue de la Paix".to_string(),
            postal_code: "75002".to_string(),
            ..Default::default()
        };
        assert!(validate_address(&address).is_valid);

        address.postal_code = "752".to_string();
        assert_eq!(
            validate_address(&address).error.as_deref(),
            Some(INVALID_POSTAL_CODE_MESSAGE)
        );

        address.postal_code = " ".to_string();
        assert_eq!(
            validate_address(&address).error.as_deref(),
            Some(POSTAL_CODE_REQUIRED_MESSAGE)
        );

        address.address.clear();
        assert_eq!(
            validate_address(&address).error.as_deref(),
            Some(ADDRESS_REQUIRED_MESSAGE)
        );
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("0612345678"), "06 12 34 56 78");
        assert_eq!(format_phone("06.12.34.56.78"), "06 12 34 56 78");
        assert_eq!(format_phone("212612345678"), "+212 6 12 34 56 78");
        assert_eq!(format_phone("+212 612-345-678"), "+212 6 12 34 56 78");
        assert_eq!(format_phone("+33612345678"), "+33612345678");
        assert_eq!(format_phone("12345"), "12345");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ab@example.com"), "ab@example.com");
        assert_eq!(mask_email("alice@example.com"), "al***@example.com");
        assert_eq!(mask_email("abcdefgh@example.com"), "ab******@example.com");
        assert_eq!(mask_email("no-at-sign"), "no-at-sign");
        assert_eq!(mask_email("alice@"), "alice@");
        assert_eq!(mask_email("élodie@example.fr"), "él****@example.fr");
    }

    #[test]
    fn test_mask_phone_grouped() {
        assert_eq!(mask_phone("0612345678"), "06 12 ** ** **");
        assert_eq!(mask_phone("06 12 34 56 78"), "06 12 ** ** **");
        assert_eq!(mask_phone("212612345678"), "+212 6 ** ** ** **");
    }

    #[test]
    fn test_mask_phone_hides_only_existing_groups() {
        assert_eq!(mask_phone("12 34 56"), "12 34 **");
        assert_eq!(mask_phone("+33 6 12 34 56 78 90"), "+33 6 ** ** ** ** **");
    }

    #[test]
    fn test_mask_phone_fallback() {
        assert_eq!(mask_phone("12345"), "12345");
        assert_eq!(mask_phone("123456789"), "123***789");
        assert_eq!(mask_phone("+33612345678"), "+33******678");
    }

    #[test]
    fn test_profile_field_names() {
        assert_eq!("birthDate".parse::<ProfileField>().unwrap(), ProfileField::BirthDate);
        assert_eq!(ProfileField::PostalCode.to_string(), "postal_code");
        assert_eq!(
            "complement".parse::<ProfileField>().unwrap(),
            ProfileField::Other("complement".to_string())
        );
    }

    #[test]
    fn test_validation_result_json_shape() {
        let ok = serde_json::to_value(ValidationResult::valid()).unwrap();
        assert_eq!(ok, serde_json::json!({ "isValid": true }));

        let ko = serde_json::to_value(ValidationResult::invalid(REQUIRED_MESSAGE)).unwrap();
        assert_eq!(ko["isValid"], false);
        assert_eq!(ko["error"], REQUIRED_MESSAGE);
    }
}
