//! Estado de edición de los campos del perfil
//!
//! Cada campo editable guarda el valor confirmado, el buffer de edición y
//! las banderas de edición/guardado. La persistencia la hace quien llama:
//! este módulo solo invoca el callback de guardado y refleja su resultado.

use std::future::Future;

use crate::utils::validation::{
    format_phone, mask_email, mask_phone, validate_address, validate_field, AddressFields,
    ProfileField, ValidationResult,
};

/// Valor mostrado cuando el usuario no ha rellenado el campo
pub const NOT_PROVIDED: &str = "Non renseigné";

/// Valor que puede editarse en un [`FieldState`]
pub trait FieldValue: Clone + Default + PartialEq {
    /// Vacío o igual a [`NOT_PROVIDED`]
    fn is_incomplete(&self) -> bool;
}

impl FieldValue for String {
    fn is_incomplete(&self) -> bool {
        let trimmed = self.trim();
        trimmed.is_empty() || trimmed == NOT_PROVIDED
    }
}

impl FieldValue for AddressFields {
    fn is_incomplete(&self) -> bool {
        self.address.is_incomplete() || self.postal_code.is_incomplete()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState<V> {
    committed: V,
    buffer: V,
    editing: bool,
    error: Option<String>,
    saving: bool,
}

impl<V: FieldValue> FieldState<V> {
    pub fn new(committed: V) -> Self {
        Self {
            buffer: committed.clone(),
            committed,
            editing: false,
            error: None,
            saving: false,
        }
    }

    pub fn committed(&self) -> &V {
        &self.committed
    }

    pub fn buffer(&self) -> &V {
        &self.buffer
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_incomplete(&self) -> bool {
        self.committed.is_incomplete()
    }

    /// Pasar a modo edición con el buffer inicializado al valor confirmado
    pub fn edit(&mut self) {
        if self.editing {
            return;
        }
        self.buffer = self.committed.clone();
        self.error = None;
        self.editing = true;
    }

    /// Reemplazar el buffer. No valida.
    pub fn change(&mut self, value: V) {
        if self.editing && !self.saving {
            self.buffer = value;
        }
    }

    /// Acceso mutable al buffer (p. ej. un sub-campo de la dirección)
    pub fn buffer_mut(&mut self) -> Option<&mut V> {
        (self.editing && !self.saving).then_some(&mut self.buffer)
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Marcar el guardado en curso y devolver el valor a persistir.
    /// `None` si no se está editando o ya hay un guardado en curso.
    pub fn begin_save(&mut self) -> Option<V> {
        if !self.editing || self.saving {
            return None;
        }
        self.saving = true;
        Some(self.buffer.clone())
    }

    /// Aplicar el resultado del guardado externo
    pub fn finish_save(&mut self, outcome: Result<(), String>) {
        if !self.saving {
            return;
        }
        self.saving = false;
        match outcome {
            Ok(()) => {
                self.committed = self.buffer.clone();
                self.editing = false;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Guardar con un callback asíncrono. Devuelve `true` si se confirmó.
    pub async fn save_with<F, Fut>(&mut self, save: F) -> bool
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Result<(), String>>,
    {
        let Some(value) = self.begin_save() else {
            return false;
        };
        let outcome = save(value).await;
        let confirmed = outcome.is_ok();
        self.finish_save(outcome);
        confirmed
    }

    /// Salir de edición descartando el buffer
    pub fn cancel(&mut self) {
        if self.saving {
            return;
        }
        self.buffer = self.committed.clone();
        self.editing = false;
        self.error = None;
    }
}

/// Campo escalar del perfil (email, teléfono, nombre, fecha de nacimiento)
#[derive(Debug, Clone)]
pub struct ScalarField {
    kind: ProfileField,
    pub state: FieldState<String>,
    masked: bool,
}

impl ScalarField {
    pub fn new(kind: ProfileField, committed: impl Into<String>) -> Self {
        let masked = Self::is_maskable(&kind);
        Self {
            kind,
            state: FieldState::new(committed.into()),
            masked,
        }
    }

    fn is_maskable(kind: &ProfileField) -> bool {
        matches!(kind, ProfileField::Email | ProfileField::Phone)
    }

    pub fn kind(&self) -> &ProfileField {
        &self.kind
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// Alternar el enmascarado. Solo cambia la presentación.
    pub fn toggle_mask(&mut self) {
        if Self::is_maskable(&self.kind) {
            self.masked = !self.masked;
        }
    }

    /// Validar el buffer y guardar el error, si lo hay, en el estado
    pub fn validate_buffer(&mut self) -> ValidationResult {
        let result = validate_field(&self.kind, self.state.buffer());
        self.state.set_error(result.error.clone());
        result
    }

    /// Valor a mostrar fuera del modo edición
    pub fn display_value(&self) -> String {
        let committed = self.state.committed();
        if committed.is_incomplete() {
            return NOT_PROVIDED.to_string();
        }
        match (&self.kind, self.masked) {
            (ProfileField::Email, true) => mask_email(committed),
            (ProfileField::Phone, true) => mask_phone(committed),
            (ProfileField::Phone, false) => format_phone(committed),
            _ => committed.clone(),
        }
    }
}

/// Campo de dirección con sus cinco sub-campos
#[derive(Debug, Clone, Default)]
pub struct AddressField {
    pub state: FieldState<AddressFields>,
}

impl AddressField {
    pub fn new(committed: AddressFields) -> Self {
        Self {
            state: FieldState::new(committed),
        }
    }

    pub fn validate_buffer(&mut self) -> ValidationResult {
        let result = validate_address(self.state.buffer());
        self.state.set_error(result.error.clone());
        result
    }

    pub fn display_value(&self) -> String {
        let address = self.state.committed();
        if address.is_incomplete() {
            return NOT_PROVIDED.to_string();
        }
        [&address.address, &address.complement, &address.postal_code]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Campos editables de la vista de perfil
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub email: ScalarField,
    pub phone: ScalarField,
    pub display_name: ScalarField,
    pub birth_date: ScalarField,
    pub address: AddressField,
}

impl ProfileView {
    pub fn new(
        email: &str,
        phone: &str,
        display_name: &str,
        birth_date: &str,
        address: AddressFields,
    ) -> Self {
        Self {
            email: ScalarField::new(ProfileField::Email, email),
            phone: ScalarField::new(ProfileField::Phone, phone),
            display_name: ScalarField::new(ProfileField::DisplayName, display_name),
            birth_date: ScalarField::new(ProfileField::BirthDate, birth_date),
            address: AddressField::new(address),
        }
    }

    /// Nombres de los campos que muestran el aviso de "incompleto"
    pub fn incomplete_fields(&self) -> Vec<&'static str> {
        let scalars = [
            ("email", &self.email),
            ("phone", &self.phone),
            ("displayName", &self.display_name),
            ("birthDate", &self.birth_date),
        ];
        let mut missing: Vec<&'static str> = scalars
            .into_iter()
            .filter(|(_, field)| field.state.is_incomplete())
            .map(|(name, _)| name)
            .collect();
        if self.address.state.is_incomplete() {
            missing.push("address");
        }
        missing
    }
}
