//! Input validation for receipt requests.
//!
//! Errors are collected rather than returned on the first failure, so the
//! dashboard can show every problem with a form at once.

use std::fmt;

use super::amount::Amount;
use super::words::LIMITE_MONTO;

/// Validation error with a user-facing message.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message in Spanish
    pub message: String,
    /// Suggestion for how to fix the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create error for empty required field
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} no puede estar vacío", label)).with_suggestion(format!(
            "Ingrese un valor válido para {}",
            label.to_lowercase()
        ))
    }

    pub fn invalid_dni(field: &str) -> Self {
        Self::new(field, "El DNI debe tener 8 dígitos")
            .with_suggestion("Verifique el documento de identidad, ejemplo: 45678912")
    }

    pub fn zero_amount(field: &str) -> Self {
        Self::new(field, "El monto debe ser mayor a cero")
    }

    pub fn excessive_amount(field: &str, amount: Amount) -> Self {
        Self::new(field, format!("El monto S/ {} es demasiado alto", amount)).with_suggestion(
            format!("El recibo admite montos menores a S/ {}", LIMITE_MONTO),
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    /// Numbered message listing every error, as shown by the dashboard.
    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Validación fallida: {} error(es) encontrado(s)\n",
            self.errors.len()
        )];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.push(String::new());
        parts.push("Corrija los datos indicados e intente nuevamente.".to_string());

        parts.join("\n")
    }

    /// Ok if no errors, Err with the formatted message otherwise
    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate a Peruvian DNI (8 digits)
pub fn validate_dni(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "DNI"));
        return;
    }

    if trimmed.len() != 8 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        errors.add(ValidationError::invalid_dni(field));
    }
}

/// Validate that the amount is printable on a receipt
pub fn validate_amount(amount: Amount, field: &str, errors: &mut ValidationErrors) {
    if amount.cents() == 0 {
        errors.add(ValidationError::zero_amount(field));
    } else if amount.soles() >= LIMITE_MONTO {
        errors.add(ValidationError::excessive_amount(field, amount));
    }
}
