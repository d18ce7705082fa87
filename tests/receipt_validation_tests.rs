use gramadales_recibos::receipt::validation::{
    validate_amount, validate_dni, validate_required, ValidationError, ValidationErrors,
};
use gramadales_recibos::receipt::Amount;

#[test]
fn test_validate_required_empty() {
    let mut errors = ValidationErrors::new();
    validate_required("   ", "client_full_name", "Nombre del cliente", &mut errors);
    assert_eq!(errors.len(), 1);
    assert!(errors
        .to_message()
        .contains("Nombre del cliente no puede estar vacío"));
}

#[test]
fn test_validate_required_valid() {
    let mut errors = ValidationErrors::new();
    validate_required("Rosa Huamán", "client_full_name", "Nombre del cliente", &mut errors);
    assert!(errors.is_empty());
}

#[test]
fn test_validate_dni_valid() {
    let mut errors = ValidationErrors::new();
    validate_dni(" 45678912 ", "client_dni", &mut errors);
    assert!(errors.is_empty());
}

#[test]
fn test_validate_dni_invalid_length() {
    let mut errors = ValidationErrors::new();
    validate_dni("123456", "client_dni", &mut errors);
    assert_eq!(errors.len(), 1);
    assert!(errors.to_message().contains("8 dígitos"));
}

#[test]
fn test_validate_amount_upper_bound() {
    let mut errors = ValidationErrors::new();
    validate_amount(Amount::from_cents(99_999_999), "monto", &mut errors);
    assert!(errors.is_empty());

    validate_amount(Amount::from_cents(100_000_000), "monto", &mut errors);
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["monto"]);
}

#[test]
fn test_validation_errors_message() {
    let mut errors = ValidationErrors::new();
    errors.add(ValidationError::empty_field("concepto", "Concepto"));
    errors.add(ValidationError::invalid_dni("client_dni"));

    let msg = errors.to_message();
    assert!(msg.contains("2 error(es)"));
    assert!(msg.contains("1. [concepto] Concepto no puede estar vacío"));
    assert!(msg.contains("8 dígitos"));
    assert!(errors.into_result().is_err());
}
