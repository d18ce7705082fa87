use gramadales_recibos::receipt::words::{LIMITE_MONTO, MONTO_EXCESIVO};
use gramadales_recibos::receipt::{amount_to_words, integer_to_words, Amount};

#[test]
fn test_reference_values() {
    assert_eq!(integer_to_words(0), "CERO");
    assert_eq!(integer_to_words(1), "UN");
    assert_eq!(integer_to_words(15), "QUINCE");
    assert_eq!(integer_to_words(21), "VEINTIUN");
    assert_eq!(integer_to_words(100), "CIEN");
    assert_eq!(integer_to_words(101), "CIENTO UN");
    assert_eq!(integer_to_words(200), "DOSCIENTOS");
    assert_eq!(integer_to_words(1000), "MIL");
    assert_eq!(integer_to_words(2000), "DOS MIL");
    assert_eq!(integer_to_words(1_000_000), "MONTO EXCESIVO");
}

#[test]
fn test_largest_supported_integer() {
    let words = integer_to_words(999_999);
    assert!(!words.is_empty());
    assert!(!words.chars().any(|c| c.is_ascii_digit()));
    assert_ne!(words, MONTO_EXCESIVO);
}

#[test]
fn test_every_supported_integer_is_spelled_out() {
    for n in (0..LIMITE_MONTO).step_by(7) {
        let words = integer_to_words(n);
        assert!(!words.is_empty(), "empty phrase for {}", n);
        assert!(
            words.chars().all(|c| c.is_ascii_uppercase() || c == ' '),
            "unexpected character in '{}' for {}",
            words,
            n
        );
        assert!(!words.contains("  "), "double space in '{}' for {}", words, n);
        assert_eq!(words, words.trim(), "padding in '{}' for {}", words, n);
    }
}

#[test]
fn test_amount_to_words_reference() {
    let amount = Amount::from_f64(250.00).unwrap();
    assert_eq!(amount_to_words(amount), "DOSCIENTOS CINCUENTA Y 00/100 SOLES");
}

#[test]
fn test_amount_to_words_centavos_only() {
    let words = amount_to_words(Amount::from_f64(0.05).unwrap());
    assert!(words.starts_with("CERO "));
    assert!(words.ends_with("05/100 SOLES"));
}

#[test]
fn test_amount_to_words_is_pure() {
    let amount = Amount::from_f64(1234.56).unwrap();
    let first = amount_to_words(amount);
    let second = amount_to_words(amount);
    assert_eq!(first, second);
    assert_eq!(first, "MIL DOSCIENTOS TREINTA Y CUATRO Y 56/100 SOLES");
}

#[test]
fn test_amount_output_alphabet() {
    for cents in [0u64, 1, 99, 100, 1_001, 25_000, 123_456, 99_999_999, 100_000_000] {
        let words = amount_to_words(Amount::from_cents(cents));
        assert!(words.ends_with("/100 SOLES"), "{}", words);
        assert!(
            words
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' ' || c == '/'),
            "unexpected character in '{}'",
            words
        );
    }
}

#[test]
fn test_excessive_amount_keeps_suffix() {
    let words = amount_to_words(Amount::from_cents(100_000_050));
    assert_eq!(words, "MONTO EXCESIVO Y 50/100 SOLES");
}
