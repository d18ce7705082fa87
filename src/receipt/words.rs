//! Conversión de montos a letras para recibos.
//!
//! The phrases follow the wording already printed on the association's
//! receipts, so the vocabulary tables must stay exactly as listed.

use super::amount::Amount;

const UNIDADES: [&str; 10] = [
    "", "UN", "DOS", "TRES", "CUATRO", "CINCO", "SEIS", "SIETE", "OCHO", "NUEVE",
];

const DECENAS: [&str; 10] = [
    "", "DIEZ", "VEINTE", "TREINTA", "CUARENTA", "CINCUENTA", "SESENTA", "SETENTA", "OCHENTA",
    "NOVENTA",
];

const CENTENAS: [&str; 10] = [
    "",
    "CIENTO",
    "DOSCIENTOS",
    "TRESCIENTOS",
    "CUATROCIENTOS",
    "QUINIENTOS",
    "SEISCIENTOS",
    "SETECIENTOS",
    "OCHOCIENTOS",
    "NOVECIENTOS",
];

/// 11..=15; the rest of the teens fall back to `<UNIDAD> Y DIEZ`.
const ESPECIALES: [&str; 5] = ["ONCE", "DOCE", "TRECE", "CATORCE", "QUINCE"];

/// Returned for any integer part at or above [`LIMITE_MONTO`].
pub const MONTO_EXCESIVO: &str = "MONTO EXCESIVO";

/// First integer the converter no longer spells out.
pub const LIMITE_MONTO: u64 = 1_000_000;

/// Spell out `n` in uppercase Spanish.
///
/// Defined for every `u64`: values from [`LIMITE_MONTO`] upward produce
/// [`MONTO_EXCESIVO`]. Recursion is at most three levels deep.
pub fn integer_to_words(n: u64) -> String {
    match n {
        0 => "CERO".to_string(),
        1..=9 => UNIDADES[n as usize].to_string(),
        10 => "DIEZ".to_string(),
        11..=15 => ESPECIALES[(n - 11) as usize].to_string(),
        16..=19 => format!("{} Y DIEZ", UNIDADES[(n % 10) as usize]),
        20 => "VEINTE".to_string(),
        21..=29 => format!("VEINTI{}", UNIDADES[(n % 10) as usize]),
        30..=99 => {
            let decena = DECENAS[(n / 10) as usize];
            match n % 10 {
                0 => decena.to_string(),
                u => format!("{} Y {}", decena, UNIDADES[u as usize]),
            }
        }
        100 => "CIEN".to_string(),
        101..=199 => format!("CIENTO {}", integer_to_words(n - 100)),
        200..=999 => {
            let centena = CENTENAS[(n / 100) as usize];
            match n % 100 {
                0 => centena.to_string(),
                resto => format!("{} {}", centena, integer_to_words(resto)),
            }
        }
        1000 => "MIL".to_string(),
        1001..=1999 => format!("MIL {}", integer_to_words(n - 1000)),
        2000..=999_999 => {
            let miles = integer_to_words(n / 1000);
            match n % 1000 {
                0 => format!("{} MIL", miles),
                resto => format!("{} MIL {}", miles, integer_to_words(resto)),
            }
        }
        _ => MONTO_EXCESIVO.to_string(),
    }
}

/// Legal-receipt wording for `amount`: `<LETRAS> Y <NN>/100 SOLES`.
///
/// ```
/// use gramadales_recibos::receipt::{amount_to_words, Amount};
///
/// let monto = Amount::from_cents(25_000);
/// assert_eq!(amount_to_words(monto), "DOSCIENTOS CINCUENTA Y 00/100 SOLES");
/// ```
pub fn amount_to_words(amount: Amount) -> String {
    format!(
        "{} Y {:02}/100 SOLES",
        integer_to_words(amount.soles()),
        amount.centavos()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_and_zero() {
        assert_eq!(integer_to_words(0), "CERO");
        assert_eq!(integer_to_words(1), "UN");
        assert_eq!(integer_to_words(9), "NUEVE");
    }

    #[test]
    fn test_teens() {
        assert_eq!(integer_to_words(10), "DIEZ");
        assert_eq!(integer_to_words(11), "ONCE");
        assert_eq!(integer_to_words(15), "QUINCE");
        // Kept as printed on existing receipts.
        assert_eq!(integer_to_words(16), "SEIS Y DIEZ");
        assert_eq!(integer_to_words(19), "NUEVE Y DIEZ");
    }

    #[test]
    fn test_tens() {
        assert_eq!(integer_to_words(20), "VEINTE");
        assert_eq!(integer_to_words(21), "VEINTIUN");
        assert_eq!(integer_to_words(29), "VEINTINUEVE");
        assert_eq!(integer_to_words(30), "TREINTA");
        assert_eq!(integer_to_words(45), "CUARENTA Y CINCO");
        assert_eq!(integer_to_words(99), "NOVENTA Y NUEVE");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(integer_to_words(100), "CIEN");
        assert_eq!(integer_to_words(101), "CIENTO UN");
        assert_eq!(integer_to_words(115), "CIENTO QUINCE");
        assert_eq!(integer_to_words(200), "DOSCIENTOS");
        assert_eq!(integer_to_words(250), "DOSCIENTOS CINCUENTA");
        assert_eq!(integer_to_words(999), "NOVECIENTOS NOVENTA Y NUEVE");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(integer_to_words(1000), "MIL");
        assert_eq!(integer_to_words(1001), "MIL UN");
        assert_eq!(integer_to_words(1999), "MIL NOVECIENTOS NOVENTA Y NUEVE");
        assert_eq!(integer_to_words(2000), "DOS MIL");
        assert_eq!(integer_to_words(21_000), "VEINTIUN MIL");
        assert_eq!(integer_to_words(100_000), "CIEN MIL");
        assert_eq!(integer_to_words(101_500), "CIENTO UN MIL QUINIENTOS");
        assert_eq!(
            integer_to_words(999_999),
            "NOVECIENTOS NOVENTA Y NUEVE MIL NOVECIENTOS NOVENTA Y NUEVE"
        );
    }

    #[test]
    fn test_ceiling() {
        assert_eq!(integer_to_words(LIMITE_MONTO), MONTO_EXCESIVO);
        assert_eq!(integer_to_words(u64::MAX), MONTO_EXCESIVO);
    }

    #[test]
    fn test_amount_suffix() {
        assert_eq!(
            amount_to_words(Amount::from_cents(25_000)),
            "DOSCIENTOS CINCUENTA Y 00/100 SOLES"
        );
        assert_eq!(amount_to_words(Amount::from_cents(5)), "CERO Y 05/100 SOLES");
        assert_eq!(
            amount_to_words(Amount::from_cents(150_099)),
            "MIL QUINIENTOS Y 99/100 SOLES"
        );
    }
}
