//! Monto en soles con exactamente dos decimales.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while turning raw input into an [`Amount`].
#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("el monto no puede ser negativo: {0}")]
    Negative(String),
    #[error("el monto debe ser un número finito")]
    NonFinite,
    #[error("el monto '{0}' no es un número válido")]
    Invalid(String),
    #[error("el monto '{0}' excede el rango admitido")]
    OutOfRange(String),
}

/// A non-negative amount of soles, held as whole centavos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(u64);

impl Amount {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Normalize a float to two decimals.
    ///
    /// The value is printed with two fixed decimals (ties on the exact binary
    /// value go to even) and that text is split, so rounding happens once.
    pub fn from_f64(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NonFinite);
        }
        if value < 0.0 {
            return Err(AmountError::Negative(value.to_string()));
        }
        // -0.0 prints with a sign
        let value = if value == 0.0 { 0.0 } else { value };
        let fixed = format!("{:.2}", value);
        let (soles, centavos) = fixed
            .split_once('.')
            .ok_or_else(|| AmountError::Invalid(fixed.clone()))?;
        Self::from_parts(soles, centavos, &fixed)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Whole soles.
    pub const fn soles(self) -> u64 {
        self.0 / 100
    }

    /// Sub-unit part, always in `0..=99`.
    pub const fn centavos(self) -> u64 {
        self.0 % 100
    }

    fn from_parts(soles: &str, centavos: &str, original: &str) -> Result<Self, AmountError> {
        let soles: u64 = soles
            .parse()
            .map_err(|_| AmountError::OutOfRange(original.to_string()))?;
        let centavos: u64 = match centavos.len() {
            0 => Ok(0),
            1 => centavos.parse::<u64>().map(|d| d * 10),
            _ => centavos.parse::<u64>(),
        }
        .map_err(|_| AmountError::Invalid(original.to_string()))?;

        soles
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(centavos))
            .map(Self)
            .ok_or_else(|| AmountError::OutOfRange(original.to_string()))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Plain decimals with up to two fractional digits are read exactly.
    /// Anything else that still parses as a float goes through
    /// [`Amount::from_f64`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Invalid(s.to_string()));
        }

        let (soles, centavos) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        let exact = !soles.is_empty()
            && centavos.len() <= 2
            && soles.chars().all(|c| c.is_ascii_digit())
            && centavos.chars().all(|c| c.is_ascii_digit());
        if exact {
            return Self::from_parts(soles, centavos, trimmed);
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| AmountError::Invalid(trimmed.to_string()))?;
        Self::from_f64(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.soles(), self.centavos())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawAmount {
            Number(f64),
            Text(String),
        }

        match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(value) => Amount::from_f64(value),
            RawAmount::Text(text) => text.parse(),
        }
        .map_err(serde::de::Error::custom)
    }
}
