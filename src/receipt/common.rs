//! Common utilities for receipt generation.
//!
//! Shared helpers for template rendering, date formatting, and file naming.

use chrono::{Datelike, NaiveDate};
use std::path::Path;

const MESES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format a date as printed in the receipt header (e.g., "05/03/2025").
pub fn format_numeric_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Format a date in long Spanish form (e.g., "5 de marzo del 2025").
pub fn format_spanish_date(date: NaiveDate) -> String {
    let month = MESES[(date.month0() as usize).min(MESES.len() - 1)];
    format!("{} de {} del {}", date.day(), month, date.year())
}

/// Escape special characters for Typst strings.
pub fn escape_typst_string(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}

/// Sanitize a string for use in filenames.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut result = String::new();
    let mut last_dash = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if (ch.is_whitespace() || ch == '-' || ch == '_') && !last_dash && !result.is_empty()
        {
            result.push('-');
            last_dash = true;
        }
    }

    let result = result.trim_matches('-');
    if result.is_empty() {
        return fallback.to_string();
    }

    result.to_string()
}

/// Get the static assets directory path.
pub fn get_static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numeric_date_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_numeric_date(date), "05/03/2025");
    }

    #[test]
    fn test_format_spanish_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_spanish_date(date), "31 de diciembre del 2024");
    }

    #[test]
    fn test_sanitize_keeps_correlative_digits() {
        assert_eq!(sanitize_filename("R-000123", "recibo"), "r-000123");
        assert_eq!(sanitize_filename("N° 45", "recibo"), "n-45");
        assert_eq!(sanitize_filename("°°", "recibo"), "recibo");
    }
}
