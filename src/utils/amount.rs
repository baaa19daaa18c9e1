//! Amount utilities: parsing and formatting labor / parts costs.

use crate::errors::{AppError, AppResult};

/// Parse a non-negative amount. Accepts both `12.5` and `12,5`.
pub fn parse_amount(s: &str) -> Option<f64> {
    let normalized = s.trim().replace(',', ".");
    let v: f64 = normalized.parse().ok()?;

    if v.is_finite() && v >= 0.0 {
        Some(v)
    } else {
        None
    }
}

pub fn parse_optional_amount(input: Option<&String>) -> AppResult<Option<f64>> {
    if let Some(s) = input {
        let v = parse_amount(s).ok_or_else(|| AppError::InvalidAmount(s.to_string()))?;
        Ok(Some(v))
    } else {
        Ok(None)
    }
}

/// `1234.5` → `"1 234.50"` (thousands separated by a space).
pub fn format_money(value: f64) -> String {
    let raw = format!("{:.2}", value.abs());
    let (int_part, dec_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{dec_part}")
}
