// Driver layer: callers of the sorter that supply literal packages and format
// what comes back. Nothing in `core` or `domain` depends on this module.

pub mod demo;

use crate::domain::model::PackageMeasurement;

/// `3307949` -> `3,307,949`
pub fn format_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Thousands-separated volume, or `overflow` when the product does not fit.
pub fn format_volume(volume: Option<u128>) -> String {
    volume.map_or_else(|| "overflow".to_string(), format_thousands)
}

pub fn describe(m: &PackageMeasurement) -> String {
    format!(
        "{}x{}x{} cm, {} kg (Vol: {} cm³)",
        m.width(),
        m.height(),
        m.length(),
        m.mass(),
        format_volume(m.volume())
    )
}
