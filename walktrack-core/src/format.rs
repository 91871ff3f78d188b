//! Display formatting for the `es-ES` page.

/// `HH:MM:SS`, hours keep growing past 99.
#[must_use]
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Integer with `.` thousands separators.
///
/// Spanish formatting leaves four-digit numbers ungrouped (`1234`) and only
/// groups from five digits up (`12.345`).
#[must_use]
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 4 {
        return digits;
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Kilometres in shortest form: `0.2`, `1`, `2.5`.
#[must_use]
pub fn format_km(km: f64) -> String {
    format!("{km}")
}
