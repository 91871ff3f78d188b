//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Round a f64 and clamp it to the u32 range, returning 0 for NaN values.
#[must_use]
pub fn round_f64_to_u32(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    let max = cast::<u32, f64>(u32::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(0.0, max).round();
    cast::<f64, u32>(clamped).unwrap_or(0)
}

/// Convert u64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Round to one decimal place, the precision distances are displayed with.
///
/// Rounds the stored binary value, so `0.35` (held as `0.3499…`) becomes `0.3`.
#[must_use]
pub fn round_to_tenths(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    format!("{value:.1}").parse().unwrap_or(0.0)
}
