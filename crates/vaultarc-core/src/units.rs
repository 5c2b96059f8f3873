//! Unit helpers
//!
//! Room measurements are taken with a tape in feet and inches but every
//! computation runs in decimal inches. These helpers convert between the two.

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Combine a feet + inches measurement into decimal inches.
///
/// `feet_inches(12, 3.0)` is the `12*12+3` the room fixtures are written in.
pub const fn feet_inches(feet: u32, inches: f64) -> f64 {
    feet as f64 * INCHES_PER_FOOT + inches
}

/// Format decimal inches as a feet-and-inches label, e.g. `12' 3"`.
///
/// Fractional inches are kept to one decimal place; whole values drop it.
/// Negative lengths carry the sign on the feet component.
pub fn format_inches(value_in: f64) -> String {
    let sign = if value_in < 0.0 { "-" } else { "" };
    let total = (value_in.abs() * 10.0).round() / 10.0;
    let feet = (total / INCHES_PER_FOOT).floor();
    let inches = total - feet * INCHES_PER_FOOT;

    if inches.fract() == 0.0 {
        format!("{}{}' {}\"", sign, feet as u64, inches as u64)
    } else {
        format!("{}{}' {:.1}\"", sign, feet as u64, inches)
    }
}

/// Get the unit label used in reports
pub fn unit_label() -> &'static str {
    "in"
}
