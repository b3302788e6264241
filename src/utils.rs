/// Label text as compared by the attribute differ: surrounding whitespace is noise,
/// case is not.
pub fn normalize_text(value: &str) -> &str {
    value.trim()
}

/// Round to two decimal places, ties to even.
pub fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `100 * part / whole`, rounded to two decimals. Zero when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    // Scale before dividing so exact ties stay exact in binary.
    (part as f64 * 10_000.0 / whole as f64).round_ties_even() / 100.0
}

/// Inclusive `|a - b| <= tolerance`, allowing for the rounding error of the subtraction
/// so decimal coordinates exactly `tolerance` apart (2.4 vs 4.4) compare as within.
pub fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    let slack = f64::EPSILON * a.abs().max(b.abs()).max(1.0) * 4.0;
    (a - b).abs() <= tolerance + slack
}
