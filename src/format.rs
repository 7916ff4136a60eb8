//! Number rendering for results, derivation steps and reports.
//!
//! Three shapes are used:
//!
//! * [`fixed`]: exactly `precision` decimals (`200000.000000`), the
//!   result line of a conversion.
//! * [`trimmed`]: `precision` decimals with trailing zeros removed
//!   (`2000`), used inside derivation steps.
//! * [`number`]: shortest round-trip form, exponent notation for very
//!   small or very large magnitudes (`1.60218e-19`), used for inputs and
//!   factors.

/// `value` with exactly `precision` decimals.
pub fn fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// `value` rounded to `precision` decimals without trailing zeros.
///
/// A non-zero value that would round to zero is written in exponent form
/// so the step still shows something meaningful.
pub fn trimmed(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let s = trim_zeros(&fixed(value, precision));
    if s == "0" || s == "-0" {
        if value == 0.0 {
            return "0".to_string();
        }
        return exponent(value, precision);
    }
    s
}

/// Shortest representation that round-trips.  Magnitudes below `1e-6` or
/// at least `1e21` switch to exponent notation.
pub fn number(value: f64) -> String {
    let abs = value.abs();
    if value != 0.0 && value.is_finite() && !(1e-6..1e21).contains(&abs) {
        format!("{value:e}")
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn exponent(value: f64, precision: usize) -> String {
    let s = format!("{value:.precision$e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => format!("{}e{exp}", trim_zeros(mantissa)),
        None => s,
    }
}

fn trim_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}
