//! # Rounding Module
//!
//! Rounds calculation results and turns numbers into display text.
//!
//! ## Why Round Through Decimal Text?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ shown as-is looks broken         │
//! │                                                                         │
//! │  Naive scaling:                                                         │
//! │    (1.005 * 100).round() / 100 = 1.0   ❌ 1.005 * 100 = 100.49999…      │
//! │                                                                         │
//! │  OUR SOLUTION: shift the decimal point in the text                      │
//! │    "1.005" + "e2"  → 100.5  → round → 101 → "101e-2" → 1.01  ✅         │
//! │                                                                         │
//! │  The shortest decimal text of an f64 is exactly what the user saw,      │
//! │  so the exponent shift never introduces a binary artifact.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Rule
//! Half away from zero (`2.5 → 3`, `-2.5 → -3`), NOT bankers rounding.

// =============================================================================
// Rounding
// =============================================================================

/// Rounds `value` to `decimals` places, half away from zero.
///
/// Non-finite values pass through untouched. A value too large to shift is
/// returned as-is, since it has no fractional digits left to round.
///
/// ## Example
/// ```rust
/// use abacus_core::rounding::round_half_away;
///
/// assert_eq!(round_half_away(0.1 + 0.2, 2), 0.3);
/// assert_eq!(round_half_away(1.005, 2), 1.01);
/// assert_eq!(round_half_away(-2.5, 0), -3.0);
/// assert!(round_half_away(f64::INFINITY, 2).is_infinite());
/// ```
pub fn round_half_away(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let shifted = match format!("{value}e{decimals}").parse::<f64>() {
        Ok(shifted) if shifted.is_finite() => shifted,
        _ => return value,
    };

    // f64::round already rounds half away from zero
    let rounded = shifted.round();

    format!("{rounded}e-{decimals}")
        .parse::<f64>()
        .unwrap_or(value)
}

// =============================================================================
// Display
// =============================================================================

/// Formats a number for a display screen.
///
/// ## Rules
/// - Integers print without a fraction: `8`, not `8.0`
/// - Negative zero prints as `0`
/// - Non-finite values print as `Infinity`, `-Infinity` and `NaN`
///
/// ## Example
/// ```rust
/// use abacus_core::rounding::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.3), "0.3");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(5.0 / 0.0), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_removes_float_artifacts() {
        assert_eq!(round_half_away(0.1 + 0.2, 2), 0.3);
        assert_eq!(round_half_away(1.1 * 3.0, 2), 3.3);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_half_away(0.125, 2), 0.13);
        assert_eq!(round_half_away(-0.125, 2), -0.13);
        assert_eq!(round_half_away(2.5, 0), 3.0);
        assert_eq!(round_half_away(-2.5, 0), -3.0);
    }

    /// Bankers rounding would give 2.67 and 2.0 here.
    #[test]
    fn test_round_is_not_bankers() {
        assert_eq!(round_half_away(2.675, 2), 2.68);
        assert_eq!(round_half_away(2.5, 0), 3.0);
    }

    #[test]
    fn test_round_shortest_text_cases() {
        assert_eq!(round_half_away(1.005, 2), 1.01);
        assert_eq!(round_half_away(10.0 / 3.0, 2), 3.33);
        assert_eq!(round_half_away(2.0 / 3.0, 2), 0.67);
    }

    #[test]
    fn test_round_integers_and_zero() {
        assert_eq!(round_half_away(42.0, 2), 42.0);
        assert_eq!(round_half_away(0.0, 2), 0.0);
        assert_eq!(round_half_away(0.001, 2), 0.0);
    }

    #[test]
    fn test_round_other_precisions() {
        assert_eq!(round_half_away(3.14159, 4), 3.1416);
        assert_eq!(round_half_away(3.14159, 0), 3.0);
    }

    #[test]
    fn test_round_non_finite_passthrough() {
        assert_eq!(round_half_away(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(round_half_away(f64::NEG_INFINITY, 2), f64::NEG_INFINITY);
        assert!(round_half_away(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_round_huge_values_unchanged() {
        assert_eq!(round_half_away(f64::MAX, 2), f64::MAX);
        assert_eq!(round_half_away(1e300, 2), 1e300);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(0.3), "0.3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
