//! Score formatting shared by the JSON API and the HTML form
//!
//! Scores are reported with three decimals everywhere: rounded numbers in
//! JSON, fixed-width strings in tables.

/// Decimal places used for every displayed score
const SCORE_DECIMALS: i32 = 3;

/// Round a score to three decimal places
///
/// # Examples
///
/// ```
/// use ifx_common::format::format_score;
///
/// assert_eq!(format_score(14.3754), 14.375);
/// assert_eq!(format_score(2.0), 2.0);
/// ```
pub fn format_score(score: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    let rounded = (score * factor).round() / factor;
    // Avoid "-0.0" in responses
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Render a score with exactly three decimal places
///
/// # Examples
///
/// ```
/// use ifx_common::format::display_score;
///
/// assert_eq!(display_score(14.5), "14.500");
/// assert_eq!(display_score(0.0), "0.000");
/// ```
pub fn display_score(score: f64) -> String {
    format!("{:.*}", SCORE_DECIMALS as usize, format_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_rounds_to_three_decimals() {
        assert_eq!(format_score(1.2346), 1.235);
        assert_eq!(format_score(1.2344), 1.234);
        assert_eq!(format_score(-3.14159), -3.142);
    }

    #[test]
    fn test_format_score_hides_float_noise() {
        // 15.0 - 14.8 is 0.1999999999999993 in binary
        assert_eq!(format_score(14.4 + 0.375), 14.775);
        assert_eq!(format_score(15.0 - 14.8), 0.2);
    }

    #[test]
    fn test_format_score_negative_zero() {
        assert!(format_score(-0.0001).is_sign_positive());
    }

    #[test]
    fn test_display_score_fixed_width() {
        assert_eq!(display_score(14.875), "14.875");
        assert_eq!(display_score(100.0), "100.000");
        assert_eq!(display_score(0.75), "0.750");
    }
}
