//! Widget math - community-points progress bar and CO₂ pie.
//!
//! Pure computations; the DOM layer applies the results. The bar clamps at
//! 100% while its label keeps the raw points, so label and bar can disagree
//! above the cap. That mismatch is intentional product behavior.

/// Maximum points the progress bar can display before clamping.
pub const POINTS_MAX: u32 = 5000;

/// CO₂ savings shown by the pie. Fixed example values; the pie is decorative
/// and never reads the loaded record.
pub const CO2_SAVED: u32 = 80;
pub const CO2_MAX: u32 = 100;

/// Bar fill percentage for a raw points value, clamped to 100.
pub fn progress_percent(points: f64) -> f64 {
    (points / f64::from(POINTS_MAX) * 100.0).min(100.0)
}

/// Label text for the progress bar. Uses the raw points, never the clamp.
pub fn progress_label(points: f64) -> String {
    format!("{points} / {POINTS_MAX} points")
}

/// CSS width value for the bar element.
pub fn progress_width_css(points: f64) -> String {
    format!("{}%", progress_percent(points))
}

/// Angular sweep of the filled pie segment, in degrees.
pub fn co2_sweep_degrees() -> f64 {
    f64::from(CO2_SAVED) / f64::from(CO2_MAX) * 360.0
}

/// Two-segment conic gradient backing the pie.
pub fn co2_gradient_css() -> String {
    let degrees = co2_sweep_degrees();
    format!(
        "conic-gradient(#00ff37 0deg {degrees}deg, rgba(10, 57, 2, 0.7) {degrees}deg 360deg)"
    )
}

/// Percentage label shown at the center of the pie.
pub fn co2_label() -> String {
    format!("{CO2_SAVED}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_points_is_empty_bar() {
        assert_eq!(progress_percent(0.0), 0.0);
        assert_eq!(progress_width_css(0.0), "0%");
        assert_eq!(progress_label(0.0), "0 / 5000 points");
    }

    #[test]
    fn max_points_is_full_bar() {
        assert_eq!(progress_percent(5000.0), 100.0);
        assert_eq!(progress_width_css(5000.0), "100%");
    }

    #[test]
    fn overflow_clamps_bar_but_not_label() {
        assert_eq!(progress_percent(7500.0), 100.0);
        assert_eq!(progress_width_css(7500.0), "100%");
        assert_eq!(progress_label(7500.0), "7500 / 5000 points");
    }

    #[test]
    fn midpoint_is_half_bar() {
        assert_eq!(progress_percent(2500.0), 50.0);
        assert_eq!(progress_width_css(2500.0), "50%");
    }

    #[test]
    fn fractional_points_keep_their_value() {
        assert_eq!(progress_label(3200.5), "3200.5 / 5000 points");
        assert_eq!(progress_percent(312.5), 6.25);
        assert_eq!(progress_width_css(312.5), "6.25%");
    }

    #[test]
    fn co2_sweep_is_288_degrees() {
        assert_eq!(co2_sweep_degrees(), 288.0);
    }

    #[test]
    fn co2_gradient_has_both_segments() {
        let css = co2_gradient_css();
        assert_eq!(
            css,
            "conic-gradient(#00ff37 0deg 288deg, rgba(10, 57, 2, 0.7) 288deg 360deg)"
        );
    }

    #[test]
    fn co2_label_is_fixed() {
        assert_eq!(co2_label(), "80%");
    }
}
