//! Close-series normalization and sparkline geometry.
//!
//! The provider returns a chronological close series where a zero (or
//! null, mapped to zero upstream) marks a non-trading sample rather than
//! an actual price. Normalization windows the series, selects a baseline
//! for percent change, drops the zero markers and maps what is left onto
//! a fixed logical canvas.

use std::fmt::Write as _;

/// Number of most-recent samples kept for the chart window.
///
/// Fixed regardless of the requested lookback duration.
pub const CHART_SAMPLES: usize = 21;

/// Logical sparkline canvas width.
pub const CHART_WIDTH: f64 = 100.0;

/// Logical sparkline canvas height.
pub const CHART_HEIGHT: f64 = 50.0;

/// The most recent [`CHART_SAMPLES`] entries of a close series.
#[must_use]
pub fn recent_window(samples: &[f64]) -> &[f64] {
    if samples.len() > CHART_SAMPLES {
        &samples[samples.len() - CHART_SAMPLES..]
    } else {
        samples
    }
}

/// Select the baseline ("previous") price for percent change.
///
/// The second-to-last window sample wins when the window has at least two
/// samples and that sample is a real price; otherwise the provider's
/// previous-close field is used.
#[must_use]
pub fn baseline(window: &[f64], previous_close: f64) -> f64 {
    if window.len() >= 2 && window[window.len() - 2] != 0.0 {
        window[window.len() - 2]
    } else {
        previous_close
    }
}

/// Percent change from `previous` to `current`.
///
/// A zero baseline reports zero change rather than dividing by zero.
#[must_use]
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Copy of the series with zero-valued (non-trading) samples removed.
#[must_use]
pub fn without_zero_samples(samples: &[f64]) -> Vec<f64> {
    samples.iter().copied().filter(|&v| v != 0.0).collect()
}

/// Map an ordered price sequence onto a `width` x `height` canvas as SVG
/// polyline coordinates.
///
/// X positions are evenly spaced across `[0, width]` by sample index; y
/// positions scale `[min, max]` to `[height, 0]` (chart space has its
/// origin at the top). An empty series yields an empty string; a series
/// with fewer than two distinct values yields a flat line at mid-height.
#[must_use]
pub fn polyline_points(width: f64, height: f64, values: &[f64]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in values {
        min = min.min(value);
        max = max.max(value);
    }

    if values.len() < 2 || max == min {
        let mid = height / 2.0;
        return format!("0.00,{mid:.2} {width:.2},{mid:.2}");
    }

    let step = width / (values.len() - 1) as f64;
    let scale = height / (max - min);

    let mut points = String::with_capacity(values.len() * 14);
    for (i, &value) in values.iter().enumerate() {
        if i > 0 {
            points.push(' ');
        }
        let x = step * i as f64;
        let y = height - (value - min) * scale;
        let _ = write!(points, "{x:.2},{y:.2}");
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_window_keeps_short_series_whole() {
        let samples = vec![1.0, 2.0, 3.0];
        assert_eq!(recent_window(&samples), samples.as_slice());
    }

    #[test]
    fn recent_window_truncates_to_latest_samples() {
        let samples: Vec<f64> = (0..30).map(f64::from).collect();
        let window = recent_window(&samples);
        assert_eq!(window.len(), CHART_SAMPLES);
        assert_eq!(window[0], 9.0);
        assert_eq!(window[CHART_SAMPLES - 1], 29.0);
    }

    #[test]
    fn baseline_uses_second_to_last_sample() {
        assert_eq!(baseline(&[98.0, 100.0, 110.0], 42.0), 100.0);
    }

    #[test]
    fn baseline_falls_back_when_second_to_last_is_zero() {
        assert_eq!(baseline(&[98.0, 0.0, 110.0], 42.0), 42.0);
    }

    #[test]
    fn baseline_falls_back_for_single_sample() {
        assert_eq!(baseline(&[110.0], 42.0), 42.0);
        assert_eq!(baseline(&[], 42.0), 42.0);
    }

    #[test]
    fn percent_change_ten_percent() {
        let change = percent_change(110.0, 100.0);
        assert!((change - 10.0).abs() < 1e-9);
    }

    #[test]
    fn percent_change_negative() {
        let change = percent_change(90.0, 100.0);
        assert!((change + 10.0).abs() < 1e-9);
    }

    #[test]
    fn percent_change_zero_baseline_reports_zero() {
        assert_eq!(percent_change(110.0, 0.0), 0.0);
    }

    #[test]
    fn without_zero_samples_drops_markers() {
        assert_eq!(
            without_zero_samples(&[1.0, 0.0, 2.0, 0.0, 3.0]),
            vec![1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn polyline_spaces_x_evenly_and_inverts_y() {
        let points = polyline_points(100.0, 50.0, &[1.0, 2.0, 3.0]);
        assert_eq!(points, "0.00,50.00 50.00,25.00 100.00,0.00");
    }

    #[test]
    fn polyline_empty_series_yields_empty_string() {
        assert_eq!(polyline_points(100.0, 50.0, &[]), "");
    }

    #[test]
    fn polyline_single_value_degrades_to_flat_line() {
        assert_eq!(
            polyline_points(100.0, 50.0, &[7.0]),
            "0.00,25.00 100.00,25.00"
        );
    }

    #[test]
    fn polyline_constant_series_degrades_to_flat_line() {
        assert_eq!(
            polyline_points(100.0, 50.0, &[5.0, 5.0, 5.0]),
            "0.00,25.00 100.00,25.00"
        );
    }

    #[test]
    fn polyline_all_zero_series_after_filtering_is_empty() {
        let filtered = without_zero_samples(&[0.0, 0.0, 0.0]);
        assert_eq!(polyline_points(100.0, 50.0, &filtered), "");
    }
}
