//! Angle arithmetic and segment selection.

use super::NO_SELECTION;

/// Ease-out cubic: fast start, decelerating to rest at `t == 1`.
///
/// `t` is clamped into `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Wraps an angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Index of the segment containing `angle` on a wheel of `count` equal segments.
///
/// Segment 0 covers `[0, 360 / count)` and the rest follow in order.
#[must_use]
pub fn selected_index(angle: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let segment = 360.0 / count as f64;
    let index = (normalize_degrees(angle) / segment).floor() as usize;
    Some(index.min(count - 1))
}

/// Label under `angle`, or [`NO_SELECTION`] when nothing usable is selected.
#[must_use]
pub fn resolve_label(labels: &[String], angle: f64) -> String {
    selected_index(angle, labels.len())
        .map(|index| labels[index].as_str())
        .filter(|label| !label.is_empty())
        .unwrap_or(NO_SELECTION)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let samples: Vec<f64> = (0..=100).map(|i| ease_out_cubic(f64::from(i) / 100.0)).collect();
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(3725.0), 125.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }

    #[test]
    fn segment_boundaries() {
        assert_eq!(selected_index(0.0, 4), Some(0));
        assert_eq!(selected_index(89.999, 4), Some(0));
        assert_eq!(selected_index(90.0, 4), Some(1));
        assert_eq!(selected_index(359.999_999, 4), Some(3));
        assert_eq!(selected_index(450.0, 4), Some(1));
        assert_eq!(selected_index(10.0, 0), None);
    }

    #[test]
    fn resolve_falls_back_on_empty() {
        let labels = vec!["A".to_string(), "B".to_string()];
        assert_eq!(resolve_label(&labels, 200.0), "B");
        assert_eq!(resolve_label(&[], 200.0), NO_SELECTION);
        assert_eq!(resolve_label(&[String::new()], 10.0), NO_SELECTION);
    }
}
