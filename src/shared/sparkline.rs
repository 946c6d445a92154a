//! Pure geometry for miniature trend lines.
//!
//! Maps an ordered numeric series into a fixed 120×40 viewport, producing a
//! polyline the presentation layer can feed to an SVG `<path>` or any other
//! 2D surface. No smoothing, no interpolation, no randomness — the same
//! series always yields the same coordinates. No async, no network calls.

/// Viewport width in device-independent units.
pub const VIEWBOX_WIDTH: f64 = 120.0;

/// Viewport height in device-independent units.
pub const VIEWBOX_HEIGHT: f64 = 40.0;

/// Inner padding on all four sides.
pub const PADDING: f64 = 2.0;

/// A single polyline vertex in viewport coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparklinePoint {
    pub x: f64,
    pub y: f64,
}

/// Map a series to polyline vertices, first point to last.
///
/// - Empty input yields an empty vector; the caller must not render a path.
/// - A single sample yields one point at the left padding edge, vertically
///   centered.
/// - Otherwise samples are spread evenly across the padded width and scaled
///   so the series minimum sits at the bottom edge and the maximum at the
///   top (higher values map to smaller `y`). A flat series falls back to a
///   divisor of 1, placing every point at the bottom edge.
///
/// Non-finite samples propagate through the arithmetic per IEEE-754; no
/// validation is performed.
pub fn polyline(data: &[f64]) -> Vec<SparklinePoint> {
    if data.is_empty() {
        return Vec::new();
    }

    if data.len() == 1 {
        return vec![SparklinePoint {
            x: PADDING,
            y: VIEWBOX_HEIGHT / 2.0,
        }];
    }

    let min_value = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max_value - min_value == 0.0 {
        1.0
    } else {
        max_value - min_value
    };

    let inner_width = VIEWBOX_WIDTH - PADDING * 2.0;
    let inner_height = VIEWBOX_HEIGHT - PADDING * 2.0;
    let last_index = (data.len() - 1) as f64;

    data.iter()
        .enumerate()
        .map(|(index, value)| SparklinePoint {
            x: (index as f64 / last_index) * inner_width + PADDING,
            y: VIEWBOX_HEIGHT - PADDING - ((value - min_value) / range) * inner_height,
        })
        .collect()
}

/// Render the series as an SVG path string (`M x,y L x,y …`).
///
/// Returns `None` for an empty series so the caller can skip the element
/// entirely. The string carries no identifiers; gradient/resource ids are
/// the renderer's to mint.
pub fn svg_path(data: &[f64]) -> Option<String> {
    let points = polyline(data);
    if points.is_empty() {
        return None;
    }

    let joined = points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" L ");

    Some(format!("M {}", joined))
}
