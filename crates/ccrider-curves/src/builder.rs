//! Auto-tangent construction of piecewise cubic Bezier curves.
//!
//! Control points are evenly spaced along the input axis, so only their
//! values matter. Handles are derived from neighbouring slopes:
//!
//! - The first and last points get thirds-based handles pointing at their
//!   only neighbour.
//! - Interior points get a symmetric tangent whose size is limited by both
//!   adjacent slopes, which keeps the curve from overshooting.
//! - Interior points where the direction of travel changes (peaks, valleys,
//!   and the edges of flat runs) get a flat tangent.

use crate::segment::Segment;

/// Build the segments of a curve through `points`.
///
/// Returns exactly `points.len() - 1` segments, each starting and ending on a
/// control point. Fewer than two points produce no segments; callers are
/// expected to treat that as "no curve".
///
/// # Example
///
/// ```
/// use ccrider_curves::build_segments;
///
/// let segments = build_segments(&[0.0, 1.0, 0.0]);
/// assert_eq!(segments.len(), 2);
/// // Peak at the middle point: both handles are flat.
/// assert!((segments[0].end_handle - 1.0).abs() < 1e-6);
/// assert!((segments[1].start_handle - 1.0).abs() < 1e-6);
/// ```
pub fn build_segments(points: &[f32]) -> Vec<Segment> {
    if points.len() < 2 {
        return Vec::new();
    }

    // offsets[k] belongs to interior point k + 1
    let offsets: Vec<f32> = points
        .windows(3)
        .map(|window| match *window {
            [prev, point, next] => tangent_offset(prev, point, next),
            _ => 0.0,
        })
        .collect();

    let last_segment = points.len() - 2;

    points
        .windows(2)
        .enumerate()
        .filter_map(|(index, pair)| {
            let &[start, end] = pair else {
                return None;
            };

            let start_handle = if index == 0 {
                start + (end - start) / 3.0
            } else {
                start + offsets.get(index - 1).copied().unwrap_or(0.0)
            };

            let end_handle = if index == last_segment {
                end - (end - start) / 3.0
            } else {
                end - offsets.get(index).copied().unwrap_or(0.0)
            };

            Some(Segment::new(start, start_handle, end_handle, end))
        })
        .collect()
}

/// Tangent offset for an interior point.
///
/// Zero at a local extremum; otherwise the average slope's sign times the
/// smallest of both slopes and a third of the average slope.
fn tangent_offset(prev: f32, point: f32, next: f32) -> f32 {
    let prev_slope = point - prev;
    let next_slope = next - point;

    if is_local_extremum(prev_slope, next_slope) {
        return 0.0;
    }

    let average_slope = (prev_slope + next_slope) / 2.0;
    let magnitude = prev_slope
        .abs()
        .min(next_slope.abs())
        .min(average_slope.abs() / 3.0);

    sign(average_slope) * magnitude
}

/// True when exactly one of the two slopes is rising.
#[inline]
fn is_local_extremum(prev_slope: f32, next_slope: f32) -> bool {
    (prev_slope > 0.0) != (next_slope > 0.0)
}

#[inline]
fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-6;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_too_few_points_builds_nothing() {
        assert!(build_segments(&[]).is_empty());
        assert!(build_segments(&[0.5]).is_empty());
    }

    #[test]
    fn test_two_points_get_thirds_handles() {
        let segments = build_segments(&[0.0, 1.0]);
        assert_eq!(segments.len(), 1);
        let [p0, h0, h1, p1] = segments[0].control_values();
        assert!(close(p0, 0.0));
        assert!(close(h0, 1.0 / 3.0));
        assert!(close(h1, 2.0 / 3.0));
        assert!(close(p1, 1.0));
    }

    #[test]
    fn test_segment_count_and_continuity() {
        let points = [0.43, 0.67, 0.43, 0.67, 0.0, 0.43, 0.67, 0.0, 1.0];
        let segments = build_segments(&points);
        assert_eq!(segments.len(), points.len() - 1);

        for (index, segment) in segments.iter().enumerate() {
            assert!(close(segment.start, points[index]));
            assert!(close(segment.end, points[index + 1]));
        }
    }

    #[test]
    fn test_monotonic_interior_tangent() {
        // prev = next = 0.5, avg = 0.5 -> offset = min(0.5, 0.5, 0.5 / 3)
        let segments = build_segments(&[0.0, 0.5, 1.0]);
        let offset = 0.5 / 3.0;
        assert!(close(segments[0].end_handle, 0.5 - offset));
        assert!(close(segments[1].start_handle, 0.5 + offset));
    }

    #[test]
    fn test_tangent_limited_by_shallow_neighbour() {
        // prev = 0.05, next = 0.85 -> avg / 3 = 0.15, min is prev = 0.05
        let segments = build_segments(&[0.0, 0.05, 0.9]);
        assert!(close(segments[0].end_handle, 0.0));
        assert!(close(segments[1].start_handle, 0.1));
    }

    #[test]
    fn test_falling_interior_tangent_is_negative() {
        let segments = build_segments(&[1.0, 0.5, 0.0]);
        let offset = -0.5 / 3.0;
        assert!(close(segments[0].end_handle, 0.5 - offset));
        assert!(close(segments[1].start_handle, 0.5 + offset));
    }

    #[test]
    fn test_peak_and_valley_are_flat() {
        let segments = build_segments(&[0.0, 1.0, 0.0, 1.0]);
        assert!(close(segments[0].end_handle, 1.0));
        assert!(close(segments[1].start_handle, 1.0));
        assert!(close(segments[1].end_handle, 0.0));
        assert!(close(segments[2].start_handle, 0.0));
    }

    #[test]
    fn test_flat_run_edges_are_flat() {
        let segments = build_segments(&[0.0, 0.5, 0.5, 1.0]);
        assert!(close(segments[0].end_handle, 0.5));
        assert!(close(segments[1].start_handle, 0.5));
        assert!(close(segments[1].end_handle, 0.5));
        assert!(close(segments[2].start_handle, 0.5));
    }

    #[test]
    fn test_sign() {
        assert!(close(sign(2.0), 1.0));
        assert!(close(sign(-0.1), -1.0));
        assert!(close(sign(0.0), 0.0));
    }
}
