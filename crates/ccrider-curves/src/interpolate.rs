//! Scalar interpolation primitives shared by the exact and memoized paths.
//!
//! Everything here works on plain `f32` control values: a Bezier of any
//! degree is just a slice of values, and the lookup table reuses [`lerp`]
//! and [`sliced`] for its own bracketing.

/// Linear interpolation from `a` to `b`.
///
/// Written as `(b - a) * t + a` so that `t == 0.0` returns `a` bit-exactly.
#[inline]
pub fn lerp(t: f32, a: f32, b: f32) -> f32 {
    (b - a) * t + a
}

/// Split `t` across `point_count` evenly spaced points.
///
/// Returns the index of the slice containing `t` and `t` re-normalized to
/// `[0,1]` inside that slice. With `n` points there are `n - 1` slices; a `t`
/// of exactly `1.0` lands on index `n - 1` with a remainder of `0.0`, which
/// callers treat as "the last point".
///
/// # Example
///
/// ```
/// use ccrider_curves::interpolate::sliced;
///
/// let (index, remainder) = sliced(0.75, 3);
/// assert_eq!(index, 1);
/// assert!((remainder - 0.5).abs() < 1e-6);
/// ```
#[inline]
pub fn sliced(t: f32, point_count: usize) -> (usize, f32) {
    if point_count <= 1 {
        return (0, t);
    }

    let slices = (point_count - 1) as f32;
    let index = (t * slices).floor();
    let remainder = (t - index / slices) * slices;
    (index as usize, remainder)
}

/// Closed-form cubic Bernstein polynomial.
///
/// `B(t) = (1-t)³p0 + 3t(1-t)²p1 + 3t²(1-t)p2 + t³p3`
#[inline]
pub fn cubic_bernstein(t: f32, [p0, p1, p2, p3]: [f32; 4]) -> f32 {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;

    mt2 * mt * p0 + 3.0 * t * mt2 * p1 + 3.0 * t2 * mt * p2 + t2 * t * p3
}

/// General De Casteljau evaluation of a Bezier with any number of values.
///
/// Each pass lerps neighbouring values until one remains. Fewer than two
/// values carry no shape, so `t` is passed through unchanged.
pub fn de_casteljau(t: f32, values: &[f32]) -> f32 {
    match values {
        [] | [_] => t,
        [a, b] => lerp(t, *a, *b),
        _ => {
            let reduced: Vec<f32> = values
                .iter()
                .zip(values.iter().skip(1))
                .map(|(a, b)| lerp(t, *a, *b))
                .collect();
            de_casteljau(t, &reduced)
        }
    }
}

/// Evaluate a Bezier given as control values.
///
/// Four values take the closed-form cubic, clamped to `[0,1]` to absorb
/// rounding when every value sits on a bound. Any other count falls back to
/// [`de_casteljau`].
#[inline]
pub fn interpolate(t: f32, values: &[f32]) -> f32 {
    match values {
        [p0, p1, p2, p3] => cubic_bernstein(t, [*p0, *p1, *p2, *p3]).clamp(0.0, 1.0),
        _ => de_casteljau(t, values),
    }
}
