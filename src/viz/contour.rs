//! Contour lines by marching squares

use ndarray::Array2;

/// Straight piece of a contour line, in data coordinates
pub type Segment = [(f32, f32); 2];

/// `count` evenly spaced levels strictly between `min` and `max`
pub fn contour_levels(min: f32, max: f32, count: usize) -> Vec<f32> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Vec::new();
    }
    let step = (max - min) / (count + 1) as f32;
    (1..=count).map(|k| min + step * k as f32).collect()
}

/// Position of `level` between `a` and `b`, as a fraction of the edge
fn crossing(a: f32, b: f32, level: f32) -> f32 {
    let denom = b - a;
    if denom == 0.0 {
        0.5
    } else {
        ((level - a) / denom).clamp(0.0, 1.0)
    }
}

/// Segments of the `level` isoline of `values[[i, j]] = f(xs[i], ys[j])`
///
/// Saddle cells are resolved with the mean of the four corners.
pub fn marching_squares(values: &Array2<f32>, xs: &[f32], ys: &[f32], level: f32) -> Vec<Segment> {
    let (nx, ny) = values.dim();
    let mut segments = Vec::new();
    if nx < 2 || ny < 2 {
        return segments;
    }

    for i in 0..nx - 1 {
        for j in 0..ny - 1 {
            // Corners counter-clockwise from (i, j)
            let v = [values[[i, j]], values[[i + 1, j]], values[[i + 1, j + 1]], values[[i, j + 1]]];
            let p = [(xs[i], ys[j]), (xs[i + 1], ys[j]), (xs[i + 1], ys[j + 1]), (xs[i], ys[j + 1])];

            let case = v
                .iter()
                .enumerate()
                .fold(0u8, |acc, (k, &value)| if value > level { acc | (1 << k) } else { acc });
            if case == 0 || case == 15 {
                continue;
            }

            // Edge k joins corner k and corner k + 1
            let edge_point = |k: usize| {
                let (a, b) = (k, (k + 1) % 4);
                let t = crossing(v[a], v[b], level);
                (p[a].0 + t * (p[b].0 - p[a].0), p[a].1 + t * (p[b].1 - p[a].1))
            };

            let pairs: &[(usize, usize)] = match case {
                1 | 14 => &[(3, 0)],
                2 | 13 => &[(0, 1)],
                3 | 12 => &[(3, 1)],
                4 | 11 => &[(1, 2)],
                6 | 9 => &[(0, 2)],
                7 | 8 => &[(2, 3)],
                5 | 10 => {
                    let center_above = v.iter().sum::<f32>() / 4.0 > level;
                    // Case 5: corners 0 and 2 above
                    if (case == 5) == center_above {
                        &[(0, 1), (2, 3)]
                    } else {
                        &[(3, 0), (1, 2)]
                    }
                }
                _ => &[],
            };

            segments.extend(pairs.iter().map(|&(a, b)| [edge_point(a), edge_point(b)]));
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn axis(n: usize, lo: f32, hi: f32) -> Vec<f32> {
        (0..n).map(|i| lo + (hi - lo) * i as f32 / (n - 1) as f32).collect()
    }

    #[test]
    fn test_levels_are_interior() {
        assert_eq!(contour_levels(0.0, 4.0, 3), vec![1.0, 2.0, 3.0]);
        assert!(contour_levels(1.0, 1.0, 5).is_empty());
        assert!(contour_levels(f32::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn test_plane_gives_straight_line() {
        // f(x, y) = x, level 0.5 is the vertical line x = 0.5
        let xs = axis(5, 0.0, 1.0);
        let ys = axis(5, 0.0, 1.0);
        let values = Array2::from_shape_fn((5, 5), |(i, _)| xs[i]);
        let segments = marching_squares(&values, &xs, &ys, 0.5);
        assert_eq!(segments.len(), 4);
        for [a, b] in segments {
            assert!((a.0 - 0.5).abs() < 1e-6 && (b.0 - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_circle_points_lie_near_radius() {
        let n = 41;
        let xs = axis(n, -2.0, 2.0);
        let values = Array2::from_shape_fn((n, n), |(i, j)| (xs[i] * xs[i] + xs[j] * xs[j]).sqrt());
        let segments = marching_squares(&values, &xs, &xs, 1.0);
        assert!(!segments.is_empty());
        for point in segments.iter().flatten() {
            let r = (point.0 * point.0 + point.1 * point.1).sqrt();
            assert!((r - 1.0).abs() < 0.05, "radius {r}");
        }
    }

    #[test]
    fn test_saddle_emits_two_segments() {
        let xs = [0.0, 1.0];
        let values = ndarray::array![[1.0, 0.0], [0.0, 1.0]];
        assert_eq!(marching_squares(&values, &xs, &xs, 0.5).len(), 2);
    }

    proptest! {
        #[test]
        fn prop_segments_stay_in_grid(level in -1.0f32..1.0, seed in 0u32..1000) {
            let xs = axis(6, -1.0, 1.0);
            let values =
                Array2::from_shape_fn((6, 6), |(i, j)| (i as f32 * 1.3 + j as f32 * 0.7 + seed as f32).sin());
            for point in marching_squares(&values, &xs, &xs, level).iter().flatten() {
                prop_assert!((-1.0..=1.0).contains(&point.0));
                prop_assert!((-1.0..=1.0).contains(&point.1));
            }
        }
    }
}
