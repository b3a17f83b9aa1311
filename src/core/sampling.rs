//! Arc-Length-Sampling: gleichmäßig entlang der Bogenlänge verteilte Kurvenpunkte.
//!
//! Naives uniform-t-Sampling ballt Punkte dort, wo die Krümmung hoch ist.
//! Stattdessen wird eine kumulative Längen-LUT über eine feine uniforme
//! Unterteilung aufgebaut und bei jedem Vielfachen von Gesamtlänge/n ein
//! linear interpolierter Punkt emittiert.

use super::curve::CubicBezier;
use glam::Vec2;

/// Feine Unterteilung für die Längen-LUT.
///
/// Muss fein genug sein, dass der Sehnenfehler gegenüber der Handle-Größe
/// vernachlässigbar bleibt (Minimum ~100 für Kurven über einige hundert Einheiten).
pub const ARC_LENGTH_LUT_SAMPLES: usize = 256;

/// Gibt n+1 gleichmäßig nach Bogenlänge verteilte Punkte zurück (n Segmente).
///
/// Erster Punkt = P0, letzter Punkt = P3; Reihenfolge folgt der Kurve von
/// Start nach Ende, deterministisch für identische Eingaben.
///
/// Degenerierte Kurve (Gesamtlänge ~0): n+1 deckungsgleiche Punkte, damit
/// nachgelagertes Rendering nie eine leere Sequenz erhält.
pub fn spaced_points(curve: &CubicBezier, n: usize) -> Vec<Vec2> {
    let n = n.max(1);
    let start = curve.position(0.0);

    let mut arc_lengths = Vec::with_capacity(ARC_LENGTH_LUT_SAMPLES + 1);
    let mut prev = start;
    let mut cumulative = 0.0f32;
    arc_lengths.push(0.0f32);
    for i in 1..=ARC_LENGTH_LUT_SAMPLES {
        let t = i as f32 / ARC_LENGTH_LUT_SAMPLES as f32;
        let p = curve.position(t);
        cumulative += prev.distance(p);
        arc_lengths.push(cumulative);
        prev = p;
    }

    let total_length = cumulative;
    if total_length < f32::EPSILON {
        return vec![start; n + 1];
    }

    let target_spacing = total_length / n as f32;
    let mut positions = Vec::with_capacity(n + 1);
    positions.push(start);

    for seg in 1..n {
        let target_length = seg as f32 * target_spacing;
        let idx = arc_lengths
            .partition_point(|&len| len < target_length)
            .min(ARC_LENGTH_LUT_SAMPLES)
            .max(1);

        let len_before = arc_lengths[idx - 1];
        let len_after = arc_lengths[idx];
        let frac = if (len_after - len_before).abs() > f32::EPSILON {
            (target_length - len_before) / (len_after - len_before)
        } else {
            0.0
        };

        let t = ((idx - 1) as f32 + frac) / ARC_LENGTH_LUT_SAMPLES as f32;
        positions.push(curve.position(t));
    }

    positions.push(curve.position(1.0));
    positions
}

/// Approximierte Kurvenlänge über Polylinien-Segmente.
pub fn approx_length(curve: &CubicBezier, samples: usize) -> f32 {
    let mut length = 0.0;
    let mut prev = curve.position(0.0);
    for i in 1..=samples {
        let t = i as f32 / samples as f32;
        let p = curve.position(t);
        length += prev.distance(p);
        prev = p;
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn demo_curve() -> CubicBezier {
        CubicBezier::new(
            Vec2::new(50.0, 50.0),
            Vec2::new(100.0, 300.0),
            Vec2::new(200.0, 100.0),
            Vec2::new(500.0, 500.0),
        )
    }

    #[test]
    fn test_spaced_points_count_and_endpoints() {
        let curve = demo_curve();
        let points = spaced_points(&curve, 10);
        assert_eq!(points.len(), 11);
        assert!((points[0] - Vec2::new(50.0, 50.0)).length() < 0.01);
        assert!((points[10] - Vec2::new(500.0, 500.0)).length() < 0.01);
    }

    #[test]
    fn test_spaced_points_no_consecutive_duplicates() {
        let curve = demo_curve();
        let points = spaced_points(&curve, 10);
        for i in 0..points.len() - 1 {
            assert!(
                points[i].distance(points[i + 1]) > 0.1,
                "Punkte {} und {} fallen zusammen",
                i,
                i + 1
            );
        }
    }

    #[test]
    fn test_spaced_points_monotone_progress() {
        // Monotonie entlang der Kurve: die Bogenlängen-Position jedes Punkts
        // (gemessen über die nächste t-Stelle) muss streng wachsen.
        let curve = demo_curve();
        let points = spaced_points(&curve, 10);
        let mut last_t = -1.0f32;
        for p in &points {
            let proj = crate::core::projection::project(&curve, *p, 200);
            assert!(
                proj.t > last_t - 1e-4,
                "t fällt zurück: {} nach {}",
                proj.t,
                last_t
            );
            last_t = proj.t;
        }
    }

    #[test]
    fn test_arc_length_spacing_beats_uniform_t() {
        // Ungleichmäßige Krümmung: Sehnenlängen-Varianz muss unter der des
        // naiven uniform-t-Samplings liegen.
        let curve = demo_curve();
        let n = 10;
        let arc = spaced_points(&curve, n);
        let uniform: Vec<Vec2> = (0..=n)
            .map(|i| curve.position(i as f32 / n as f32))
            .collect();

        let variance = |pts: &[Vec2]| {
            let dists: Vec<f32> = pts.windows(2).map(|w| w[0].distance(w[1])).collect();
            let mean = dists.iter().sum::<f32>() / dists.len() as f32;
            dists.iter().map(|d| (d - mean) * (d - mean)).sum::<f32>() / dists.len() as f32
        };

        assert!(
            variance(&arc) < variance(&uniform) * 0.5,
            "Arc-Length-Varianz {} nicht deutlich unter uniform-t-Varianz {}",
            variance(&arc),
            variance(&uniform)
        );
    }

    #[test]
    fn test_spaced_points_roughly_equal_chords() {
        let curve = demo_curve();
        let points = spaced_points(&curve, 10);
        let dists: Vec<f32> = points.windows(2).map(|w| w[0].distance(w[1])).collect();
        let mean = dists.iter().sum::<f32>() / dists.len() as f32;
        for (i, d) in dists.iter().enumerate() {
            assert!(
                (d - mean).abs() < mean * 0.15,
                "Segment {} weicht zu stark ab: {:.2} vs Mittel {:.2}",
                i,
                d,
                mean
            );
        }
    }

    #[test]
    fn test_degenerate_curve_returns_coincident_points() {
        let p = Vec2::new(123.0, 456.0);
        let curve = CubicBezier::new(p, p, p, p);
        let points = spaced_points(&curve, 10);
        assert_eq!(points.len(), 11);
        for point in points {
            assert_eq!(point, p);
        }
    }

    #[test]
    fn test_approx_length_straight_line() {
        let curve = CubicBezier::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
        );
        assert_relative_eq!(approx_length(&curve, 128), 3.0, epsilon = 1e-3);
    }

    #[test]
    fn test_approx_length_exceeds_endpoint_distance_for_curved_path() {
        let curve = demo_curve();
        let length = approx_length(&curve, ARC_LENGTH_LUT_SAMPLES);
        let chord = curve.position(0.0).distance(curve.position(1.0));
        assert!(
            length > chord,
            "Bogenlänge {} nicht über Sehnenlänge {}",
            length,
            chord
        );
    }

    #[test]
    fn test_spaced_points_deterministic() {
        let curve = demo_curve();
        assert_eq!(spaced_points(&curve, 10), spaced_points(&curve, 10));
    }
}
