//! Nächster-Punkt-Projektion: Parameter t* mit minimalem Abstand zur Kurve.
//!
//! Grobes Scannen über uniforme t-Stützstellen liefert das Minimal-Bracket,
//! eine Ternärsuche auf dem quadrierten Abstand verfeinert auf Sub-Pixel-Genauigkeit.

use super::curve::CubicBezier;
use glam::Vec2;

/// Abbruchbreite des Parameter-Intervalls bei der Verfeinerung.
const REFINE_EPSILON: f32 = 1e-6;

/// Ergebnis einer Projektion auf die Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Nächster Punkt auf der Kurve, B(t)
    pub point: Vec2,
    /// Kurvenparameter t ∈ [0,1]
    pub t: f32,
    /// Einheits-Normale bei t (Vec2::ZERO bei degenerierter Kurve)
    pub normal: Vec2,
}

/// Projiziert `query` auf die Kurve: t* minimiert |B(t) − query| für t ∈ [0,1].
///
/// `scan_samples` steuert die grobe Abtastung (Minimum 2; Standard 100 über
/// die Optionen). Oberhalb dieses Minimums konvergiert das Ergebnis
/// unabhängig von der Auflösung gegen dasselbe t. Bei mehreren gleich nahen
/// Stellen (symmetrische Kurve) gewinnt deterministisch das kleinste t.
pub fn project(curve: &CubicBezier, query: Vec2, scan_samples: usize) -> Projection {
    let scan_samples = scan_samples.max(2);

    // Grober Scan: striktes `<` behält bei Gleichstand das kleinste t
    let mut best_index = 0usize;
    let mut best_dist_sq = f32::MAX;
    for i in 0..=scan_samples {
        let t = i as f32 / scan_samples as f32;
        let dist_sq = curve.position(t).distance_squared(query);
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best_index = i;
        }
    }

    // Bracket um das grobe Minimum, an [0,1] geklemmt
    let step = 1.0 / scan_samples as f32;
    let mut lo = (best_index as f32 * step - step).max(0.0);
    let mut hi = (best_index as f32 * step + step).min(1.0);
    debug_assert!(lo <= hi, "Projektions-Bracket invertiert: [{}, {}]", lo, hi);

    // Ternärsuche auf dem quadrierten Abstand (unimodal im Bracket)
    while hi - lo > REFINE_EPSILON {
        let m1 = lo + (hi - lo) / 3.0;
        let m2 = hi - (hi - lo) / 3.0;
        if curve.position(m1).distance_squared(query) <= curve.position(m2).distance_squared(query)
        {
            hi = m2;
        } else {
            lo = m1;
        }
    }

    let t = ((lo + hi) * 0.5).clamp(0.0, 1.0);
    Projection {
        point: curve.position(t),
        t,
        normal: curve.normal(t),
    }
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
    fn test_project_point_on_curve_has_zero_distance() {
        let curve = demo_curve();
        for &t in &[0.0f32, 0.25, 0.5, 0.75, 1.0] {
            let on_curve = curve.position(t);
            let proj = project(&curve, on_curve, 100);
            assert!(
                proj.point.distance(on_curve) < 0.05,
                "t={}: Residualabstand {}",
                t,
                proj.point.distance(on_curve)
            );
        }
    }

    #[test]
    fn test_project_is_idempotent() {
        let curve = demo_curve();
        let query = Vec2::new(300.0, 50.0);
        let first = project(&curve, query, 100);
        let second = project(&curve, first.point, 100);
        assert!(first.point.distance(second.point) < 0.05);
        assert_relative_eq!(first.t, second.t, epsilon = 1e-3);
    }

    #[test]
    fn test_project_stable_across_scan_resolutions() {
        // Kerneigenschaft: oberhalb der Mindestauflösung konvergiert die
        // Projektion unabhängig von der Scan-Dichte.
        let curve = demo_curve();
        let query = Vec2::new(250.0, 180.0);
        let coarse = project(&curve, query, 100);
        let fine = project(&curve, query, 1000);
        assert_relative_eq!(coarse.t, fine.t, epsilon = 1e-3);
        assert!(coarse.point.distance(fine.point) < 0.1);
    }

    #[test]
    fn test_project_clamps_to_domain() {
        let curve = demo_curve();
        // Weit jenseits des Kurvenendes: t muss bei 1.0 geklemmt bleiben
        let proj = project(&curve, Vec2::new(2000.0, 2000.0), 100);
        assert!(proj.t > 0.99);
        assert!(proj.point.distance(curve.end) < 1.0);
    }

    #[test]
    fn test_project_symmetric_tie_break_smallest_t() {
        // Achsensymmetrische Kurve, Query auf der Symmetrieachse weit oberhalb:
        // beide Bögen sind gleich nah, das kleinste t gewinnt.
        let curve = CubicBezier::new(
            Vec2::new(-10.0, 0.0),
            Vec2::new(-10.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
        );
        let proj = project(&curve, Vec2::new(0.0, 100.0), 100);
        assert!(proj.t <= 0.5 + 1e-3, "Tie-Break nicht deterministisch: t={}", proj.t);
    }

    #[test]
    fn test_project_degenerate_curve() {
        let p = Vec2::new(10.0, 20.0);
        let curve = CubicBezier::new(p, p, p, p);
        let query = Vec2::new(13.0, 24.0);
        let proj = project(&curve, query, 100);
        // Nächster Punkt ist der einzige Kurvenpunkt; Abstand = |query − p|
        assert!(proj.point.distance(p) < 1e-3);
        assert_relative_eq!(proj.point.distance(query), 5.0, epsilon = 1e-3);
        assert_eq!(proj.normal, Vec2::ZERO);
    }

    #[test]
    fn test_projection_normal_matches_curve_normal() {
        let curve = demo_curve();
        let proj = project(&curve, Vec2::new(150.0, 200.0), 100);
        let expected = curve.normal(proj.t);
        assert!((proj.normal - expected).length() < 1e-4);
        assert_relative_eq!(proj.normal.length(), 1.0, epsilon = 1e-4);
    }
}
