//! Reine Geometrie-Funktionen für die Vorschau-Linie eines Segments.
//!
//! Layer-neutral: wird vom PathModel (Hit-Testing) und vom Render-Szenen-Builder genutzt.

use glam::DVec2;

/// Einheitsvektor zu einem Winkel im Display-Raum.
pub fn direction(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Punkt auf einem kubischen Hermite-Segment (t ∈ [0, 1]).
///
/// `m0`/`m1` sind die Tangentenvektoren an Start bzw. Ende.
pub fn hermite_point(p0: DVec2, m0: DVec2, p1: DVec2, m1: DVec2, t: f64) -> DVec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    p0 * h00 + m0 * h10 + p1 * h01 + m1 * h11
}

/// Tastet den Verlauf eines Segments ab (`samples` Intervalle, Endpunkt eingeschlossen).
///
/// Gerade Segmente liefern die Sehne, gekrümmte eine Hermite-Kurve mit den
/// Tangentenwinkeln an Start und Ende (Betrag = Sehnenlänge).
pub fn sample_segment(
    start: DVec2,
    start_tangent: f64,
    end: DVec2,
    end_tangent: f64,
    curved: bool,
    samples: usize,
) -> Vec<DVec2> {
    let samples = samples.max(1);
    let mut result = Vec::with_capacity(samples + 1);

    if !curved {
        for i in 0..=samples {
            let t = i as f64 / samples as f64;
            result.push(start.lerp(end, t));
        }
        return result;
    }

    let chord = start.distance(end);
    let m0 = direction(start_tangent) * chord;
    let m1 = direction(end_tangent) * chord;
    for i in 0..=samples {
        let t = i as f64 / samples as f64;
        result.push(hermite_point(start, m0, end, m1, t));
    }
    result
}

/// Kürzester Abstand eines Punktes zu einer Strecke.
pub fn distance_to_segment(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f64::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Kürzester Abstand eines Punktes zu einer Polyline.
pub fn distance_to_polyline(point: DVec2, polyline: &[DVec2]) -> f64 {
    match polyline {
        [] => f64::INFINITY,
        [single] => point.distance(*single),
        _ => polyline
            .windows(2)
            .map(|w| distance_to_segment(point, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Rastet `point` auf die nächste achsparallele Richtung um `anchor` ein.
pub fn round_to_90(anchor: DVec2, point: DVec2) -> DVec2 {
    let dx = (point.x - anchor.x).abs();
    let dy = (point.y - anchor.y).abs();
    if dx > dy {
        DVec2::new(point.x, anchor.y)
    } else {
        DVec2::new(anchor.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn straight_samples_lie_on_chord() {
        let points = sample_segment(DVec2::ZERO, 1.0, DVec2::new(10.0, 0.0), -1.0, false, 4);
        assert_eq!(points.len(), 5);
        for p in &points {
            assert_relative_eq!(p.y, 0.0);
        }
        assert_relative_eq!(points[2].x, 5.0);
    }

    #[test]
    fn curved_samples_hit_both_endpoints() {
        let end = DVec2::new(100.0, 50.0);
        let points = sample_segment(DVec2::ZERO, 0.0, end, 1.2, true, 40);
        assert_eq!(points.len(), 41);
        assert_relative_eq!(points[0].x, 0.0);
        assert_relative_eq!(points[40].x, end.x, epsilon = 1e-9);
        assert_relative_eq!(points[40].y, end.y, epsilon = 1e-9);
    }

    #[test]
    fn curved_sample_bulges_along_start_tangent() {
        // Start-Tangente zeigt nach unten (+Y im Display), Ende auf der X-Achse
        let points = sample_segment(
            DVec2::ZERO,
            std::f64::consts::FRAC_PI_2,
            DVec2::new(100.0, 0.0),
            -std::f64::consts::FRAC_PI_2,
            true,
            10,
        );
        assert!(points[5].y > 1.0);
    }

    #[test]
    fn polyline_distance_uses_segments_not_vertices() {
        let line = [DVec2::ZERO, DVec2::new(100.0, 0.0)];
        assert_relative_eq!(distance_to_polyline(DVec2::new(50.0, 3.0), &line), 3.0);
        assert_relative_eq!(distance_to_polyline(DVec2::new(-4.0, 3.0), &line), 5.0);
        assert!(distance_to_polyline(DVec2::ZERO, &[]).is_infinite());
    }

    #[test]
    fn round_to_90_snaps_to_dominant_axis() {
        let anchor = DVec2::new(10.0, 10.0);
        assert_eq!(
            round_to_90(anchor, DVec2::new(50.0, 14.0)),
            DVec2::new(50.0, 10.0)
        );
        assert_eq!(
            round_to_90(anchor, DVec2::new(12.0, -30.0)),
            DVec2::new(10.0, -30.0)
        );
    }
}
