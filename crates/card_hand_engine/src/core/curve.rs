//! Fächer-Kurve: quadratische Bézier-Kurve durch den Hand-Anker.
//!
//! Alle Funktionen klemmen `t` auf `[0, 1]`, sodass Eingaben außerhalb des
//! Bereichs nie zu Punkten jenseits der Endpunkte führen.

use glam::{Affine3A, Vec3};

use super::pose::{FORWARD, Plane};

/// B(t) = (1-t)²·A + 2(1-t)t·B + t²·C
pub fn curve_point(a: Vec3, b: Vec3, c: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    inv * inv * a + 2.0 * inv * t * b + t * t * c
}

/// B'(t) = 2(1-t)·(B-A) + 2t·(C-B)
pub fn curve_tangent(a: Vec3, b: Vec3, c: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    2.0 * (1.0 - t) * (b - a) + 2.0 * t * (c - b)
}

/// Senkrechte zu Tangente und `FORWARD`; dient als Hochachse der Karte.
pub fn curve_normal(a: Vec3, b: Vec3, c: Vec3, t: f32) -> Vec3 {
    curve_tangent(a, b, c, t).cross(FORWARD)
}

/// Transform des Objekts, an dem die Hand hängt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAnchor {
    /// Lokal→Welt-Transformation
    pub transform: Affine3A,
}

impl HandAnchor {
    pub fn new(transform: Affine3A) -> Self {
        Self { transform }
    }

    /// Anker ohne Rotation und Skalierung an `position`.
    pub fn from_translation(position: Vec3) -> Self {
        Self::new(Affine3A::from_translation(position))
    }

    /// Weltposition des Ankers.
    pub fn position(&self) -> Vec3 {
        self.transform.translation.into()
    }

    /// Transformiert einen lokalen Punkt in Weltkoordinaten.
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.transform.transform_point3(local)
    }

    /// Projektionsebene für Zeiger-Eingaben: durch den Anker, Normale `-FORWARD`.
    pub fn reference_plane(&self) -> Plane {
        Plane::from_point_normal(self.position(), -FORWARD)
    }
}

impl Default for HandAnchor {
    fn default() -> Self {
        Self::new(Affine3A::IDENTITY)
    }
}

/// Kontrollpunkte der Fächer-Kurve in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandCurve {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl HandCurve {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Leitet die Kontrollpunkte aus Anker und lokalen Kurven-Offsets ab.
    ///
    /// A und C sind die transformierten Offsets, B ist die Ankerposition.
    pub fn from_anchor(anchor: &HandAnchor, curve_start: Vec3, curve_end: Vec3) -> Self {
        Self {
            a: anchor.transform_point(curve_start),
            b: anchor.position(),
            c: anchor.transform_point(curve_end),
        }
    }

    pub fn point(&self, t: f32) -> Vec3 {
        curve_point(self.a, self.b, self.c, t)
    }

    pub fn tangent(&self, t: f32) -> Vec3 {
        curve_tangent(self.a, self.b, self.c, t)
    }

    pub fn normal(&self, t: f32) -> Vec3 {
        curve_normal(self.a, self.b, self.c, t)
    }

    /// Polyline mit `segments + 1` Punkten von A nach C (Debug-Gizmo).
    pub fn polyline(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point(i as f32 / segments as f32))
            .collect()
    }
}
