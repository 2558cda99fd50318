//! Posen, Strahlen und Ebenen im 3D-Raum der Hand.
//!
//! Reine Mathematik ohne Host-Abhängigkeiten. Konvention: `+Z` zeigt von der
//! Kamera weg in die Szene, `+Y` ist oben.

use glam::{Mat3, Quat, Vec3};

/// Feste Vorwärtsachse aller Karten (Blickrichtung der Kamera).
pub const FORWARD: Vec3 = Vec3::Z;

/// Weltposition und Orientierung eines Objekts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    /// Neutrale Pose im Ursprung.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Lokale X-Achse in Weltkoordinaten.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Lokale Y-Achse in Weltkoordinaten.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Lokale Z-Achse in Weltkoordinaten.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Halbgerade mit normierter Richtung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Erstellt einen Strahl; eine Null-Richtung fällt auf `FORWARD` zurück.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(FORWARD),
        }
    }

    /// Punkt im Abstand `distance` entlang des Strahls.
    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Ebene in Hesse-Normalform: `normal · p + distance = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    /// Ebene durch `point` mit Normale `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Vorzeichenbehafteter Abstand eines Punkts zur Ebene.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Strahlparameter des Schnittpunkts, falls er vor dem Ursprung liegt.
    ///
    /// Parallele Strahlen und Schnitte hinter dem Ursprung liefern `None`.
    pub fn raycast(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < f32::EPSILON {
            return None;
        }
        let enter = -self.signed_distance(ray.origin) / denom;
        (enter > 0.0).then_some(enter)
    }

    /// Schnittpunkt des Strahls mit der Ebene.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Vec3> {
        self.raycast(ray).map(|enter| ray.point_at(enter))
    }
}

/// Rotation, deren Z-Achse `forward` und deren Y-Achse möglichst `up` ist.
///
/// Linkshändige Konvention (rechts = `up × forward`). Entartete Eingaben
/// (Null-Vektoren, `up` parallel zu `forward`) liefern trotzdem eine gültige
/// Rotation.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let Some(forward) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };
    let Some(right) = up.cross(forward).try_normalize() else {
        return Quat::from_rotation_arc(Vec3::Z, forward);
    };
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Dreht `from` um höchstens `max_radians` in Richtung `to`.
pub fn rotate_towards(from: Quat, to: Quat, max_radians: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle <= f32::EPSILON || angle <= max_radians {
        return to;
    }
    from.slerp(to, max_radians.max(0.0) / angle)
}
