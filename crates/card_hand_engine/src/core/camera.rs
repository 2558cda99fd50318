//! Orthografische Kamera entlang `+Z` für Zeiger-Strahlen und Darstellung.

use glam::{Vec2, Vec3};

use super::pose::{FORWARD, Ray};

/// Orthografische Kamera mit Blickrichtung `FORWARD`.
#[derive(Debug, Clone)]
pub struct HandCamera {
    /// Position der Kamera in Welt-Koordinaten (z = Bildebene)
    pub position: Vec3,
}

impl HandCamera {
    /// Sichtbare Welt-Halbhöhe.
    pub const BASE_WORLD_EXTENT: f32 = 2.5;

    /// Erstellt eine Kamera zehn Einheiten vor dem Ursprung.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -10.0),
        }
    }

    /// Konvertiert Screen-Koordinaten (Y nach unten) in die XY-Weltebene.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let size = screen_size.max(Vec2::ONE);
        let ndc = (screen_pos / size) * 2.0 - Vec2::ONE;
        let aspect = size.x / size.y;
        Vec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect,
            -ndc.y * Self::BASE_WORLD_EXTENT,
        ) + self.position.truncate()
    }

    /// Umkehrung von [`Self::screen_to_world`]; z wird ignoriert.
    pub fn world_to_screen(&self, world: Vec3, screen_size: Vec2) -> Vec2 {
        let size = screen_size.max(Vec2::ONE);
        let aspect = size.x / size.y;
        let rel = world.truncate() - self.position.truncate();
        let ndc = Vec2::new(
            rel.x / (Self::BASE_WORLD_EXTENT * aspect),
            -rel.y / Self::BASE_WORLD_EXTENT,
        );
        (ndc + Vec2::ONE) * 0.5 * size
    }

    /// Strahl durch einen Bildschirmpunkt, startend auf der Bildebene.
    pub fn screen_ray(&self, screen_pos: Vec2, screen_size: Vec2) -> Ray {
        let world = self.screen_to_world(screen_pos, screen_size);
        Ray::new(world.extend(self.position.z), FORWARD)
    }
}

impl Default for HandCamera {
    fn default() -> Self {
        Self::new()
    }
}
