//! Renderer-freier Host: Karten als orientierte Rechtecke, Raycasts in Software.

use glam::{Vec2, Vec3};
use indexmap::IndexMap;

use super::{HandHost, HitTarget, RayHit, RayQuery};
use crate::core::{CardHandle, HandCamera, Plane, Pose, Ray};

/// Statische Szenen-Geometrie (z.B. Spielfeld-Zonen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneryRect {
    pub pose: Pose,
    pub size: Vec2,
}

/// Minimaler Host für Tests, Benchmarks und den Viewer.
///
/// Karten liegen in Einfügereihenfolge in einer `IndexMap`, damit Iteration
/// und Tiebreaks bei gleich weit entfernten Treffern deterministisch sind.
#[derive(Debug, Clone)]
pub struct HeadlessScene {
    /// Kamera für Zeiger-Strahlen
    pub camera: HandCamera,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
    /// Kartengröße in Welteinheiten
    pub card_size: Vec2,
    cards: IndexMap<CardHandle, Pose>,
    scenery: Vec<SceneryRect>,
    next_handle: u64,
    destroyed: Vec<CardHandle>,
}

impl HeadlessScene {
    pub fn new(viewport_size: Vec2, card_size: Vec2) -> Self {
        Self {
            camera: HandCamera::new(),
            viewport_size,
            card_size,
            cards: IndexMap::new(),
            scenery: Vec::new(),
            next_handle: 1,
            destroyed: Vec::new(),
        }
    }

    /// Anzahl lebender Karten-Objekte.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Lebende Karten mit ihrer aktuellen Pose.
    pub fn cards(&self) -> impl Iterator<Item = (CardHandle, &Pose)> {
        self.cards.iter().map(|(handle, pose)| (*handle, pose))
    }

    /// Zerstörte Handles in Zerstörungsreihenfolge.
    pub fn destroyed(&self) -> &[CardHandle] {
        &self.destroyed
    }

    pub fn add_scenery(&mut self, rect: SceneryRect) {
        self.scenery.push(rect);
    }

    /// Bildschirmposition eines Weltpunkts (für Tests und Viewer).
    pub fn world_to_screen(&self, world: Vec3) -> Vec2 {
        self.camera.world_to_screen(world, self.viewport_size)
    }

    /// Die vier Eckpunkte einer Karte (links-unten beginnend, gegen den Uhrzeigersinn).
    pub fn card_corners(&self, pose: &Pose) -> [Vec3; 4] {
        rect_corners(pose, self.card_size)
    }
}

fn rect_corners(pose: &Pose, size: Vec2) -> [Vec3; 4] {
    let half_right = pose.right() * size.x * 0.5;
    let half_up = pose.up() * size.y * 0.5;
    let center = pose.position;
    [
        center - half_right - half_up,
        center + half_right - half_up,
        center + half_right + half_up,
        center - half_right + half_up,
    ]
}

/// Schnitt eines Strahls mit einem orientierten Rechteck.
fn intersect_rect(ray: &Ray, pose: &Pose, size: Vec2) -> Option<(f32, Vec3)> {
    let plane = Plane::from_point_normal(pose.position, pose.forward());
    let distance = plane.raycast(ray)?;
    let point = ray.point_at(distance);
    let local = point - pose.position;
    let inside = local.dot(pose.right()).abs() <= size.x * 0.5
        && local.dot(pose.up()).abs() <= size.y * 0.5;
    inside.then_some((distance, point))
}

impl HandHost for HeadlessScene {
    fn pointer_ray(&self, screen_pos: Vec2) -> Ray {
        self.camera.screen_ray(screen_pos, self.viewport_size)
    }

    fn raycast(&self, query: &RayQuery) -> Option<RayHit> {
        let card_hits = self
            .cards
            .iter()
            .filter(|(handle, _)| query.exclude != Some(**handle))
            .filter_map(|(handle, pose)| {
                intersect_rect(&query.ray, pose, self.card_size)
                    .map(|(distance, point)| (distance, point, HitTarget::Card(*handle)))
            });
        let scenery_hits = self.scenery.iter().filter_map(|rect| {
            intersect_rect(&query.ray, &rect.pose, rect.size)
                .map(|(distance, point)| (distance, point, HitTarget::Scenery))
        });

        card_hits
            .chain(scenery_hits)
            .filter(|(distance, _, _)| *distance <= query.max_distance)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(distance, point, target)| RayHit {
                distance,
                point,
                target,
            })
    }

    fn spawn_card(&mut self) -> CardHandle {
        let handle = CardHandle(self.next_handle);
        self.next_handle += 1;
        self.cards.insert(handle, Pose::IDENTITY);
        log::trace!("Karten-Objekt {:?} instanziiert", handle);
        handle
    }

    fn destroy_card(&mut self, handle: CardHandle) {
        if self.cards.shift_remove(&handle).is_some() {
            self.destroyed.push(handle);
            log::trace!("Karten-Objekt {:?} zerstört", handle);
        }
    }

    fn card_pose(&self, handle: CardHandle) -> Option<Pose> {
        self.cards.get(&handle).copied()
    }

    fn set_card_pose(&mut self, handle: CardHandle, pose: Pose) {
        if let Some(slot) = self.cards.get_mut(&handle) {
            *slot = pose;
        }
    }

    fn set_card_size(&mut self, size: Vec2) {
        self.card_size = size;
    }
}
