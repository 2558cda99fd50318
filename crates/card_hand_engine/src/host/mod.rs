//! Host-Vertrag: Dienste, die eine Engine/ein Frontend der Hand bereitstellt.
//!
//! Die Hand konsumiert Kamera-Strahlen, Raycasts, Objekt-Lebenszyklus und
//! Transform-Zugriff ausschließlich über [`HandHost`]. Zeiger-Eingaben kommen
//! pro Tick als [`PointerState`] herein.

mod scene;

use glam::{Vec2, Vec3};

use crate::core::{CardHandle, Pose, Ray};

pub use scene::{HeadlessScene, SceneryRect};

/// Was ein Strahl getroffen hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Hit-Volumen einer Karte
    Card(CardHandle),
    /// Sonstige Szenen-Geometrie
    Scenery,
}

impl HitTarget {
    /// Handle der getroffenen Karte, falls es eine ist.
    pub fn card(self) -> Option<CardHandle> {
        match self {
            Self::Card(handle) => Some(handle),
            Self::Scenery => None,
        }
    }
}

/// Ergebnis eines Raycasts (nächster Treffer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Abstand entlang des Strahls
    pub distance: f32,
    /// Trefferpunkt in Weltkoordinaten
    pub point: Vec3,
    pub target: HitTarget,
}

/// Parameter eines Raycasts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayQuery {
    pub ray: Ray,
    /// Treffer jenseits dieser Distanz werden ignoriert
    pub max_distance: f32,
    /// Karte, deren eigenes Hit-Volumen übersprungen wird
    pub exclude: Option<CardHandle>,
}

impl RayQuery {
    pub fn new(ray: Ray, max_distance: f32) -> Self {
        Self {
            ray,
            max_distance,
            exclude: None,
        }
    }

    /// Überspringt das Hit-Volumen von `handle`.
    pub fn excluding(mut self, handle: CardHandle) -> Self {
        self.exclude = Some(handle);
        self
    }
}

/// Zeiger- und Tastenzustand eines Frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Zeigerposition in Screen-Pixeln (None = außerhalb des Viewports)
    pub screen_pos: Option<Vec2>,
    /// Primärtaste gehalten
    pub primary_down: bool,
    /// Primärtaste in diesem Frame losgelassen
    pub primary_released: bool,
    /// Auslöser „Karte ziehen“ in diesem Frame gedrückt
    pub draw_pressed: bool,
    /// Auslöser „Karte ausspielen“ in diesem Frame gedrückt
    pub play_pressed: bool,
}

impl PointerState {
    /// Zeiger an `screen_pos` ohne Tasten.
    pub fn at(screen_pos: Vec2) -> Self {
        Self {
            screen_pos: Some(screen_pos),
            ..Self::default()
        }
    }
}

/// Dienste des Hosts, die die Hand pro Tick benötigt.
pub trait HandHost {
    /// Kamera-Strahl durch eine Bildschirmposition.
    fn pointer_ray(&self, screen_pos: Vec2) -> Ray;

    /// Nächster Treffer entlang des Strahls.
    fn raycast(&self, query: &RayQuery) -> Option<RayHit>;

    /// Instanziiert ein neues Karten-Objekt aus der Vorlage.
    fn spawn_card(&mut self) -> CardHandle;

    /// Zerstört ein Karten-Objekt. Unbekannte Handles werden ignoriert.
    fn destroy_card(&mut self, handle: CardHandle);

    fn card_pose(&self, handle: CardHandle) -> Option<Pose>;

    fn set_card_pose(&mut self, handle: CardHandle, pose: Pose);

    /// Neue Kartengröße für Hit-Volumen und Darstellung aller Karten.
    fn set_card_size(&mut self, size: Vec2);
}
