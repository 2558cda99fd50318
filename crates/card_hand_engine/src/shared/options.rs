//! Zentrale Konfiguration für das Hand-Layout.
//!
//! `HandOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::bail;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Lokaler Startpunkt der Fächer-Kurve relativ zum Hand-Anker.
pub const CURVE_START: Vec3 = Vec3::new(2.0, -0.7, 0.0);
/// Lokaler Endpunkt der Fächer-Kurve relativ zum Hand-Anker.
pub const CURVE_END: Vec3 = Vec3::new(-2.0, -0.7, 0.0);

// ── Selektion ───────────────────────────────────────────────────────

/// Skalierung der Auffächerung um die selektierte Karte (0 = keine Auffächerung).
pub const SELECTION_SPACING: f32 = 1.0;
/// Maximaler Versatz auf `t` für direkte Nachbarn der selektierten Karte.
pub const SELECTION_SPREAD_STEP: f32 = 0.02;

// ── Karten-Platzierung ─────────────────────────────────────────────

/// Kartengröße in Welteinheiten (Breite, Höhe).
pub const CARD_SIZE: Vec2 = Vec2::new(0.63, 0.88);
/// Anhebung entlang der Karten-Hochachse über den Kurvenpunkt.
pub const CARD_LIFT: f32 = 0.3;
/// Tiefenversatz Richtung Betrachter für die gehoverte Karte.
pub const HOVER_DEPTH_OFFSET: f32 = 0.2;
/// Tiefenstaffelung entlang des Fächers (`z += t * Faktor`).
pub const STACK_DEPTH_SCALE: f32 = 0.5;
/// Maximale Drehgeschwindigkeit beim Ausrichten in Grad pro Sekunde.
pub const ROTATION_SPEED_DEG: f32 = 80.0;

// ── Hit-Tests ───────────────────────────────────────────────────────

/// Maximale Länge des Zeiger-Strahls.
pub const POINTER_RAY_LENGTH: f32 = 1000.0;
/// Maximale Länge des Vorwärts-Strahls beim Loslassen einer gezogenen Karte.
pub const RELEASE_RAY_LENGTH: f32 = 100.0;

// ── Debug-Gizmo ─────────────────────────────────────────────────────

/// Mittelpunkt-Versatz der Hand-Bounding-Box (nur Visualisierung).
pub const HAND_OFFSET: Vec2 = Vec2::new(0.0, -0.3);
/// Größe der Hand-Bounding-Box (nur Visualisierung).
pub const HAND_SIZE: Vec2 = Vec2::new(9.0, 1.7);

/// Alle zur Laufzeit änderbaren Hand-Optionen.
/// Wird als `card_hand.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Kurvenstart im lokalen Raum des Ankers
    pub curve_start: Vec3,
    /// Kurvenende im lokalen Raum des Ankers
    pub curve_end: Vec3,

    // ── Selektion ───────────────────────────────────────────────
    /// Auffächerung der Nachbarn um die selektierte Karte
    pub selection_spacing: f32,

    // ── Platzierung ─────────────────────────────────────────────
    /// Kartengröße (Hitbox und Darstellung)
    pub card_size: Vec2,
    pub card_lift: f32,
    pub hover_depth_offset: f32,
    pub stack_depth_scale: f32,
    /// Drehgeschwindigkeit in Grad/s
    pub rotation_speed_deg: f32,

    // ── Hit-Tests ───────────────────────────────────────────────
    pub pointer_ray_length: f32,
    pub release_ray_length: f32,

    // ── Debug ───────────────────────────────────────────────────
    /// Versatz der Hand-Bounding-Box
    pub hand_offset: Vec2,
    /// Größe der Hand-Bounding-Box
    pub hand_size: Vec2,
}

impl Default for HandOptions {
    fn default() -> Self {
        Self {
            curve_start: CURVE_START,
            curve_end: CURVE_END,

            selection_spacing: SELECTION_SPACING,

            card_size: CARD_SIZE,
            card_lift: CARD_LIFT,
            hover_depth_offset: HOVER_DEPTH_OFFSET,
            stack_depth_scale: STACK_DEPTH_SCALE,
            rotation_speed_deg: ROTATION_SPEED_DEG,

            pointer_ray_length: POINTER_RAY_LENGTH,
            release_ray_length: RELEASE_RAY_LENGTH,

            hand_offset: HAND_OFFSET,
            hand_size: HAND_SIZE,
        }
    }
}

impl HandOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("card_hand"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("card_hand.toml")
    }

    /// Prüft, ob die Werte ein benutzbares Layout ergeben.
    pub fn validate(&self) -> anyhow::Result<()> {
        let vectors = [self.curve_start, self.curve_end];
        if !vectors.iter().all(|v| v.is_finite()) {
            bail!("Kurven-Offsets müssen endlich sein");
        }
        if !(self.card_size.is_finite() && self.card_size.cmpgt(Vec2::ZERO).all()) {
            bail!("Kartengröße muss positiv sein: {:?}", self.card_size);
        }
        if !(self.pointer_ray_length > 0.0 && self.release_ray_length > 0.0) {
            bail!("Strahllängen müssen positiv sein");
        }
        if !(self.rotation_speed_deg >= 0.0 && self.rotation_speed_deg.is_finite()) {
            bail!(
                "Drehgeschwindigkeit darf nicht negativ sein: {}",
                self.rotation_speed_deg
            );
        }
        let scalars = [
            self.selection_spacing,
            self.card_lift,
            self.hover_depth_offset,
            self.stack_depth_scale,
        ];
        if !scalars.iter().all(|v| v.is_finite()) {
            bail!("Layout-Werte müssen endlich sein");
        }
        Ok(())
    }

    /// Maximaler Drehwinkel (Radiant) für einen Frame der Länge `delta_time`.
    pub fn max_rotation_step(&self, delta_time: f32) -> f32 {
        self.rotation_speed_deg.to_radians() * delta_time.max(0.0)
    }
}
