//! Core-Domänentypen: Fächer-Kurve, Posen, Karten, Hand, Kamera.

pub mod camera;
pub mod card;
/// Kurven-Modell der Hand
///
/// Quadratische Bézier-Kurve mit Tangente und Normale für die Kartenausrichtung.
pub mod curve;
pub mod hand;
pub mod pose;

pub use camera::HandCamera;
pub use card::{CardHandle, CardProxy};
pub use curve::{HandAnchor, HandCurve, curve_normal, curve_point, curve_tangent};
pub use hand::Hand;
pub use pose::{FORWARD, Plane, Pose, Ray, look_rotation, rotate_towards};
