//! Card-Hand-Engine.
//! Fächer-Layout und Zeiger-Interaktion für Kartenhände, unabhängig vom Renderer.

pub mod app;
pub mod core;
pub mod host;
pub mod shared;

pub use crate::app::{
    CardPlacement, CommandLog, HandCommand, HandController, HandIntent, HandState,
    InteractionState,
};
pub use crate::core::{
    CardHandle, CardProxy, FORWARD, Hand, HandAnchor, HandCamera, HandCurve, Plane, Pose, Ray,
};
pub use crate::host::{
    HandHost, HeadlessScene, HitTarget, PointerState, RayHit, RayQuery, SceneryRect,
};
pub use crate::shared::HandOptions;
