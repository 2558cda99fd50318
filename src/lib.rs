//! Card Hand Viewer Library.
//! egui-Frontend für die Card-Hand-Engine, als Library exportiert für Tests.

pub mod ui;

pub use card_hand_engine::{
    CardHandle, CardPlacement, CardProxy, CommandLog, Hand, HandAnchor, HandCamera, HandCommand,
    HandController, HandCurve, HandHost, HandIntent, HandOptions, HandState, HeadlessScene,
    HitTarget, InteractionState, PointerState, Pose, Ray, RayHit, RayQuery, SceneryRect,
};
