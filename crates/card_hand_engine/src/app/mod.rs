//! Application-Layer: Controller, State, Events, Handler und Layout.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod layout;
/// Hand-State
///
/// Dieses Modul verwaltet den Zustand der Hand (Karten, Interaktion, Geometrie).
pub mod state;

pub use command_log::CommandLog;
pub use controller::HandController;
pub use events::{HandCommand, HandIntent};
pub use layout::{CardPlacement, LayoutContext};
pub use state::{HandState, InteractionState};
