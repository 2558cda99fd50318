//! UI-Komponenten: Eingabe-Mapping, Hand-Darstellung, Debug-Gizmo und Status-Bar.

pub mod gizmo;
pub mod hand_painter;
pub mod input;
pub mod status;

pub use gizmo::paint_gizmo;
pub use hand_painter::paint_hand;
pub use input::collect_pointer_state;
pub use status::render_status_bar;
