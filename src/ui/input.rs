//! Viewport-Input-Handling: egui-Zeiger und Tasten → `PointerState`.
//!
//! Leertaste zieht eine Karte, `Z` spielt die gezogene Karte aus.

use card_hand_engine::PointerState;

/// Taste für „Karte ziehen“.
pub const DRAW_KEY: egui::Key = egui::Key::Space;
/// Taste für „Karte ausspielen“.
pub const PLAY_KEY: egui::Key = egui::Key::Z;

/// Sammelt den Zeigerzustand des aktuellen Frames für das Viewport.
pub fn collect_pointer_state(ui: &egui::Ui, response: &egui::Response) -> PointerState {
    ui.input(|input| pointer_state_from_input(input, response.rect))
}

/// Übersetzt egui-Input in einen `PointerState` relativ zu `viewport_rect`.
///
/// Zeigerpositionen außerhalb des Viewports werden als `None` gemeldet.
pub fn pointer_state_from_input(input: &egui::InputState, viewport_rect: egui::Rect) -> PointerState {
    let screen_pos = input
        .pointer
        .hover_pos()
        .filter(|pos| viewport_rect.contains(*pos))
        .map(|pos| {
            let local = pos - viewport_rect.min;
            glam::Vec2::new(local.x, local.y)
        });

    PointerState {
        screen_pos,
        primary_down: input.pointer.primary_down(),
        primary_released: input.pointer.primary_released(),
        draw_pressed: input.key_pressed(DRAW_KEY),
        play_pressed: input.key_pressed(PLAY_KEY),
    }
}
