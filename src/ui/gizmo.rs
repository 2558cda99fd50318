//! Debug-Gizmo: Kontrollpunkte, Kurvenverlauf und Hand-Bounding-Box.

use card_hand_engine::{HandState, HeadlessScene};
use glam::Vec3;

/// Anzahl der Liniensegmente für die Kurven-Vorschau.
const CURVE_SEGMENTS: usize = 20;
const GIZMO_COLOR: egui::Color32 = egui::Color32::from_rgb(70, 110, 255);

/// Zeichnet Kurve, Endpunkte und Bounding-Box der Hand.
pub fn paint_gizmo(
    painter: &egui::Painter,
    viewport_rect: egui::Rect,
    state: &HandState,
    scene: &HeadlessScene,
) {
    let to_screen = |world: Vec3| {
        let screen = scene.world_to_screen(world);
        viewport_rect.min + egui::vec2(screen.x, screen.y)
    };
    let stroke = egui::Stroke::new(1.0, GIZMO_COLOR);

    let polyline: Vec<egui::Pos2> = state
        .curve
        .polyline(CURVE_SEGMENTS)
        .into_iter()
        .map(to_screen)
        .collect();
    painter.add(egui::Shape::line(polyline, stroke));

    for point in [state.curve.a, state.curve.c] {
        painter.circle_filled(to_screen(point), 4.0, GIZMO_COLOR);
    }

    let center = state.options.hand_offset;
    let half = state.options.hand_size * 0.5;
    let corners = [
        Vec3::new(center.x - half.x, center.y - half.y, 0.0),
        Vec3::new(center.x + half.x, center.y - half.y, 0.0),
        Vec3::new(center.x + half.x, center.y + half.y, 0.0),
        Vec3::new(center.x - half.x, center.y + half.y, 0.0),
    ];
    let mut outline: Vec<egui::Pos2> = corners
        .iter()
        .map(|local| to_screen(state.anchor.transform_point(*local)))
        .collect();
    outline.push(outline[0]);
    painter.add(egui::Shape::line(outline, stroke));
}
