//! Zeichnet die Karten der Hand als gedrehte Rechtecke in Tiefenreihenfolge.

use card_hand_engine::{HandHost, HandState, HeadlessScene, Pose};

const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(236, 228, 210);
const CARD_FILL_HOVERED: egui::Color32 = egui::Color32::from_rgb(255, 246, 200);
const CARD_FILL_DRAGGED: egui::Color32 = egui::Color32::from_rgb(200, 230, 255);
const CARD_OUTLINE: egui::Color32 = egui::Color32::from_rgb(60, 50, 40);

/// Zeichenauftrag einer Karte.
struct CardSprite {
    slot_index: usize,
    pose: Pose,
    hovered: bool,
    dragged: bool,
}

/// Zeichnet alle Karten; weiter entfernte (größeres z) zuerst.
pub fn paint_hand(
    painter: &egui::Painter,
    viewport_rect: egui::Rect,
    state: &HandState,
    scene: &HeadlessScene,
) {
    let mut sprites: Vec<CardSprite> = state
        .hand
        .iter()
        .filter_map(|card| {
            let pose = scene.card_pose(card.handle())?;
            Some(CardSprite {
                slot_index: card.slot_index(),
                pose,
                hovered: state.interaction.is_hovered(card.slot_index()),
                dragged: card.in_drag(),
            })
        })
        .collect();
    sprites.sort_by(|a, b| b.pose.position.z.total_cmp(&a.pose.position.z));

    for sprite in &sprites {
        let corners: Vec<egui::Pos2> = scene
            .card_corners(&sprite.pose)
            .iter()
            .map(|corner| {
                let screen = scene.world_to_screen(*corner);
                viewport_rect.min + egui::vec2(screen.x, screen.y)
            })
            .collect();

        let fill = if sprite.dragged {
            CARD_FILL_DRAGGED
        } else if sprite.hovered {
            CARD_FILL_HOVERED
        } else {
            CARD_FILL
        };
        painter.add(egui::Shape::convex_polygon(
            corners,
            fill,
            egui::Stroke::new(1.5, CARD_OUTLINE),
        ));

        let center = scene.world_to_screen(sprite.pose.position);
        painter.text(
            viewport_rect.min + egui::vec2(center.x, center.y),
            egui::Align2::CENTER_CENTER,
            sprite.slot_index.to_string(),
            egui::FontId::proportional(16.0),
            CARD_OUTLINE,
        );
    }
}
