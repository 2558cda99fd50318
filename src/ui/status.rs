//! Status-Bar am unteren Bildschirmrand.

use card_hand_engine::HandState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &HandState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Karten: {}", state.card_count()));

            ui.separator();

            let slot_label = |slot: Option<usize>| slot.map_or("-".to_string(), |s| s.to_string());
            ui.label(format!(
                "Selektiert: {} | Gezogen: {}",
                slot_label(state.interaction.selected),
                slot_label(state.interaction.dragged)
            ));

            ui.separator();

            let pointer = state.interaction.pointer_world;
            ui.label(format!("Zeiger: ({:.2}, {:.2})", pointer.x, pointer.y));

            ui.separator();

            ui.label("Leertaste: ziehen | Z: ausspielen | G: Gizmo | R: Optionen laden | Strg+S: speichern");

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
