//! Card Hand Viewer.
//!
//! Zeigt eine Kartenhand als Fächer entlang einer Bézier-Kurve.
//! Karten lassen sich mit der Maus anheben, ziehen und ausspielen.

use anyhow::Context;
use card_hand::{
    ui, HandAnchor, HandController, HandIntent, HandOptions, HandState, HeadlessScene,
};
use eframe::egui;
use glam::{Vec2, Vec3};

/// Taste zum Ein-/Ausblenden des Debug-Gizmos.
const GIZMO_KEY: egui::Key = egui::Key::G;
/// Taste zum Neuladen der Optionen-Datei.
const RELOAD_KEY: egui::Key = egui::Key::R;
/// Position des Hand-Ankers in Weltkoordinaten.
const ANCHOR_POSITION: Vec3 = Vec3::new(0.0, -1.2, 0.0);

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Card Hand Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Card Hand Viewer"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Card Hand Viewer",
            options,
            Box::new(|_cc| Ok(Box::new(HandViewerApp::new()?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct HandViewerApp {
    state: HandState,
    controller: HandController,
    scene: HeadlessScene,
    show_gizmo: bool,
}

impl HandViewerApp {
    fn new() -> anyhow::Result<Self> {
        let mut app = Self {
            state: HandState::new(
                HandAnchor::from_translation(ANCHOR_POSITION),
                HandOptions::default(),
            ),
            controller: HandController::new(),
            scene: HeadlessScene::new(Vec2::new(1280.0, 720.0), HandOptions::default().card_size),
            show_gizmo: true,
        };
        app.reload_options()
            .context("Start-Optionen konnten nicht übernommen werden")?;
        Ok(app)
    }

    /// Lädt `card_hand.toml` (oder Standardwerte) und übernimmt sie über den Controller.
    fn reload_options(&mut self) -> anyhow::Result<()> {
        let config_path = HandOptions::config_path();
        let options = HandOptions::load_from_file(&config_path);
        self.controller.handle_intent(
            &mut self.state,
            &mut self.scene,
            HandIntent::OptionsChanged {
                options: Box::new(options),
            },
        )
    }
}

impl eframe::App for HandViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::render_status_bar(ctx, &self.state);

        if ctx.input(|i| i.key_pressed(GIZMO_KEY)) {
            self.show_gizmo = !self.show_gizmo;
        }
        if ctx.input(|i| i.key_pressed(RELOAD_KEY)) {
            if let Err(e) = self.reload_options() {
                log::error!("Optionen konnten nicht neu geladen werden: {:#}", e);
            }
        }
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::S)) {
            if let Err(e) = self.state.options.save_to_file(&HandOptions::config_path()) {
                log::error!("Optionen konnten nicht gespeichert werden: {:#}", e);
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(34, 52, 40)))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let rect = response.rect;
                self.scene.viewport_size = Vec2::new(rect.width(), rect.height());

                let pointer = ui::collect_pointer_state(ui, &response);
                let delta_time = ui.input(|i| i.stable_dt);

                if let Err(e) =
                    self.controller
                        .tick(&mut self.state, &mut self.scene, delta_time, &pointer)
                {
                    log::error!("Tick fehlgeschlagen: {:#}", e);
                }

                ui::paint_hand(&painter, rect, &self.state, &self.scene);
                if self.show_gizmo {
                    ui::paint_gizmo(&painter, rect, &self.state, &self.scene);
                }
            });

        // Karten rotieren über mehrere Frames in ihre Zielpose
        ctx.request_repaint();
    }
}
