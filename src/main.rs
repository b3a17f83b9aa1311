//! Curve Normals Editor.
//!
//! Interaktiver Editor für kubische Bézier-Kurven: vier greifbare
//! Kontrollpunkte, Arc-Length-Samples mit Normalen-Visualisierung,
//! Pan/Zoom-Kamera auf egui-Basis.

use curve_normals_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

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

        log::info!("Curve Normals Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Curve Normals Editor"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Curve Normals Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.options,
                    &self.state.curve.drag_targets(),
                    self.state.curve.is_dragging(),
                ));

                let scene = self.controller.build_render_scene(&self.state, viewport_size);
                render::paint_scene(ui.painter(), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
