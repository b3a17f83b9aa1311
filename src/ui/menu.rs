//! Top-Menü (File, Edit, View).

use crate::app::AppIntent;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Curve").clicked() {
                    events.push(AppIntent::ResetCurveRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("Curve Normals Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
