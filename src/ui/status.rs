//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, DragState};
use crate::core::{approx_length, ARC_LENGTH_LUT_SAMPLES};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            ui.separator();

            ui.label(format!(
                "Samples: {} | Normals: {} | Länge: {:.1}",
                state.curve.samples.len(),
                state.curve.projections.len(),
                approx_length(&state.curve.curve, ARC_LENGTH_LUT_SAMPLES)
            ));

            ui.separator();

            match state.curve.drag {
                DragState::Dragging { target, .. } => {
                    let pos = state.curve.curve.point(target);
                    ui.label(format!(
                        "Dragging: {:?} ({:.1}, {:.1})",
                        target, pos.x, pos.y
                    ));
                }
                DragState::Idle => {
                    ui.label("Dragging: —");
                }
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
