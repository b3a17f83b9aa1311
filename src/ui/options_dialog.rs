//! Optionen-Dialog für Sampling, Farben, Größen und Kamera.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Sampling ────────────────────────────────────
                    ui.collapsing("Sampling", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Segmente:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.sample_count)
                                        .range(1..=256)
                                        .speed(1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Scan-Stützstellen:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.projection_scan_samples)
                                        .range(2..=10_000)
                                        .speed(10),
                                )
                                .changed();
                        });
                    });

                    // ── Kurve & Normalen ────────────────────────────
                    ui.collapsing("Kurve & Normalen", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Normalenlänge (Welt):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.normal_length_world)
                                        .range(1.0..=200.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Kurvenbreite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.curve_width_px)
                                        .range(0.5..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Normalenbreite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.normal_width_px)
                                        .range(0.5..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Kurvenfarbe:", &mut opts.curve_color);
                    });

                    // ── Marker & Handles ────────────────────────────
                    ui.collapsing("Marker & Handles", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Marker-Größe (Welt):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.sample_marker_size_world)
                                        .range(1.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Handle-Größe (Welt):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.handle_size_world)
                                        .range(1.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Pick-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pick_radius_px)
                                        .range(4.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Marker-Farbe:", &mut opts.sample_marker_color);
                        changed |= color_edit(ui, "Handle Start:", &mut opts.handle_color_start);
                        changed |=
                            color_edit(ui, "Handle Steuerpunkt 1:", &mut opts.handle_color_control1);
                        changed |= color_edit(
                            ui,
                            "Handle Steuerpunkt 2 / Ende:",
                            &mut opts.handle_color_control2,
                        );
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Menü):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_step)
                                        .range(1.01..=3.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Scroll):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_scroll_zoom_step)
                                        .range(1.01..=2.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
