//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, drag_active: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (
        modifiers,
        key_plus_pressed,
        key_minus_pressed,
        key_home_pressed,
        key_r_pressed,
        key_escape_pressed,
    ) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::Home),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_plus_pressed {
        events.push(AppIntent::ZoomInRequested);
    }

    if key_minus_pressed {
        events.push(AppIntent::ZoomOutRequested);
    }

    // Home oder R = Kamera auf die Kurve zentrieren
    if key_home_pressed || (key_r_pressed && !modifiers.command) {
        events.push(AppIntent::ResetCameraRequested);
    }

    // Escape bricht einen aktiven Handle-Drag ab
    if key_escape_pressed && drag_active {
        events.push(AppIntent::ControlPointReleased);
    }

    events
}
