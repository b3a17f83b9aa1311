//! Handler für Dialoge und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Beendet die Anwendung kontrolliert.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen, berechnet Ableitungen neu und persistiert.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options.clamped();
    // Sampling-Parameter können sich geändert haben
    state.curve.resample(&state.options);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    state.curve.resample(&state.options);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
