//! Use-Case-Funktionen für den Kurven-Zustand.

use crate::app::state::CurveState;
use crate::app::AppState;

/// Setzt die Kurve auf die Standard-Kontrollpunkte zurück (inkl. Resample).
pub fn reset(state: &mut AppState) {
    state.curve = CurveState::new(&state.options);
    log::info!("Kurve auf Standard zurückgesetzt");
}
