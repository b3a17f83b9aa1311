//! Handler für Kurven-Bearbeitung (Handle-Drags, Reset, Resampling).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ControlPointRole;

/// Startet einen Handle-Drag.
pub fn begin_drag(state: &mut AppState, target: ControlPointRole, grab_offset: glam::Vec2) {
    use_cases::drag::begin(state, target, grab_offset);
}

/// Aktualisiert den gegriffenen Kontrollpunkt.
pub fn update_drag(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::drag::update(state, world_pos);
}

/// Beendet den Handle-Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::drag::end(state);
}

/// Setzt die Kurve auf die Standard-Kontrollpunkte zurück.
pub fn reset_curve(state: &mut AppState) {
    use_cases::curve::reset(state);
}
