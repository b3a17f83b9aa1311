//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kamera auf den Standardzustand zurück (zentriert auf die Kurve).
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt im Weltkoordinatensystem.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    use_cases::camera::zoom_towards(state, factor, focus_world);
}
