//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::Camera2D;

/// Setzt die Kamera zurück: zentriert auf die Kurven-Bounding-Box.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Camera2D::new();
    center_on_curve(state);
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    if let Some(focus) = focus_world {
        let old_zoom = state.view.camera.zoom;
        state.view.camera.zoom_by_clamped(
            factor,
            state.options.camera_zoom_min,
            state.options.camera_zoom_max,
        );
        let new_zoom = state.view.camera.zoom;
        // Kamera-Position korrigieren, damit focus_world an gleicher Stelle bleibt
        let scale = old_zoom / new_zoom;
        state.view.camera.position = focus + (state.view.camera.position - focus) * scale;
    } else {
        state.view.camera.zoom_by_clamped(
            factor,
            state.options.camera_zoom_min,
            state.options.camera_zoom_max,
        );
    }
}

/// Zentriert die Kamera auf die Bounding Box der Kurven-Kontrollpunkte.
///
/// Berechnet Mittelpunkt und wählt einen passenden Zoom-Level.
pub fn center_on_curve(state: &mut AppState) {
    let (min, max) = state.curve.curve.control_bounds();
    let center = (min + max) * 0.5;
    state.view.camera.look_at(center);

    let extent = (max - min).max_element();
    if extent > f32::EPSILON {
        // Etwas Rand um die Kurve lassen (Faktor 0.8)
        state.view.camera.zoom = (Camera2D::BASE_WORLD_EXTENT / (extent / 2.0) * 0.8)
            .clamp(state.options.camera_zoom_min, state.options.camera_zoom_max);
    }

    log::info!(
        "Kamera zentriert: ({:.1}, {:.1}) bis ({:.1}, {:.1}), Zoom: {:.2}",
        min.x,
        min.y,
        max.x,
        max.y,
        state.view.camera.zoom
    );
}
