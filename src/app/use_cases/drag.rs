//! Use-Case-Funktionen für den Handle-Drag-Lifecycle.
//!
//! `idle → dragging` beim Greifen, `dragging → idle` beim Loslassen.
//! Während eines Drags überschreibt jede Pointer-Position den gegriffenen
//! Kontrollpunkt (plus eingefrorenem Grab-Offset), danach wird neu gesampelt.

use crate::app::state::DragState;
use crate::app::AppState;
use crate::core::ControlPointRole;
use glam::Vec2;

/// Startet einen Drag auf dem angegebenen Kontrollpunkt.
///
/// `grab_offset` wurde beim Greifen eingefroren (Handle-Position minus
/// Pointer-Position), damit der Punkt nicht unter den Cursor springt.
pub fn begin(state: &mut AppState, target: ControlPointRole, grab_offset: Vec2) {
    state.curve.drag = DragState::Dragging {
        target,
        grab_offset,
    };
    log::debug!("Drag gestartet: {:?}", target);
}

/// Aktualisiert die Position des gegriffenen Punkts während eines Drags.
///
/// No-op im `Idle`-Zustand (verspätete Move-Events nach Release).
pub fn update(state: &mut AppState, world_pos: Vec2) {
    let DragState::Dragging {
        target,
        grab_offset,
    } = state.curve.drag
    else {
        return;
    };

    state.curve.curve.set_point(target, world_pos + grab_offset);
    state.curve.resample(&state.options);
}

/// Beendet den Drag.
pub fn end(state: &mut AppState) {
    if state.curve.is_dragging() {
        log::debug!("Drag beendet");
    }
    state.curve.drag = DragState::Idle;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{DEFAULT_CONTROL2, DEFAULT_END, DEFAULT_START};

    #[test]
    fn drag_moves_only_target_point() {
        let mut state = AppState::new();
        let samples_before = state.curve.samples.clone();

        // Greifen bei (100,300) exakt auf dem Handle → Offset Null
        begin(&mut state, ControlPointRole::Control1, Vec2::ZERO);
        update(&mut state, Vec2::new(150.0, 250.0));
        end(&mut state);

        assert_eq!(state.curve.curve.control1, Vec2::new(150.0, 250.0));
        assert_eq!(state.curve.curve.start, DEFAULT_START);
        assert_eq!(state.curve.curve.control2, DEFAULT_CONTROL2);
        assert_eq!(state.curve.curve.end, DEFAULT_END);

        // Neue Kurvenform → Samples müssen sich unterscheiden
        assert_ne!(state.curve.samples, samples_before);
        assert_eq!(state.curve.drag, DragState::Idle);
    }

    #[test]
    fn grab_offset_is_applied() {
        let mut state = AppState::new();

        // Gegriffen 3 Einheiten neben dem Handle
        begin(&mut state, ControlPointRole::End, Vec2::new(3.0, -4.0));
        update(&mut state, Vec2::new(600.0, 600.0));

        assert_eq!(state.curve.curve.end, Vec2::new(603.0, 596.0));
    }

    #[test]
    fn update_without_drag_is_noop() {
        let mut state = AppState::new();
        let curve_before = state.curve.curve;

        update(&mut state, Vec2::new(999.0, 999.0));

        assert_eq!(state.curve.curve, curve_before);
    }

    #[test]
    fn resample_happens_on_every_update() {
        let mut state = AppState::new();
        begin(&mut state, ControlPointRole::Start, Vec2::ZERO);

        update(&mut state, Vec2::new(0.0, 0.0));
        let first = state.curve.samples.clone();
        update(&mut state, Vec2::new(25.0, 25.0));

        assert_ne!(state.curve.samples, first);
        assert!((state.curve.samples[0] - Vec2::new(25.0, 25.0)).length() < 1e-3);
    }
}
