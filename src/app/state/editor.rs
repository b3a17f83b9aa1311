//! Kurven- und Drag-Zustand des Editors.

use crate::core::{project, spaced_points, ControlPointRole, CubicBezier, Projection};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Standard-Kontrollpunkte der Demo-Kurve.
pub const DEFAULT_START: Vec2 = Vec2::new(50.0, 50.0);
/// Steuerpunkt 1 der Demo-Kurve.
pub const DEFAULT_CONTROL1: Vec2 = Vec2::new(100.0, 300.0);
/// Steuerpunkt 2 der Demo-Kurve.
pub const DEFAULT_CONTROL2: Vec2 = Vec2::new(200.0, 100.0);
/// Endpunkt der Demo-Kurve.
pub const DEFAULT_END: Vec2 = Vec2::new(500.0, 500.0);

/// Drag-Zustandsmaschine für die vier Kontrollpunkt-Handles.
///
/// `idle → dragging` beim Greifen eines Handles, `dragging → idle` beim
/// Loslassen. Pointer-Moves im `Idle`-Zustand betreffen nur die Kamera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// Kein Handle gegriffen
    Idle,
    /// Ein Handle wird verschoben
    Dragging {
        /// Gegriffener Kontrollpunkt
        target: ControlPointRole,
        /// Handle-Position minus Pointer-Position beim Greifen —
        /// verhindert, dass der Punkt unter den Cursor springt
        grab_offset: Vec2,
    },
}

/// Kurven-Zustand: Kontrollpunkte plus abgeleitete Samples und Projektionen.
pub struct CurveState {
    /// Die vier Kontrollpunkte (einzig mutierbarer Kern-Zustand)
    pub curve: CubicBezier,
    /// Arc-Length-Samples (n+1 Punkte), bei jeder Änderung neu berechnet
    pub samples: Vec<Vec2>,
    /// Nächster-Punkt-Projektion + Normale je Sample
    pub projections: Vec<Projection>,
    /// Drag-Zustandsmaschine
    pub drag: DragState,
}

impl CurveState {
    /// Erstellt den Standard-Kurvenzustand mit berechneten Ableitungen.
    pub fn new(options: &EditorOptions) -> Self {
        let mut state = Self {
            curve: CubicBezier::new(
                DEFAULT_START,
                DEFAULT_CONTROL1,
                DEFAULT_CONTROL2,
                DEFAULT_END,
            ),
            samples: Vec::new(),
            projections: Vec::new(),
            drag: DragState::Idle,
        };
        state.resample(options);
        state
    }

    /// Berechnet Samples und Projektionen vollständig neu.
    ///
    /// Kein inkrementeller Zustand: beides sind reine Funktionen der vier
    /// aktuellen Kontrollpunkte.
    pub fn resample(&mut self, options: &EditorOptions) {
        self.samples = spaced_points(&self.curve, options.sample_count);
        self.projections = self
            .samples
            .iter()
            .map(|&p| project(&self.curve, p, options.projection_scan_samples))
            .collect();
    }

    /// Gibt zurück, ob gerade ein Handle gegriffen ist.
    pub fn is_dragging(&self) -> bool {
        !matches!(self.drag, DragState::Idle)
    }

    /// Weltpositionen aller greifbaren Handles in Rollen-Reihenfolge.
    pub fn drag_targets(&self) -> [(ControlPointRole, Vec2); 4] {
        ControlPointRole::ALL.map(|role| (role, self.curve.point(role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_derived_data() {
        let options = EditorOptions::default();
        let state = CurveState::new(&options);
        assert_eq!(state.samples.len(), options.sample_count + 1);
        assert_eq!(state.projections.len(), state.samples.len());
        assert_eq!(state.drag, DragState::Idle);
    }

    #[test]
    fn resample_follows_sample_count() {
        let mut options = EditorOptions::default();
        let mut state = CurveState::new(&options);
        options.sample_count = 20;
        state.resample(&options);
        assert_eq!(state.samples.len(), 21);
        assert_eq!(state.projections.len(), 21);
    }

    #[test]
    fn drag_targets_in_role_order() {
        let state = CurveState::new(&EditorOptions::default());
        let targets = state.drag_targets();
        assert_eq!(targets[0], (ControlPointRole::Start, DEFAULT_START));
        assert_eq!(targets[3], (ControlPointRole::End, DEFAULT_END));
    }
}
