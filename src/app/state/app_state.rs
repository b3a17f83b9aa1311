use crate::shared::EditorOptions;

use super::{CurveState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kurve + abgeleitete Samples/Projektionen + Drag-Zustand
    pub curve: CurveState,
    /// View-State (Kamera, Viewport)
    pub view: ViewState,
    /// Laufzeit-Optionen (Sampling, Farben, Größen)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Kurve und -Optionen.
    pub fn new() -> Self {
        let options = EditorOptions::default();
        Self {
            curve: CurveState::new(&options),
            view: ViewState::new(),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Erstellt einen App-State mit vorgeladenen Optionen (TOML).
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.clamped();
        Self {
            curve: CurveState::new(&options),
            view: ViewState::new(),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Anzahl der Sample-Punkte (für UI-Anzeige)
    pub fn sample_count(&self) -> usize {
        self.curve.samples.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
