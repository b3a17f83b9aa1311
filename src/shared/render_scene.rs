//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Alle Koordinaten in den Draw-Commands sind Weltkoordinaten; der
//! Painter-Adapter wendet die Kamera-Transformation an.

use crate::core::Camera2D;
use glam::Vec2;

/// Form eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    /// Gefülltes Quadrat (Sample-Punkte)
    Square,
    /// Raute als Outline (Kontrollpunkt-Handles)
    Diamond,
}

/// Ein einzelner Zeichenbefehl in Weltkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Kubische Bézier-Kurve über ihre vier Kontrollpunkte
    CubicCurve {
        /// P0, P1, P2, P3
        points: [Vec2; 4],
        /// Linienstärke in Screen-Pixeln
        width_px: f32,
        /// RGBA-Farbe
        color: [f32; 4],
    },
    /// Liniensegment (Normalen-Visualisierung)
    Segment {
        from: Vec2,
        to: Vec2,
        /// Linienstärke in Screen-Pixeln
        width_px: f32,
        /// RGBA-Farbe
        color: [f32; 4],
    },
    /// Punkt-Marker (Sample-Punkte, Handles)
    Marker {
        center: Vec2,
        /// Kantenlänge in Welteinheiten
        size_world: f32,
        /// RGBA-Farbe
        color: [f32; 4],
        shape: MarkerShape,
    },
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame (explizit, nie ambient)
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Zeichenbefehle in Ausführungsreihenfolge
    pub commands: Vec<DrawCommand>,
}
