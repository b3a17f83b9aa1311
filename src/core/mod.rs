//! Core-Geometrie: Bézier-Kurve, Arc-Length-Sampling, Projektion, Kamera.
//!
//! Alles in diesem Modul ist rein und deterministisch — abgeleitete Daten
//! sind Funktionen der vier aktuellen Kontrollpunkte, ohne Cache-Zustand.

pub mod camera;
pub mod curve;
pub mod projection;
pub mod sampling;

pub use camera::Camera2D;
pub use curve::{ControlPointRole, CubicBezier};
pub use projection::{project, Projection};
pub use sampling::{approx_length, spaced_points, ARC_LENGTH_LUT_SAMPLES};
