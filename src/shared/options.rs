//! Zentrale Konfiguration für den Curve-Normals-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 100.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Sampling & Projektion ───────────────────────────────────────────

/// Anzahl der Arc-Length-Segmente (n → n+1 Sample-Punkte).
pub const SAMPLE_COUNT: usize = 10;
/// Stützstellen des groben Scans bei der Nächster-Punkt-Suche.
pub const PROJECTION_SCAN_SAMPLES: usize = 100;

// ── Visualisierung ─────────────────────────────────────────────────

/// Darstellungslänge der Normalen-Segmente in Welteinheiten.
pub const NORMAL_LENGTH_WORLD: f32 = 40.0;
/// Kantenlänge der quadratischen Sample-Marker in Welteinheiten.
pub const SAMPLE_MARKER_SIZE_WORLD: f32 = 10.0;
/// Kantenlänge der Kontrollpunkt-Handles in Welteinheiten.
pub const HANDLE_SIZE_WORLD: f32 = 10.0;
/// Linienstärke der Kurve in Screen-Pixeln.
pub const CURVE_WIDTH_PX: f32 = 2.0;
/// Linienstärke der Normalen-Segmente in Screen-Pixeln.
pub const NORMAL_WIDTH_PX: f32 = 1.0;
/// Farbe der Kurve und der Normalen (RGBA: 0x00ffae).
pub const CURVE_COLOR: [f32; 4] = [0.0, 1.0, 0.682, 1.0];
/// Füllfarbe der Sample-Marker (RGBA: 0xfffbb7).
pub const SAMPLE_MARKER_COLOR: [f32; 4] = [1.0, 0.984, 0.718, 1.0];
/// Handle-Farbe für den Startpunkt (RGBA: 0x2fff00).
pub const HANDLE_COLOR_START: [f32; 4] = [0.184, 1.0, 0.0, 1.0];
/// Handle-Farbe für Steuerpunkt 1 (RGBA: 0xa7ff95).
pub const HANDLE_COLOR_CONTROL1: [f32; 4] = [0.655, 1.0, 0.584, 1.0];
/// Handle-Farbe für Steuerpunkt 2 und Endpunkt (RGBA: 0xff00e4).
pub const HANDLE_COLOR_CONTROL2: [f32; 4] = [1.0, 0.0, 0.894, 1.0];

// ── Interaktion ────────────────────────────────────────────────────

/// Pick-Radius für Handle-Hit-Tests in Screen-Pixeln.
pub const PICK_RADIUS_PX: f32 = 12.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_normals_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Sampling ────────────────────────────────────────────────
    /// Anzahl Arc-Length-Segmente (n+1 Sample-Punkte)
    pub sample_count: usize,
    /// Stützstellen des groben Projektions-Scans
    pub projection_scan_samples: usize,

    // ── Visualisierung ──────────────────────────────────────────
    /// Länge der Normalen-Segmente in Welteinheiten
    pub normal_length_world: f32,
    /// Kantenlänge der Sample-Marker in Welteinheiten
    pub sample_marker_size_world: f32,
    /// Kantenlänge der Kontrollpunkt-Handles in Welteinheiten
    pub handle_size_world: f32,
    /// Linienstärke der Kurve in Screen-Pixeln
    pub curve_width_px: f32,
    /// Linienstärke der Normalen in Screen-Pixeln
    pub normal_width_px: f32,
    /// Farbe der Kurve und Normalen
    pub curve_color: [f32; 4],
    /// Füllfarbe der Sample-Marker
    pub sample_marker_color: [f32; 4],
    /// Handle-Farbe Startpunkt
    pub handle_color_start: [f32; 4],
    /// Handle-Farbe Steuerpunkt 1
    pub handle_color_control1: [f32; 4],
    /// Handle-Farbe Steuerpunkt 2 / Endpunkt
    pub handle_color_control2: [f32; 4],

    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Handle-Hit-Tests in Screen-Pixeln
    pub pick_radius_px: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            sample_count: SAMPLE_COUNT,
            projection_scan_samples: PROJECTION_SCAN_SAMPLES,

            normal_length_world: NORMAL_LENGTH_WORLD,
            sample_marker_size_world: SAMPLE_MARKER_SIZE_WORLD,
            handle_size_world: HANDLE_SIZE_WORLD,
            curve_width_px: CURVE_WIDTH_PX,
            normal_width_px: NORMAL_WIDTH_PX,
            curve_color: CURVE_COLOR,
            sample_marker_color: SAMPLE_MARKER_COLOR,
            handle_color_start: HANDLE_COLOR_START,
            handle_color_control1: HANDLE_COLOR_CONTROL1,
            handle_color_control2: HANDLE_COLOR_CONTROL2,

            pick_radius_px: PICK_RADIUS_PX,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_normals_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_normals_editor.toml")
    }

    /// Sampling-Parameter auf sinnvolle Grenzen geklemmt.
    ///
    /// Unterhalb von 2 Scan-Stützstellen bzw. 1 Segment liefert der Kern
    /// keine brauchbaren Ergebnisse mehr.
    pub fn clamped(mut self) -> Self {
        self.sample_count = self.sample_count.clamp(1, 256);
        self.projection_scan_samples = self.projection_scan_samples.clamp(2, 10_000);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_consts() {
        let opts = EditorOptions::default();
        assert_eq!(opts.sample_count, 10);
        assert_eq!(opts.projection_scan_samples, 100);
        assert_eq!(opts.normal_length_world, 40.0);
    }

    #[test]
    fn toml_roundtrip_preserves_options() {
        let mut opts = EditorOptions::default();
        opts.sample_count = 24;
        opts.normal_length_world = 15.5;
        let text = toml::to_string_pretty(&opts).unwrap();
        let back: EditorOptions = toml::from_str(&text).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn clamped_limits_degenerate_values() {
        let mut opts = EditorOptions::default();
        opts.sample_count = 0;
        opts.projection_scan_samples = 1;
        let clamped = opts.clamped();
        assert_eq!(clamped.sample_count, 1);
        assert_eq!(clamped.projection_scan_samples, 2);
    }
}
