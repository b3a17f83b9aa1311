use crate::core::Camera2D;

/// View-bezogener Anwendungszustand
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
