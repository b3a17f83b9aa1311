use crate::core::ControlPointRole;
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Kamera auf die Kurve zentrieren
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Kontrollpunkt-Handle wurde gegriffen (Hit-Test im UI)
    ControlPointGrabbed {
        role: ControlPointRole,
        world_pos: glam::Vec2,
    },
    /// Pointer-Position während eines aktiven Handle-Drags
    ControlPointDragged { world_pos: glam::Vec2 },
    /// Handle losgelassen (Drag-Ende)
    ControlPointReleased,
    /// Kurve auf die Standard-Kontrollpunkte zurücksetzen
    ResetCurveRequested,

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
