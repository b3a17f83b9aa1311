use crate::core::ControlPointRole;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Kamera auf die Kurven-Bounding-Box zentrieren
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Handle-Drag starten (Offset beim Greifen eingefroren)
    BeginControlPointDrag {
        target: ControlPointRole,
        grab_offset: glam::Vec2,
    },
    /// Gegriffenen Kontrollpunkt auf Pointer-Position + Offset setzen
    UpdateControlPointDrag { world_pos: glam::Vec2 },
    /// Handle-Drag beenden
    EndControlPointDrag,
    /// Kurve auf Standard-Kontrollpunkte zurücksetzen
    ResetCurve,

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
