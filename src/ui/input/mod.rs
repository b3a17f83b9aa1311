//! Viewport-Input-Handling: Maus-Events, Handle-Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `drag_primary` — Drag-Start/-Ende (Handle-Drag oder Kamera-Pan)
//! - `pointer_delta` — Pan/Drag-Deltas während aktiver Drags
//! - `zoom` — Scroll-Zoom auf Mausposition

mod drag_primary;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::AppIntent;
use crate::core::{Camera2D, ControlPointRole};
use crate::shared::EditorOptions;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    /// Drag eines Kontrollpunkt-Handles
    HandleDrag,
    CameraPan,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    pub options: &'a EditorOptions,
    /// Weltpositionen der vier Kontrollpunkt-Handles
    pub drag_targets: &'a [(ControlPointRole, glam::Vec2); 4],
}

/// Verwaltet den Input-Zustand für das Viewport (Drag, Scroll)
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_mode: PrimaryDragMode::None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Drag-Interaktionen im Viewport.
    ///
    /// `drag_targets` enthält die Weltpositionen der vier Kontrollpunkt-Handles
    /// für den Hit-Test beim Drag-Start.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &EditorOptions,
        drag_targets: &[(ControlPointRole, glam::Vec2); 4],
        drag_active: bool,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            options,
            drag_targets,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(ui, drag_active));

        self.handle_drag_start(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
