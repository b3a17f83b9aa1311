//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(
        &self,
        state: &AppState,
        viewport_size: [f32; 2],
    ) -> crate::shared::RenderScene {
        let mut scene = super::render_scene::build(state);
        scene.viewport_size = viewport_size;
        scene
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Kurven-Bearbeitung ===
            AppCommand::BeginControlPointDrag {
                target,
                grab_offset,
            } => handlers::editing::begin_drag(state, target, grab_offset),
            AppCommand::UpdateControlPointDrag { world_pos } => {
                handlers::editing::update_drag(state, world_pos)
            }
            AppCommand::EndControlPointDrag => handlers::editing::end_drag(state),
            AppCommand::ResetCurve => handlers::editing::reset_curve(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}
