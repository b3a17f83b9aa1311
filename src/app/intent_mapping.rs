//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],

        AppIntent::ControlPointGrabbed { role, world_pos } => {
            // Grab-Offset beim Greifen einfrieren: Handle-Position minus
            // Pointer-Position, damit der Punkt nicht unter den Cursor springt
            let grab_offset = state.curve.curve.point(role) - world_pos;
            vec![AppCommand::BeginControlPointDrag {
                target: role,
                grab_offset,
            }]
        }
        AppIntent::ControlPointDragged { world_pos } => {
            vec![AppCommand::UpdateControlPointDrag { world_pos }]
        }
        AppIntent::ControlPointReleased => vec![AppCommand::EndControlPointDrag],
        AppIntent::ResetCurveRequested => vec![AppCommand::ResetCurve],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ControlPointRole;
    use glam::Vec2;

    #[test]
    fn grab_intent_freezes_offset() {
        let state = AppState::new();
        // Handle Control1 liegt bei (100,300); Klick 2 Pixel daneben
        let commands = map_intent_to_commands(
            &state,
            AppIntent::ControlPointGrabbed {
                role: ControlPointRole::Control1,
                world_pos: Vec2::new(98.0, 301.0),
            },
        );

        assert_eq!(commands.len(), 1);
        match &commands[0] {
            AppCommand::BeginControlPointDrag {
                target,
                grab_offset,
            } => {
                assert_eq!(*target, ControlPointRole::Control1);
                assert_eq!(*grab_offset, Vec2::new(2.0, -1.0));
            }
            other => panic!("Unerwarteter Command: {other:?}"),
        }
    }

    #[test]
    fn camera_pan_maps_one_to_one() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::CameraPan {
                delta: Vec2::new(1.0, 2.0),
            },
        );
        assert!(matches!(commands[0], AppCommand::PanCamera { .. }));
    }
}
