//! Drag-Start/-Ende: Handle-Drag oder Kamera-Pan.

use super::{screen_pos_to_world, InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Erkennt Drag-Beginn und bestimmt den Drag-Modus (Handle-Drag oder Pan).
    pub(crate) fn handle_drag_start(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle),
        // interact_pointer_pos() hingegen die Position *nach* Drag-Erkennung
        // (offset um ~6px), was zu asymmetrischen Hitboxen führen kann.
        let press_pos = ctx.ui.input(|i| i.pointer.press_origin());

        let pick_radius = ctx
            .camera
            .pick_radius_world(ctx.viewport_size[1], ctx.options.pick_radius_px);

        let hit = press_pos.and_then(|pointer_pos| {
            let world_pos =
                screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);

            // Nächstes Handle innerhalb des Pick-Radius; bei Überlappung
            // gewinnt das näheste.
            ctx.drag_targets
                .iter()
                .map(|&(role, pos)| (role, pos.distance(world_pos)))
                .filter(|&(_, dist)| dist <= pick_radius)
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(role, _)| (role, world_pos))
        });

        if let Some((role, world_pos)) = hit {
            events.push(AppIntent::ControlPointGrabbed { role, world_pos });
            self.primary_drag_mode = PrimaryDragMode::HandleDrag;
        } else {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
        }
    }

    /// Beendet einen Drag und emittiert das Release-Intent bei Handle-Drags.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if self.primary_drag_mode == PrimaryDragMode::HandleDrag {
            events.push(AppIntent::ControlPointReleased);
        }

        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
