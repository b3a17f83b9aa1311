//! Mausrad-Zoom im Viewport.

use super::{screen_pos_to_world, InputState, ViewportContext};
use crate::app::AppIntent;

/// Übersetzt den vertikalen Scroll-Anteil in einen Zoom-Faktor.
///
/// `None` wenn nicht gescrollt wurde; sonst `step` (heranzoomen) bzw.
/// `1/step` (wegzoomen), damit Hin- und Rückscroll sich exakt aufheben.
pub(crate) fn scroll_zoom_factor(scroll_y: f32, step: f32) -> Option<f32> {
    if scroll_y == 0.0 {
        return None;
    }
    Some(if scroll_y > 0.0 { step } else { step.recip() })
}

impl InputState {
    /// Zoomt per Mausrad auf den Weltpunkt unter dem Cursor.
    ///
    /// Ohne Hover-Position (Cursor außerhalb des Viewports) bleibt der
    /// Fokuspunkt leer und die Kamera zoomt auf ihr Zentrum.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let scroll_y = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        let Some(factor) = scroll_zoom_factor(scroll_y, ctx.options.camera_scroll_zoom_step)
        else {
            return;
        };

        let focus_world = ctx
            .response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, ctx.response, ctx.viewport_size, ctx.camera));

        events.push(AppIntent::CameraZoom {
            factor,
            focus_world,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::scroll_zoom_factor;

    #[test]
    fn no_scroll_produces_no_factor() {
        assert_eq!(scroll_zoom_factor(0.0, 1.1), None);
    }

    #[test]
    fn scroll_direction_selects_reciprocal_steps() {
        let zoom_in = scroll_zoom_factor(3.0, 1.1).unwrap();
        let zoom_out = scroll_zoom_factor(-3.0, 1.1).unwrap();
        assert!((zoom_in - 1.1).abs() < 1e-6);
        // Ein Klick vor und ein Klick zurück heben sich auf
        assert!((zoom_in * zoom_out - 1.0).abs() < 1e-6);
    }
}
