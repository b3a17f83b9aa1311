//! Baut die Render-Szene als reine Funktion des App-States.
//!
//! Keine Seiteneffekte: der Painter-Adapter in `render/` führt die
//! Draw-Commands gegen die jeweilige Grafik-API aus.

use crate::app::AppState;
use crate::core::ControlPointRole;
use crate::shared::{DrawCommand, MarkerShape, RenderScene};

/// Erstellt die Render-Szene für den aktuellen Frame.
///
/// Zeichenreihenfolge: Sample-Marker, Kurve, Normalen-Segmente, zuletzt
/// die Kontrollpunkt-Handles (oberste Ebene, greifbar).
pub fn build(state: &AppState) -> RenderScene {
    let opts = &state.options;
    let curve = &state.curve.curve;
    let mut commands =
        Vec::with_capacity(state.curve.samples.len() + state.curve.projections.len() + 5);

    // Sample-Punkte als gefüllte Quadrate
    for &sample in &state.curve.samples {
        commands.push(DrawCommand::Marker {
            center: sample,
            size_world: opts.sample_marker_size_world,
            color: opts.sample_marker_color,
            shape: MarkerShape::Square,
        });
    }

    // Die Kurve selbst
    commands.push(DrawCommand::CubicCurve {
        points: [curve.start, curve.control1, curve.control2, curve.end],
        width_px: opts.curve_width_px,
        color: opts.curve_color,
    });

    // Normalen: kurzes Segment vom projizierten Punkt entlang der Normale.
    // Degenerierte Normale (Vec2::ZERO) ergibt ein unsichtbares Null-Segment.
    for projection in &state.curve.projections {
        commands.push(DrawCommand::Segment {
            from: projection.point,
            to: projection.point + projection.normal * opts.normal_length_world,
            width_px: opts.normal_width_px,
            color: opts.curve_color,
        });
    }

    // Kontrollpunkt-Handles
    for (role, pos) in state.curve.drag_targets() {
        let color = match role {
            ControlPointRole::Start => opts.handle_color_start,
            ControlPointRole::Control1 => opts.handle_color_control1,
            ControlPointRole::Control2 | ControlPointRole::End => opts.handle_color_control2,
        };
        commands.push(DrawCommand::Marker {
            center: pos,
            size_world: opts.handle_size_world,
            color,
            shape: MarkerShape::Diamond,
        });
    }

    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size: state.view.viewport_size,
        commands,
    }
}
