//! Painter-Adapter: führt die Draw-Commands einer `RenderScene` gegen
//! den egui-Painter aus.
//!
//! Alle Welt→Screen-Transformationen passieren hier; die Szene selbst
//! bleibt rein in Weltkoordinaten.

use eframe::egui;
use glam::Vec2;

use crate::core::Camera2D;
use crate::shared::{DrawCommand, MarkerShape, RenderScene};

/// Zeichnet die komplette Szene in das Viewport-Rechteck.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let camera = &scene.camera;
    let viewport = Vec2::new(scene.viewport_size[0], scene.viewport_size[1]);
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return;
    }

    for command in &scene.commands {
        match command {
            DrawCommand::CubicCurve {
                points,
                width_px,
                color,
            } => {
                let screen_points = [
                    to_screen(points[0], camera, viewport, rect),
                    to_screen(points[1], camera, viewport, rect),
                    to_screen(points[2], camera, viewport, rect),
                    to_screen(points[3], camera, viewport, rect),
                ];
                painter.add(egui::epaint::CubicBezierShape::from_points_stroke(
                    screen_points,
                    false,
                    egui::Color32::TRANSPARENT,
                    egui::Stroke::new(*width_px, to_color32(*color)),
                ));
            }
            DrawCommand::Segment {
                from,
                to,
                width_px,
                color,
            } => {
                painter.line_segment(
                    [
                        to_screen(*from, camera, viewport, rect),
                        to_screen(*to, camera, viewport, rect),
                    ],
                    egui::Stroke::new(*width_px, to_color32(*color)),
                );
            }
            DrawCommand::Marker {
                center,
                size_world,
                color,
                shape,
            } => {
                let screen_center = to_screen(*center, camera, viewport, rect);
                // Marker-Größe skaliert mit dem Zoom
                let half = 0.5 * size_world / camera.world_per_pixel(viewport.y);
                match shape {
                    MarkerShape::Square => {
                        painter.rect_filled(
                            egui::Rect::from_center_size(
                                screen_center,
                                egui::vec2(2.0 * half, 2.0 * half),
                            ),
                            0.0,
                            to_color32(*color),
                        );
                    }
                    MarkerShape::Diamond => {
                        paint_diamond(painter, screen_center, half, to_color32(*color));
                    }
                }
            }
        }
    }
}

/// Rechnet einen Weltpunkt in absolute Screen-Koordinaten um.
fn to_screen(world: Vec2, camera: &Camera2D, viewport: Vec2, rect: egui::Rect) -> egui::Pos2 {
    let sp = camera.world_to_screen(world, viewport);
    egui::pos2(rect.min.x + sp.x, rect.min.y + sp.y)
}

/// Konvertiert eine RGBA-Farbe in egui-Color32.
fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

/// Zeichnet eine Raute (Kontrollpunkt-Handle).
fn paint_diamond(painter: &egui::Painter, center: egui::Pos2, size: f32, color: egui::Color32) {
    let stroke = egui::Stroke::new(2.0, color);
    let top = egui::pos2(center.x, center.y - size);
    let right = egui::pos2(center.x + size, center.y);
    let bottom = egui::pos2(center.x, center.y + size);
    let left = egui::pos2(center.x - size, center.y);

    painter.line_segment([top, right], stroke);
    painter.line_segment([right, bottom], stroke);
    painter.line_segment([bottom, left], stroke);
    painter.line_segment([left, top], stroke);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_conversion_saturates_channels() {
        let c = to_color32([0.0, 1.0, 0.682, 1.0]);
        assert_eq!(c.r(), 0);
        assert_eq!(c.g(), 255);
        assert_eq!(c.b(), 173);
        assert_eq!(c.a(), 255);
    }
}
