//! Render-Layer: führt `RenderScene`-Draw-Commands gegen egui aus.

mod painter;

pub use painter::paint_scene;
