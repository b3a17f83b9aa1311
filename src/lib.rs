//! Curve Normals Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CurveState, DragState, ViewState};
pub use core::{
    project, spaced_points, Camera2D, ControlPointRole, CubicBezier, Projection,
};
pub use shared::{DrawCommand, EditorOptions, MarkerShape, RenderScene};
