//! Applikations-Schicht: State, Events, Controller und Use-Cases.
//!
//! Die UI erzeugt `AppIntent`s, der `AppController` übersetzt sie in
//! `AppCommand`s und delegiert an Handler bzw. Use-Cases, die den
//! `AppState` mutieren. Die Render-Szene wird pro Frame als reine
//! Funktion des States gebaut.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod intent_mapping;
pub mod render_scene;
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, CurveState, DragState, ViewState};
