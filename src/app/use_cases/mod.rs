//! Use-Cases: fachliche Mutationsschritte auf dem AppState.

pub mod camera;
pub mod curve;
pub mod drag;
pub mod viewport;
