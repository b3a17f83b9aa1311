/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kurve, View, Optionen).
mod app_state;
mod editor;
mod view;

pub use app_state::AppState;
pub use editor::{
    CurveState, DragState, DEFAULT_CONTROL1, DEFAULT_CONTROL2, DEFAULT_END, DEFAULT_START,
};
pub use view::ViewState;
