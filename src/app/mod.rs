//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Bahn, Werkzeug, Code-Ansicht).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, RotateMode};
pub use history::EditHistory;
pub use render_scene::build as build_render_scene;
pub use state::{AppState, CodeViewState, EditorTool, EditorToolState};
