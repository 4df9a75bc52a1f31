//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration, reine Geometrie und die Render-Szene, die zwischen
//! `core`, `app` und einem externen Renderer geteilt werden.

pub mod options;
pub mod path_geometry;
mod render_scene;

pub use options::EditorOptions;
pub use options::{CODE_PRECISION, LINE_DETAIL, PICK_RADIUS_PX};
pub use render_scene::{PathScene, SceneNode, SceneSegment};
