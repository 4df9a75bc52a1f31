//! Path Drawer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod code;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState};
pub use code::{parse_path_code, write_path_code, ScanError};
pub use core::{
    FieldPose, FieldTransform, MotionArgs, MotionCommand, PathModel, PathNode, PathSegment,
    SegmentKind,
};
pub use shared::{EditorOptions, PathScene};
