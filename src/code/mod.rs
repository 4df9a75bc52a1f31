//! Code-Import/Export: Übersetzung zwischen PathModel und Bahn-Code-Text.
//!
//! Das Format ist eine feste Methodenkette (`actionBuilder(...)` gefolgt von
//! einer `.kindName(...)`-Zeile pro Segment) mit Werten im Feld-Raum.

pub mod parser;
pub mod scanner;
pub mod writer;

pub use parser::parse_path_code;
pub use scanner::{FieldScanner, ScanError};
pub use writer::{format_angle, format_number, write_path_code};
