//! Application State — zentrale Datenhaltung.

use super::history::EditHistory;
use super::CommandLog;
use crate::code::{parse_path_code, write_path_code};
use crate::core::{FieldTransform, NodePick, PathModel, SegmentKind};
use crate::shared::EditorOptions;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Segmente zeichnen (Drücken → Ziehen → Loslassen)
    #[default]
    Draw,
    /// Knoten verschieben
    Move,
    /// Segment anklicken und hervorheben
    Select,
    /// Bahnwinkel eines Knotens drehen
    RotatePath,
    /// Heading eines Knotens drehen
    RotateHeading,
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Segmentart für neue Segmente (und für Art-Wechsel im Select-Tool)
    pub current_kind: SegmentKind,
    /// Während einer Move-/Rotate-Geste gegriffener Knoten
    pub picked: Option<NodePick>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Draw-Tool aktiv).
    pub fn new(current_kind: SegmentKind) -> Self {
        Self {
            active_tool: EditorTool::Draw,
            current_kind,
            picked: None,
        }
    }
}

/// Zustand der Code-Ansicht
#[derive(Debug, Clone, Default)]
pub struct CodeViewState {
    /// Aktuell angezeigter Text
    pub text: String,
    /// Ob der Nutzer gerade im Text editiert
    pub focused: bool,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die bearbeitete Bahn (Display-Raum)
    pub path: PathModel,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Code-Ansicht
    pub code: CodeViewState,
    /// Undo/Redo-History (Text-Snapshots)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Display ↔ Feld, abgeleitet aus den Optionen
    pub transform: FieldTransform,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            path: PathModel::new(),
            editor: EditorToolState::new(options.default_kind),
            code: CodeViewState::default(),
            history: EditHistory::new_with_capacity(options.history_max_depth),
            transform: options.transform(),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Serialisiert die aktuelle Bahn als Code-Text.
    pub fn get_text(&self) -> String {
        write_path_code(&self.path, &self.transform, self.options.code_precision)
    }

    /// Parst `text` und ersetzt bei Erfolg die Bahn.
    ///
    /// Bei einem Fehler bleibt die Bahn unverändert und `false` wird zurückgegeben.
    pub fn set_text(&mut self, text: &str) -> bool {
        match parse_path_code(text, &self.transform) {
            Ok(model) => {
                self.path.replace_with(model);
                self.editor.picked = None;
                true
            }
            Err(e) => {
                log::debug!("Code-Text abgelehnt: {:#}", e);
                false
            }
        }
    }

    /// Gibt die Anzahl der Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.path.segment_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
