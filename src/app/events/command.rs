use super::super::state::EditorTool;
use crate::core::SegmentKind;
use crate::shared::EditorOptions;
use glam::DVec2;

/// Welcher Winkel beim Drehen eines Knotens gesetzt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateMode {
    /// Bahnwinkel (Tangente bzw. laut Art-Tabelle)
    Path,
    /// Heading-Winkel
    Heading,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Segmentart für neue Segmente setzen
    SetCurrentKind { kind: SegmentKind },
    /// Art der selektierten Segmente ändern
    SetKindOfSelected { kind: SegmentKind },

    /// Neues Segment am Kettenende beginnen
    BeginSegment { pos: DVec2 },
    /// Endpunkt des laufenden Segments verschieben
    DragTailEnd { pos: DVec2 },
    /// Laufendes Segment abschließen (degeneriert → verwerfen)
    CommitTail { pos: DVec2 },
    /// Letztes Segment entfernen, wenn `pos` nahe dessen Ende liegt
    RemoveTrailingNear { pos: DVec2, max_distance: f64 },

    /// Knoten für Move/Rotate greifen
    PickNode { pos: DVec2, max_distance: f64 },
    /// Gegriffenen Knoten verschieben
    MovePickedNode { pos: DVec2 },
    /// Gegriffenen Knoten zur Zielposition hin ausrichten
    RotatePickedNode { target: DVec2, mode: RotateMode },
    /// Gegriffenen Knoten loslassen
    ReleasePickedNode,

    /// Segment unter dem Zeiger selektieren (oder Selektion aufheben)
    SelectSegmentAt { pos: DVec2, max_distance: f64 },
    /// Selektion aufheben
    ClearSelection,
    /// Bahn komplett leeren
    ClearPath,

    /// Fokus-Zustand der Code-Ansicht setzen
    SetCodeFocus { focused: bool },
    /// Angezeigten Code-Text ersetzen
    SetCodeText { text: String },

    /// Undo
    Undo,
    /// Redo
    Redo,

    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}
