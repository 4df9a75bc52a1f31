use super::super::state::EditorTool;
use crate::core::SegmentKind;
use crate::shared::EditorOptions;
use glam::DVec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Alle Positionen sind Display-Koordinaten der Zeichenfläche.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Werkzeug in der Toolbar gewählt
    ToolSelected { tool: EditorTool },
    /// Segmentart in der Toolbar gewählt
    SegmentKindSelected { kind: SegmentKind },

    /// Primäre Maustaste gedrückt (`snap` = 90°-Einrasten gehalten)
    PointerPressed { pos: DVec2, snap: bool },
    /// Maus mit gedrückter Primärtaste bewegt
    PointerDragged { pos: DVec2, snap: bool },
    /// Primäre Maustaste losgelassen
    PointerReleased { pos: DVec2, snap: bool },
    /// Sekundärklick (entfernt das letzte Segment, wenn nahe dessen Ende)
    SecondaryClicked { pos: DVec2 },

    /// Code-Ansicht hat den Fokus erhalten oder verloren
    CodeFocusChanged { focused: bool },
    /// Nutzer hat den Code-Text bearbeitet
    CodeTextEdited { text: String },

    /// Letzte Änderung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Änderung wiederholen
    RedoRequested,
    /// Gesamte Bahn verwerfen
    ClearPathRequested,

    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
}
