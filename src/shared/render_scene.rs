//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie konsumiert.

use crate::core::SegmentKind;
use glam::DVec2;

/// Ein Segment, wie es gezeichnet werden soll (Display-Raum).
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSegment {
    /// Index in der Kette
    pub index: usize,
    /// Bewegungsart (für Farbe/Strichart)
    pub kind: SegmentKind,
    /// Startposition
    pub start: DVec2,
    /// Endposition
    pub end: DVec2,
    /// Hervorgehoben (Select-Tool)
    pub highlighted: bool,
    /// Abgetastete Vorschau-Linie
    pub polyline: Vec<DVec2>,
}

/// Ein Knoten mit seinen Richtungs-Pfeilen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneNode {
    /// Knoten-ID
    pub id: u64,
    /// Position
    pub position: DVec2,
    /// Heading (Display-Raum)
    pub heading: f64,
    /// Tangente (Display-Raum)
    pub tangent: f64,
    /// Vom Move-/Rotate-Tool gegriffen
    pub picked: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathScene {
    /// Segmente in Ketten-Reihenfolge
    pub segments: Vec<SceneSegment>,
    /// Alle Knoten der Kette (jeder geteilte Knoten genau einmal)
    pub nodes: Vec<SceneNode>,
    /// Zeichenflächen-Größe in Pixeln
    pub canvas_size: f64,
}

impl PathScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_path(&self) -> bool {
        !self.segments.is_empty()
    }

    /// Index des hervorgehobenen Segments
    pub fn highlighted_index(&self) -> Option<usize> {
        self.segments.iter().find(|s| s.highlighted).map(|s| s.index)
    }
}
