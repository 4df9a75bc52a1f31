//! Handler für Zeichnen, Knoten-Bearbeitung und Editor-Werkzeug.

use crate::app::events::RotateMode;
use crate::app::state::EditorTool;
use crate::app::AppState;
use crate::core::SegmentKind;
use glam::DVec2;

/// Aktiviert ein Editor-Werkzeug und setzt tool-spezifische Zwischenzustände zurück.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    state.editor.active_tool = tool;
    state.editor.picked = None;
    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Setzt die Segmentart für neu gezeichnete Segmente.
pub fn set_current_kind(state: &mut AppState, kind: SegmentKind) {
    state.editor.current_kind = kind;
    log::info!("Segmentart: {}", kind);
}

/// Beginnt ein neues Segment am Kettenende.
pub fn begin_segment(state: &mut AppState, pos: DVec2) {
    let kind = state.editor.current_kind;
    state.path.append_from(pos, kind);
}

/// Verschiebt den Endpunkt des laufenden Segments.
pub fn drag_tail_end(state: &mut AppState, pos: DVec2) {
    state.path.drag_tail_end(pos);
}

/// Setzt den finalen Endpunkt und verwirft das Segment, falls es degeneriert ist.
pub fn commit_tail(state: &mut AppState, pos: DVec2) {
    state.path.drag_tail_end(pos);
    if !state.path.commit_or_discard_tail() {
        log::debug!("Segment abgeschlossen, Kette: {}", state.path.segment_count());
    }
}

/// Entfernt das letzte Segment, wenn `pos` nahe an dessen Ende liegt.
pub fn remove_trailing_near(state: &mut AppState, pos: DVec2, max_distance: f64) {
    if state.path.remove_trailing_if_near(pos, max_distance) {
        state.editor.picked = None;
        log::info!(
            "Letztes Segment entfernt, verbleibend: {}",
            state.path.segment_count()
        );
    }
}

/// Greift den Knoten unter dem Zeiger für eine Move-/Rotate-Geste.
pub fn pick_node(state: &mut AppState, pos: DVec2, max_distance: f64) {
    state.editor.picked = state.path.find_node_near(pos, max_distance);
    match state.editor.picked {
        Some(pick) => log::debug!(
            "Knoten {} gegriffen (Segment {})",
            pick.node_id,
            pick.segment_index
        ),
        None => log::debug!("Kein Knoten unter dem Zeiger"),
    }
}

/// Verschiebt den gegriffenen Knoten.
pub fn move_picked(state: &mut AppState, pos: DVec2) {
    if let Some(pick) = state.editor.picked {
        state.path.move_node(pick.node_id, pos);
    }
}

/// Richtet den gegriffenen Knoten auf `target` aus (Winkel über atan2 im Display-Raum).
pub fn rotate_picked(state: &mut AppState, target: DVec2, mode: RotateMode) {
    let Some(pick) = state.editor.picked else {
        return;
    };
    let Some(node) = state.path.node(pick.node_id) else {
        return;
    };
    let delta = target - node.position();
    if delta.length_squared() < f64::EPSILON {
        return;
    }
    let angle = delta.y.atan2(delta.x);
    match mode {
        RotateMode::Path => state
            .path
            .set_path_angle(pick.segment_index, pick.node_id, angle),
        RotateMode::Heading => {
            state
                .path
                .set_heading_angle(pick.segment_index, pick.node_id, angle)
        }
    };
}

/// Beendet eine Move-/Rotate-Geste.
pub fn release_picked(state: &mut AppState) {
    state.editor.picked = None;
}

/// Verwirft die gesamte Bahn.
pub fn clear_path(state: &mut AppState) {
    state.path.clear();
    state.editor.picked = None;
    log::info!("Bahn geleert");
}
