//! Handler für Segment-Selektion und Art-Wechsel.

use crate::app::AppState;
use crate::core::SegmentKind;
use glam::DVec2;

/// Selektiert das erste Segment unter dem Zeiger; ohne Treffer wird die Selektion aufgehoben.
pub fn select_segment_at(state: &mut AppState, pos: DVec2, max_distance: f64) {
    let hit = state
        .path
        .find_segment_near(pos, max_distance, state.options.line_detail);
    state.path.select_segment(hit);
    match hit {
        Some(index) => log::info!("Segment {} selektiert", index),
        None => log::debug!("Kein Segment unter dem Zeiger"),
    }
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    state.path.clear_selection();
}

/// Ändert die Art der selektierten Segmente und repariert die Winkel.
pub fn set_kind_of_selected(state: &mut AppState, kind: SegmentKind) {
    if state.path.set_kind_of_selected(kind) {
        log::info!("Segmentart der Selektion geändert: {}", kind);
    } else {
        log::debug!("Art-Wechsel: kein Segment selektiert");
    }
}
