//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    let current = state.get_text();
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        apply_entry(state, &prev);
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    let current = state.get_text();
    if let Some(next) = state.history.pop_redo_with_current(current) {
        apply_entry(state, &next);
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}

/// Übernimmt einen History-Eintrag und gleicht den angezeigten Text an,
/// damit der nächste Sync-Tick keinen neuen Eintrag erzeugt.
fn apply_entry(state: &mut AppState, text: &str) {
    if !state.set_text(text) {
        log::warn!("History-Eintrag nicht lesbar, Bahn bleibt unverändert");
    }
    state.code.text = state.get_text();
}
