//! Handler für die Code-Ansicht und den Sync-Tick zwischen Bahn und Text.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Setzt den Fokus-Zustand der Code-Ansicht.
pub fn set_focus(state: &mut AppState, focused: bool) {
    state.code.focused = focused;
    log::debug!("Code-Ansicht fokussiert: {}", focused);
}

/// Ersetzt den angezeigten Text (Nutzer-Eingabe).
pub fn set_text(state: &mut AppState, text: String) {
    state.code.text = text;
}

/// Ein Sync-Durchlauf: entweder Bahn → Text (unfokussiert) oder Text → Bahn
/// (fokussiert), nie beides.
///
/// Gibt `true` zurück, wenn sich Bahn oder Text geändert haben.
pub fn sync(state: &mut AppState) -> bool {
    if state.code.focused {
        let text = state.code.text.clone();
        let before = state.get_text();
        return state.set_text(&text) && state.get_text() != before;
    }

    let serialized = state.get_text();
    if state.code.text == serialized {
        return false;
    }
    let shown = std::mem::replace(&mut state.code.text, serialized);
    state.history.record_if_changed(&shown);
    true
}

/// Übernimmt neue Optionen und leitet die Transformation neu ab.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.transform = options.transform();
    state.history.set_max_depth(options.history_max_depth);
    state.options = options;
    log::info!("Optionen übernommen");
}
