//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::PathScene;

/// Orchestriert UI-Events, Handler und den Sync-Tick auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Werkzeug & Art ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::SetCurrentKind { kind } => {
                handlers::editing::set_current_kind(state, kind)
            }
            AppCommand::SetKindOfSelected { kind } => {
                handlers::selection::set_kind_of_selected(state, kind)
            }

            // === Zeichnen ===
            AppCommand::BeginSegment { pos } => handlers::editing::begin_segment(state, pos),
            AppCommand::DragTailEnd { pos } => handlers::editing::drag_tail_end(state, pos),
            AppCommand::CommitTail { pos } => handlers::editing::commit_tail(state, pos),
            AppCommand::RemoveTrailingNear { pos, max_distance } => {
                handlers::editing::remove_trailing_near(state, pos, max_distance)
            }
            AppCommand::ClearPath => handlers::editing::clear_path(state),

            // === Knoten-Bearbeitung ===
            AppCommand::PickNode { pos, max_distance } => {
                handlers::editing::pick_node(state, pos, max_distance)
            }
            AppCommand::MovePickedNode { pos } => handlers::editing::move_picked(state, pos),
            AppCommand::RotatePickedNode { target, mode } => {
                handlers::editing::rotate_picked(state, target, mode)
            }
            AppCommand::ReleasePickedNode => handlers::editing::release_picked(state),

            // === Selektion ===
            AppCommand::SelectSegmentAt { pos, max_distance } => {
                handlers::selection::select_segment_at(state, pos, max_distance)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Code-Ansicht ===
            AppCommand::SetCodeFocus { focused } => handlers::code_sync::set_focus(state, focused),
            AppCommand::SetCodeText { text } => handlers::code_sync::set_text(state, text),
            AppCommand::ApplyOptions { options } => {
                handlers::code_sync::apply_options(state, options)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }

    /// Ein Sync-Durchlauf zwischen Bahn und Code-Text; vom Host in festem Takt aufzurufen.
    ///
    /// Gibt `true` zurück, wenn sich Bahn oder Text geändert haben.
    pub fn tick(&mut self, state: &mut AppState) -> bool {
        super::handlers::code_sync::sync(state)
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> PathScene {
        render_scene::build(state)
    }
}
