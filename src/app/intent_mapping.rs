//! Mapping von UI-Intents auf mutierende App-Commands.

use super::events::RotateMode;
use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::path_geometry::round_to_90;
use glam::DVec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let pick_radius = state.options.pick_radius;

    match intent {
        AppIntent::ToolSelected { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::SegmentKindSelected { kind } => {
            let mut commands = vec![AppCommand::SetCurrentKind { kind }];
            if state.editor.active_tool == EditorTool::Select
                && state.path.selected_index().is_some()
            {
                commands.push(AppCommand::SetKindOfSelected { kind });
            }
            commands
        }

        AppIntent::PointerPressed { pos, .. } => match state.editor.active_tool {
            EditorTool::Draw => vec![AppCommand::BeginSegment { pos }],
            EditorTool::Select => vec![AppCommand::SelectSegmentAt {
                pos,
                max_distance: pick_radius,
            }],
            EditorTool::Move | EditorTool::RotatePath | EditorTool::RotateHeading => {
                vec![AppCommand::PickNode {
                    pos,
                    max_distance: pick_radius,
                }]
            }
        },
        AppIntent::PointerDragged { pos, snap } => match state.editor.active_tool {
            EditorTool::Draw => vec![AppCommand::DragTailEnd {
                pos: snap_to_tail_start(state, pos, snap),
            }],
            EditorTool::Move => vec![AppCommand::MovePickedNode { pos }],
            EditorTool::RotatePath => vec![rotate_command(state, pos, snap, RotateMode::Path)],
            EditorTool::RotateHeading => {
                vec![rotate_command(state, pos, snap, RotateMode::Heading)]
            }
            EditorTool::Select => vec![],
        },
        AppIntent::PointerReleased { pos, snap } => match state.editor.active_tool {
            EditorTool::Draw => vec![AppCommand::CommitTail {
                pos: snap_to_tail_start(state, pos, snap),
            }],
            EditorTool::Move => vec![
                AppCommand::MovePickedNode { pos },
                AppCommand::ReleasePickedNode,
            ],
            EditorTool::RotatePath => vec![
                rotate_command(state, pos, snap, RotateMode::Path),
                AppCommand::ReleasePickedNode,
            ],
            EditorTool::RotateHeading => vec![
                rotate_command(state, pos, snap, RotateMode::Heading),
                AppCommand::ReleasePickedNode,
            ],
            EditorTool::Select => vec![],
        },
        AppIntent::SecondaryClicked { pos } => vec![AppCommand::RemoveTrailingNear {
            pos,
            max_distance: pick_radius,
        }],

        AppIntent::CodeFocusChanged { focused } => vec![AppCommand::SetCodeFocus { focused }],
        AppIntent::CodeTextEdited { text } => vec![AppCommand::SetCodeText { text }],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ClearPathRequested => vec![AppCommand::ClearSelection, AppCommand::ClearPath],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Rastet beim Zeichnen relativ zum Start des laufenden Segments ein.
fn snap_to_tail_start(state: &AppState, pos: DVec2, snap: bool) -> DVec2 {
    if !snap {
        return pos;
    }
    match state.path.chain().last().and_then(|s| state.path.node(s.start)) {
        Some(anchor) => round_to_90(anchor.position(), pos),
        None => pos,
    }
}

/// Baut den Rotate-Command; beim Einrasten dient der gegriffene Knoten als Anker.
fn rotate_command(state: &AppState, pos: DVec2, snap: bool, mode: RotateMode) -> AppCommand {
    let anchor = state
        .editor
        .picked
        .and_then(|pick| state.path.node(pick.node_id))
        .map(|node| node.position());
    let target = match anchor {
        Some(anchor) if snap => round_to_90(anchor, pos),
        _ => pos,
    };
    AppCommand::RotatePickedNode { target, mode }
}
