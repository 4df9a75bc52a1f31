use glam::DVec2;
use path_drawer::{AppCommand, AppController, AppIntent, AppState, EditorTool, SegmentKind};

fn press_drag_release(
    controller: &mut AppController,
    state: &mut AppState,
    from: DVec2,
    to: DVec2,
) {
    for intent in [
        AppIntent::PointerPressed {
            pos: from,
            snap: false,
        },
        AppIntent::PointerDragged {
            pos: (from + to) * 0.5,
            snap: false,
        },
        AppIntent::PointerReleased {
            pos: to,
            snap: false,
        },
    ] {
        controller
            .handle_intent(state, intent)
            .expect("Geste sollte ohne Fehler durchlaufen");
    }
}

fn drawn_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    press_drag_release(
        controller,
        &mut state,
        DVec2::new(100.0, 100.0),
        DVec2::new(300.0, 100.0),
    );
    controller.tick(&mut state);
    press_drag_release(
        controller,
        &mut state,
        DVec2::new(300.0, 100.0),
        DVec2::new(300.0, 300.0),
    );
    controller.tick(&mut state);
    state
}

#[test]
fn test_draw_gesture_logs_commands_and_builds_chain() {
    let mut controller = AppController::new();
    let state = drawn_state(&mut controller);

    assert_eq!(state.segment_count(), 2);
    assert!(state.path.is_chain_continuous());

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::CommitTail { pos } => assert_eq!(*pos, DVec2::new(300.0, 300.0)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_click_without_drag_is_discarded() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let pos = DVec2::new(50.0, 50.0);

    press_drag_release(&mut controller, &mut state, pos, pos);

    assert_eq!(state.segment_count(), 0);
    assert!(!controller.tick(&mut state));
    assert!(!state.can_undo());
}

#[test]
fn test_tick_syncs_text_and_records_history() {
    let mut controller = AppController::new();
    let state = drawn_state(&mut controller);

    assert_eq!(state.code.text, state.get_text());
    assert_eq!(state.code.text.lines().count(), 3);
    // "" vor dem ersten Segment und der Stand nach dem ersten Segment
    assert_eq!(state.history.undo_len(), 2);
}

#[test]
fn test_tick_without_changes_records_nothing() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);
    let before = state.history.undo_len();

    assert!(!controller.tick(&mut state));
    assert!(!controller.tick(&mut state));
    assert_eq!(state.history.undo_len(), before);
}

#[test]
fn test_undo_redo_restore_previous_states() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);
    let two_segments = state.get_text();

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    assert_eq!(state.segment_count(), 1);
    assert_eq!(state.code.text, state.get_text());
    assert!(!controller.tick(&mut state));

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    assert_eq!(state.segment_count(), 0);
    assert_eq!(state.code.text, "");

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .unwrap();
    assert_eq!(state.get_text(), two_segments);
    assert!(!state.can_redo());
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.history.record_if_changed("a");
    state.history.pop_undo_with_current("b".to_string());
    assert_eq!(state.history.redo_len(), 1);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();

    assert_eq!(state.history.redo_len(), 1);
    assert_eq!(state.segment_count(), 0);
}

#[test]
fn test_new_edit_after_undo_clears_redo() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    assert!(state.can_redo());

    press_drag_release(
        &mut controller,
        &mut state,
        DVec2::new(300.0, 100.0),
        DVec2::new(500.0, 150.0),
    );
    controller.tick(&mut state);
    assert!(!state.can_redo());
}

#[test]
fn test_focused_code_edit_replaces_model() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::CodeFocusChanged { focused: true })
        .unwrap();
    let edited = format!("{}\n\t.strafeToConstantHeading(new Vector2d(0,0))", state.code.text);
    controller
        .handle_intent(&mut state, AppIntent::CodeTextEdited { text: edited })
        .unwrap();
    assert!(controller.tick(&mut state));
    assert_eq!(state.segment_count(), 3);
    assert_eq!(
        state.path.chain()[2].kind,
        SegmentKind::StrafeConstantHeading
    );
}

#[test]
fn test_invalid_code_leaves_model_untouched() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);
    let valid = state.get_text();

    state.set_text(&format!("{valid}garbage"));
    assert_eq!(state.get_text(), valid);
    assert!(!state.set_text(&format!("{valid}\n\t.splineTo(new Vector2d(1,")));
    assert_eq!(state.get_text(), valid);

    controller
        .handle_intent(&mut state, AppIntent::CodeFocusChanged { focused: true })
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::CodeTextEdited {
                text: format!("{valid}\n\t.splineTo(new Vector2d(1,"),
            },
        )
        .unwrap();
    assert!(!controller.tick(&mut state));
    assert_eq!(state.get_text(), valid);
}

#[test]
fn test_set_text_accepts_carriage_return_only_breaks() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);
    let valid = state.get_text();

    assert!(state.set_text(&valid.replace('\n', "\r")));
    assert_eq!(state.segment_count(), 2);
    assert_eq!(state.get_text(), valid);

    assert!(state.set_text(&valid.replace('\n', "\u{2028}")));
    assert_eq!(state.get_text(), valid);
}

#[test]
fn test_set_text_empty_clears_model() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);

    assert!(state.set_text(""));
    assert_eq!(state.segment_count(), 0);
}

#[test]
fn test_leaving_code_view_records_user_text() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);
    let before = state.history.undo_len();

    controller
        .handle_intent(&mut state, AppIntent::CodeFocusChanged { focused: true })
        .unwrap();
    let spaced = state.code.text.replace(',', ", ");
    controller
        .handle_intent(&mut state, AppIntent::CodeTextEdited { text: spaced.clone() })
        .unwrap();
    controller.tick(&mut state);
    controller
        .handle_intent(&mut state, AppIntent::CodeFocusChanged { focused: false })
        .unwrap();

    // Unfokussiert: Text wird normalisiert, der Nutzer-Text landet in der History
    assert!(controller.tick(&mut state));
    assert_eq!(state.code.text, state.get_text());
    assert_eq!(state.history.undo_len(), before + 1);
}

#[test]
fn test_move_tool_moves_shared_node() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);
    controller
        .handle_intent(
            &mut state,
            AppIntent::ToolSelected {
                tool: EditorTool::Move,
            },
        )
        .unwrap();

    press_drag_release(
        &mut controller,
        &mut state,
        DVec2::new(305.0, 98.0),
        DVec2::new(320.0, 80.0),
    );

    let (_, first_end) = state.path.endpoints(0).unwrap();
    let (second_start, _) = state.path.endpoints(1).unwrap();
    assert_eq!(first_end.position(), DVec2::new(320.0, 80.0));
    assert_eq!(second_start.position(), DVec2::new(320.0, 80.0));
    assert!(state.editor.picked.is_none());
}

#[test]
fn test_rotate_tool_sets_path_angle() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);
    controller
        .handle_intent(
            &mut state,
            AppIntent::ToolSelected {
                tool: EditorTool::RotatePath,
            },
        )
        .unwrap();

    press_drag_release(
        &mut controller,
        &mut state,
        DVec2::new(300.0, 300.0),
        DVec2::new(300.0, 400.0),
    );

    let tail = state.path.tail_node().unwrap();
    assert!((tail.tangent() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    assert!((tail.heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
}

#[test]
fn test_select_tool_changes_kind_of_clicked_segment() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ToolSelected {
                tool: EditorTool::Select,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: DVec2::new(200.0, 104.0),
                snap: false,
            },
        )
        .unwrap();
    assert_eq!(state.path.selected_index(), Some(0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::SegmentKindSelected {
                kind: SegmentKind::SplineConstantHeading,
            },
        )
        .unwrap();

    assert_eq!(state.path.chain()[0].kind, SegmentKind::SplineConstantHeading);
    assert_eq!(state.path.chain()[1].kind, SegmentKind::SplineTo);
    assert_eq!(state.editor.current_kind, SegmentKind::SplineConstantHeading);
}

#[test]
fn test_secondary_click_removes_trailing_segment() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryClicked {
                pos: DVec2::new(150.0, 150.0),
            },
        )
        .unwrap();
    assert_eq!(state.segment_count(), 2);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryClicked {
                pos: DVec2::new(303.0, 296.0),
            },
        )
        .unwrap();
    assert_eq!(state.segment_count(), 1);
}

#[test]
fn test_render_scene_reflects_selection() {
    let mut controller = AppController::new();
    let mut state = drawn_state(&mut controller);
    state.path.select_segment(Some(1));

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.segments.len(), 2);
    assert_eq!(scene.highlighted_index(), Some(1));
}
