//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{PathScene, SceneNode, SceneSegment};
use std::collections::HashSet;

/// Baut eine PathScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> PathScene {
    let path = &state.path;
    let picked = state.editor.picked.map(|p| p.node_id);
    let mut segments = Vec::with_capacity(path.segment_count());
    let mut nodes = Vec::with_capacity(path.node_count());
    let mut seen = HashSet::new();

    for (index, segment) in path.chain().iter().enumerate() {
        let Some((start, end)) = path.endpoints(index) else {
            continue;
        };
        for node in [start, end] {
            if seen.insert(node.id()) {
                nodes.push(SceneNode {
                    id: node.id(),
                    position: node.position(),
                    heading: node.heading(),
                    tangent: node.tangent(),
                    picked: picked == Some(node.id()),
                });
            }
        }
        segments.push(SceneSegment {
            index,
            kind: segment.kind,
            start: start.position(),
            end: end.position(),
            highlighted: segment.selected,
            polyline: path.segment_preview(index, state.options.line_detail),
        });
    }

    PathScene {
        segments,
        nodes,
        canvas_size: state.options.canvas_size,
    }
}
