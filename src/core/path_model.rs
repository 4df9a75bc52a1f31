//! Das zentrale PathModel: eine zusammenhängende Kette von Bahnsegmenten.

use super::segment::{validate_angles, MIN_SEGMENT_LENGTH};
use super::{FieldTransform, MotionCommand, PathNode, PathSegment, SegmentKind};
use crate::shared::path_geometry::{distance_to_polyline, sample_segment};
use anyhow::{bail, Result};
use glam::DVec2;
use std::collections::HashMap;

/// Treffer einer Knoten-Abfrage: Segment-Index und Knoten-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePick {
    /// Index des Segments, zu dem der Knoten gehört
    pub segment_index: usize,
    /// ID des getroffenen Knotens
    pub node_id: u64,
}

/// Geordnete Kette von Segmenten mit gemeinsam genutzten Knoten.
///
/// Invarianten:
/// - `segments[i].end == segments[i + 1].start` (gleiche Knoten-ID)
/// - Bei Konstant-Heading-Arten gilt `start.heading == end.heading`
#[derive(Debug, Clone, Default)]
pub struct PathModel {
    /// Alle Knoten, indexiert nach ID
    nodes: HashMap<u64, PathNode>,
    /// Segmente in Ketten-Reihenfolge
    segments: Vec<PathSegment>,
    /// Nächste freie Knoten-ID
    next_node_id: u64,
}

impl PathModel {
    /// Erstellt ein leeres Modell
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            segments: Vec::new(),
            next_node_id: 1,
        }
    }

    /// Gibt `true` zurück, wenn keine Segmente vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Read-only Sicht auf die Kette in Reihenfolge.
    pub fn chain(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&PathSegment> {
        self.segments.get(index)
    }

    pub fn node(&self, node_id: u64) -> Option<&PathNode> {
        self.nodes.get(&node_id)
    }

    /// Start- und Endknoten eines Segments.
    pub fn endpoints(&self, index: usize) -> Option<(&PathNode, &PathNode)> {
        let segment = self.segments.get(index)?;
        Some((self.nodes.get(&segment.start)?, self.nodes.get(&segment.end)?))
    }

    /// Startknoten der gesamten Kette
    pub fn first_node(&self) -> Option<&PathNode> {
        self.segments.first().and_then(|s| self.nodes.get(&s.start))
    }

    /// Endknoten des letzten Segments
    pub fn tail_node(&self) -> Option<&PathNode> {
        self.segments.last().and_then(|s| self.nodes.get(&s.end))
    }

    /// Legt einen losen Knoten an und gibt dessen ID zurück.
    ///
    /// Der Knoten wird erst durch `push_segment` Teil der Kette.
    pub fn insert_node(&mut self, position: DVec2, heading: f64, tangent: f64) -> u64 {
        let id = self.next_node_id;
        self.next_node_id += 1;
        self.nodes
            .insert(id, PathNode::new(id, position, heading, tangent));
        id
    }

    /// Hängt ein Segment zwischen zwei existierenden Knoten an die Kette an.
    ///
    /// Schlägt fehl, wenn `start_id` nicht der Endknoten der aktuellen Kette ist.
    pub fn push_segment(&mut self, start_id: u64, end_id: u64, kind: SegmentKind) -> Result<usize> {
        if !self.nodes.contains_key(&start_id) || !self.nodes.contains_key(&end_id) {
            bail!("Segment verweist auf unbekannten Knoten ({start_id} → {end_id})");
        }
        if start_id == end_id {
            bail!("Segment darf nicht auf sich selbst zeigen (Knoten {start_id})");
        }
        if let Some(tail) = self.segments.last() {
            if tail.end != start_id {
                bail!(
                    "Kette unterbrochen: Segment muss bei Knoten {} beginnen, nicht bei {}",
                    tail.end,
                    start_id
                );
            }
        }

        self.segments
            .push(PathSegment::new(start_id, end_id, kind));
        let index = self.segments.len() - 1;
        self.validate_from(index);
        Ok(index)
    }

    /// Startet ein neues Segment am Kettenende (bzw. das erste Segment bei leerer Kette).
    ///
    /// Der neue Endknoten liegt auf `position` und wird danach per
    /// `drag_tail_end` verschoben.
    pub fn append_from(&mut self, position: DVec2, kind: SegmentKind) -> usize {
        let start_id = match self.segments.last() {
            Some(tail) => tail.end,
            None => self.insert_node(position, 0.0, 0.0),
        };
        let end_id = self.insert_node(position, 0.0, 0.0);

        self.segments
            .push(PathSegment::new(start_id, end_id, kind));
        let index = self.segments.len() - 1;
        self.validate_from(index);
        log::debug!(
            "Segment {} ({}) an ({:.1}, {:.1}) begonnen",
            index,
            kind,
            position.x,
            position.y
        );
        index
    }

    /// Verschiebt den Endknoten des letzten Segments (laufende Zieh-Geste).
    pub fn drag_tail_end(&mut self, position: DVec2) -> bool {
        let Some(tail) = self.segments.last() else {
            return false;
        };
        let tail_end = tail.end;
        self.move_node(tail_end, position)
    }

    /// Entfernt das letzte Segment, falls es degeneriert ist.
    ///
    /// Gibt `true` zurück, wenn ein Segment verworfen wurde.
    pub fn commit_or_discard_tail(&mut self) -> bool {
        let Some(last) = self.segments.len().checked_sub(1) else {
            return false;
        };
        if !self.is_degenerate(last) {
            return false;
        }
        self.remove_trailing();
        log::debug!("Degeneriertes Segment {} verworfen", last);
        true
    }

    /// Entfernt das letzte Segment nur, wenn `point` nahe an dessen Endknoten liegt.
    pub fn remove_trailing_if_near(&mut self, point: DVec2, threshold: f64) -> bool {
        let Some(tail) = self.tail_node() else {
            return false;
        };
        if tail.distance_to(point) >= threshold {
            return false;
        }
        self.remove_trailing();
        true
    }

    /// Entfernt das letzte Segment samt seines Endknotens.
    pub fn remove_trailing(&mut self) -> Option<PathSegment> {
        let removed = self.segments.pop()?;
        self.nodes.remove(&removed.end);
        if self.segments.is_empty() {
            self.nodes.remove(&removed.start);
        }
        Some(removed)
    }

    /// Verwirft alle Segmente und Knoten.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.nodes.clear();
    }

    /// Ersetzt das komplette Modell (erfolgreiches Parsen oder History-Restore).
    pub fn replace_with(&mut self, other: PathModel) {
        *self = other;
    }

    /// Segment mit Start und Ende näher als `MIN_SEGMENT_LENGTH`?
    pub fn is_degenerate(&self, index: usize) -> bool {
        match self.endpoints(index) {
            Some((start, end)) => start.distance_to(end.position()) < MIN_SEGMENT_LENGTH,
            None => true,
        }
    }

    /// Verschiebt einen beliebigen Knoten. Geteilte Knoten wirken auf beide Nachbarsegmente.
    pub fn move_node(&mut self, node_id: u64, position: DVec2) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return false;
        };
        node.set_position(position);
        if let Some(index) = self.first_segment_touching(node_id) {
            self.validate_from(index);
        }
        true
    }

    /// Setzt den Bahnwinkel eines Knotens gemäß der Art des Segments `segment_index`.
    pub fn set_path_angle(&mut self, segment_index: usize, node_id: u64, angle: f64) -> bool {
        let Some(segment) = self.segments.get(segment_index) else {
            return false;
        };
        let target = segment.kind.semantics().path_angle;
        self.apply_angle(node_id, angle, |node, angle| target.apply(node, angle))
    }

    /// Setzt den Heading-Winkel eines Knotens gemäß der Art des Segments `segment_index`.
    pub fn set_heading_angle(&mut self, segment_index: usize, node_id: u64, angle: f64) -> bool {
        let Some(segment) = self.segments.get(segment_index) else {
            return false;
        };
        let target = segment.kind.semantics().heading_angle;
        self.apply_angle(node_id, angle, |node, angle| target.apply(node, angle))
    }

    fn apply_angle(
        &mut self,
        node_id: u64,
        angle: f64,
        apply: impl FnOnce(&mut PathNode, f64),
    ) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return false;
        };
        apply(node, angle);
        if let Some(index) = self.first_segment_touching(node_id) {
            self.validate_from(index);
        }
        true
    }

    /// Setzt die Art eines Segments und repariert danach die Winkel.
    pub fn set_kind(&mut self, index: usize, kind: SegmentKind) -> bool {
        let Some(segment) = self.segments.get_mut(index) else {
            return false;
        };
        segment.kind = kind;
        self.validate_from(index);
        true
    }

    /// Setzt die Art aller selektierten Segmente.
    pub fn set_kind_of_selected(&mut self, kind: SegmentKind) -> bool {
        let Some(first) = self.segments.iter().position(|s| s.selected) else {
            return false;
        };
        for segment in self.segments.iter_mut().filter(|s| s.selected) {
            segment.kind = kind;
        }
        self.validate_from(first);
        true
    }

    /// Selektiert genau ein Segment (oder keines).
    pub fn select_segment(&mut self, index: Option<usize>) {
        for (i, segment) in self.segments.iter_mut().enumerate() {
            segment.selected = Some(i) == index;
        }
    }

    /// Entfernt die Markierung von allen Segmenten.
    pub fn clear_selection(&mut self) {
        self.select_segment(None);
    }

    /// Index des ersten selektierten Segments
    pub fn selected_index(&self) -> Option<usize> {
        self.segments.iter().position(|s| s.selected)
    }

    /// Abgetastete Vorschau-Linie eines Segments im Display-Raum.
    pub fn segment_preview(&self, index: usize, samples: usize) -> Vec<DVec2> {
        let Some(segment) = self.segments.get(index) else {
            return Vec::new();
        };
        let Some((start, end)) = self.endpoints(index) else {
            return Vec::new();
        };
        sample_segment(
            start.position(),
            start.tangent(),
            end.position(),
            end.tangent(),
            segment.kind.semantics().curved,
            samples,
        )
    }

    /// Erstes Segment (Ketten-Reihenfolge), dessen Verlauf näher als `threshold` an `point` liegt.
    pub fn find_segment_near(&self, point: DVec2, threshold: f64, samples: usize) -> Option<usize> {
        (0..self.segments.len())
            .filter(|&index| !self.is_degenerate(index))
            .find(|&index| {
                distance_to_polyline(point, &self.segment_preview(index, samples)) < threshold
            })
    }

    /// Erster Knoten nahe `point`: Endknoten jedes Segments, beim ersten Segment auch der Start.
    pub fn find_node_near(&self, point: DVec2, threshold: f64) -> Option<NodePick> {
        for (index, segment) in self.segments.iter().enumerate() {
            let hit = |id: u64| {
                self.nodes
                    .get(&id)
                    .is_some_and(|n| n.distance_to(point) < threshold)
            };
            if hit(segment.end) {
                return Some(NodePick {
                    segment_index: index,
                    node_id: segment.end,
                });
            }
            if index == 0 && hit(segment.start) {
                return Some(NodePick {
                    segment_index: index,
                    node_id: segment.start,
                });
            }
        }
        None
    }

    /// Bewegungsbefehle aller nicht-degenerierten Segmente im Feld-Raum.
    pub fn motion_plan(&self, transform: &FieldTransform) -> Vec<MotionCommand> {
        (0..self.segments.len())
            .filter(|&index| !self.is_degenerate(index))
            .filter_map(|index| {
                let segment = &self.segments[index];
                let (start, end) = self.endpoints(index)?;
                Some(MotionCommand::from_nodes(
                    segment.kind,
                    start,
                    end,
                    transform,
                ))
            })
            .collect()
    }

    /// Prüft die Ketten-Kontinuität (Endknoten = Startknoten des Nachfolgers).
    pub fn is_chain_continuous(&self) -> bool {
        self.segments.windows(2).all(|w| w[0].end == w[1].start)
    }

    fn first_segment_touching(&self, node_id: u64) -> Option<usize> {
        self.segments
            .iter()
            .position(|s| s.start == node_id || s.end == node_id)
    }

    /// Repariert die Winkel ab `from` bis zum Kettenende, damit Konstant-Heading
    /// über mehrere Segmente hinweg weitergereicht wird.
    fn validate_from(&mut self, from: usize) {
        for index in from..self.segments.len() {
            let segment = self.segments[index];
            let Some(start) = self.nodes.get(&segment.start).copied() else {
                continue;
            };
            if let Some(end) = self.nodes.get_mut(&segment.end) {
                validate_angles(segment.kind, &start, end);
            }
        }
    }
}
