//! Parser für Bahn-Code: Text → PathModel.

use super::scanner::{FieldScanner, ScanError};
use super::writer::START_CALL;
use crate::core::{CodeArgs, FieldTransform, PathModel, SegmentKind, MIN_SEGMENT_LENGTH};
use anyhow::{bail, Context, Result};
use glam::DVec2;

/// Literal vor den Pose-Feldern
const POSE_MARKER: &str = "newPose2d(";
/// Literal vor den Vektor-Feldern
const VECTOR_MARKER: &str = "newVector2d(";

/// Parst Code-Text in ein neues PathModel (Display-Raum).
///
/// Leerer Text ergibt ein leeres Modell. Zeilen ohne bekannte Segmentart
/// werden übersprungen, ebenso Segmente ohne Länge. Jeder Scan-Fehler bricht das gesamte Parsen ab, ein
/// Teilergebnis gibt es nicht.
pub fn parse_path_code(text: &str, transform: &FieldTransform) -> Result<PathModel> {
    let mut model = PathModel::new();
    if text.trim().is_empty() {
        return Ok(model);
    }

    let mut lines = split_line_breaks(text).into_iter().map(strip_whitespace);
    let start_line = lines.next().unwrap_or_default();
    if !start_line.contains(POSE_MARKER) {
        bail!(
            "Zeile 1 enthält keine Startpose ('{}(new Pose2d(x,y,h))' erwartet)",
            START_CALL
        );
    }

    let (x, y, h) = read_start_pose(&start_line).context("Fehler in Zeile 1 (Startpose)")?;
    let heading = FieldTransform::negate_angle(h);
    let mut previous = model.insert_node(transform.to_display(DVec2::new(x, y)), heading, heading);

    let mut segment_count = 0usize;
    for (offset, line) in lines.enumerate() {
        let line_no = offset + 2;
        let Some(kind) = classify_line(&line) else {
            if !line.is_empty() {
                log::debug!("Zeile {} übersprungen: keine Segmentart erkannt", line_no);
            }
            continue;
        };

        let previous_heading = model.node(previous).map_or(0.0, |n| n.heading());
        let end = read_segment_end(&line, kind, previous_heading)
            .with_context(|| format!("Fehler in Zeile {} ({})", line_no, kind))?;

        let end_position = transform.to_display(end.position);
        let length = model
            .node(previous)
            .map_or(f64::INFINITY, |n| n.distance_to(end_position));
        if length < MIN_SEGMENT_LENGTH {
            log::debug!("Zeile {} übersprungen: Segment ohne Länge", line_no);
            continue;
        }

        let end_id = model.insert_node(end_position, end.heading, end.tangent);
        model
            .push_segment(previous, end_id, kind)
            .with_context(|| format!("Zeile {} konnte nicht verkettet werden", line_no))?;
        previous = end_id;
        segment_count += 1;
    }

    if segment_count == 0 {
        return Ok(PathModel::new());
    }
    Ok(model)
}

/// Trennt an jedem Zeilenumbruch; `\r\n` zählt als ein Umbruch.
fn split_line_breaks(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(is_line_break) {
        lines.push(&rest[..pos]);
        let width = if rest[pos..].starts_with("\r\n") {
            2
        } else {
            rest[pos..].chars().next().map_or(1, char::len_utf8)
        };
        rest = &rest[pos + width..];
    }
    lines.push(rest);
    lines
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Entfernt sämtliche Whitespace-Zeichen einer Zeile.
fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Bestimmt die Segmentart über den exakten Methodennamen vor der ersten `(`
/// (hinter dem letzten `.`, falls vorhanden).
fn classify_line(line: &str) -> Option<SegmentKind> {
    let call = &line[..line.find('(')?];
    let name = call.rsplit('.').next()?;
    SegmentKind::from_code_name(name)
}

fn read_start_pose(line: &str) -> Result<(f64, f64, f64), ScanError> {
    let mut scanner = FieldScanner::new(line);
    scanner.seek(POSE_MARKER)?;
    scanner.pose()
}

/// Endknoten-Werte einer Segmentzeile im Display-Winkel-Raum (Position noch im Feld-Raum).
#[derive(Debug, Clone, Copy)]
struct SegmentEnd {
    position: DVec2,
    heading: f64,
    tangent: f64,
}

fn read_segment_end(
    line: &str,
    kind: SegmentKind,
    previous_heading: f64,
) -> Result<SegmentEnd, ScanError> {
    let mut scanner = FieldScanner::new(line);
    let end = match kind.semantics().args {
        CodeArgs::VectorHeading => {
            scanner.seek(VECTOR_MARKER)?;
            let (x, y) = scanner.vector()?;
            let angle = FieldTransform::negate_angle(scanner.trailing_angle()?);
            SegmentEnd {
                position: DVec2::new(x, y),
                heading: angle,
                tangent: angle,
            }
        }
        CodeArgs::Vector => {
            scanner.seek(VECTOR_MARKER)?;
            let (x, y) = scanner.vector()?;
            SegmentEnd {
                position: DVec2::new(x, y),
                heading: previous_heading,
                tangent: previous_heading,
            }
        }
        CodeArgs::VectorTangent => {
            scanner.seek(VECTOR_MARKER)?;
            let (x, y) = scanner.vector()?;
            SegmentEnd {
                position: DVec2::new(x, y),
                heading: previous_heading,
                tangent: FieldTransform::negate_angle(scanner.trailing_angle()?),
            }
        }
        CodeArgs::PoseTangent => {
            scanner.seek(POSE_MARKER)?;
            let (x, y, h) = scanner.pose()?;
            SegmentEnd {
                position: DVec2::new(x, y),
                heading: FieldTransform::negate_angle(h),
                tangent: FieldTransform::negate_angle(scanner.trailing_angle()?),
            }
        }
    };
    Ok(end)
}
