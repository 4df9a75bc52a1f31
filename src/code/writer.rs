//! Writer für Bahn-Code: PathModel → Text.

use crate::core::{CodeArgs, FieldTransform, PathModel};
use std::fmt::Write;

/// Methodenaufruf der Startzeile
pub const START_CALL: &str = "actionBuilder";

/// Schreibt ein PathModel als Code-Text im Feld-Raum.
///
/// Degenerierte Segmente werden ausgelassen. Enthält das Modell kein
/// einziges gültiges Segment, ist das Ergebnis leer.
///
/// # Parameter
/// - `model`: Das zu exportierende Modell
/// - `transform`: Display → Feld
/// - `precision`: Maximale Nachkommastellen
pub fn write_path_code(model: &PathModel, transform: &FieldTransform, precision: usize) -> String {
    let mut output = String::new();
    let num = |v: f64| format_number(v, precision);
    let angle = |v: f64| format_angle(v, precision);

    for index in 0..model.segment_count() {
        if model.is_degenerate(index) {
            continue;
        }
        let Some(segment) = model.segment(index) else {
            continue;
        };
        let Some((_, end)) = model.endpoints(index) else {
            continue;
        };

        if output.is_empty() {
            let Some(first) = model.first_node() else {
                return String::new();
            };
            let pose = first.pose_in_field(transform);
            let _ = write!(
                output,
                "{}(new Pose2d({},{},{}))",
                START_CALL,
                num(pose.position.x),
                num(pose.position.y),
                num(pose.heading)
            );
        }

        let vector = end.vector_in_field(transform);
        let _ = write!(output, "\n\t.{}(", segment.kind.code_name());
        let _ = match segment.kind.semantics().args {
            CodeArgs::VectorHeading => write!(
                output,
                "new Vector2d({},{}),{})",
                num(vector.x),
                num(vector.y),
                angle(end.heading_in_field())
            ),
            CodeArgs::Vector => write!(output, "new Vector2d({},{}))", num(vector.x), num(vector.y)),
            CodeArgs::VectorTangent => write!(
                output,
                "new Vector2d({},{}),{})",
                num(vector.x),
                num(vector.y),
                angle(end.tangent_in_field())
            ),
            CodeArgs::PoseTangent => write!(
                output,
                "new Pose2d({},{},{}),{})",
                num(vector.x),
                num(vector.y),
                num(end.heading_in_field()),
                angle(end.tangent_in_field())
            ),
        };
    }

    output
}

/// Formatiert eine Zahl mit höchstens `precision` Nachkommastellen.
///
/// Nachlaufende Nullen und ein alleinstehender Punkt werden entfernt,
/// `-0` wird zu `0`.
pub fn format_number(value: f64, precision: usize) -> String {
    let mut text = format!("{:.*}", precision, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Formatiert den abschließenden Winkel einer Segmentzeile.
///
/// Wie [`format_number`], behält aber mindestens eine Nachkommastelle (`0.0`).
pub fn format_angle(value: f64, precision: usize) -> String {
    let mut text = format_number(value, precision);
    if precision > 0 && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SegmentKind;
    use glam::DVec2;

    #[test]
    fn format_number_trims_trailing_zeros() {
        assert_eq!(format_number(55.5, 4), "55.5");
        assert_eq!(format_number(100.0, 4), "100");
        assert_eq!(format_number(1.23456789, 4), "1.2346");
        assert_eq!(format_number(-0.00001, 4), "0");
        assert_eq!(format_number(-0.0, 4), "0");
        assert_eq!(format_number(-3.25, 2), "-3.25");
    }

    #[test]
    fn format_number_without_decimals_keeps_integer_zeros() {
        assert_eq!(format_number(100.0, 0), "100");
        assert_eq!(format_number(-0.4, 0), "0");
    }

    #[test]
    fn format_angle_keeps_one_decimal() {
        assert_eq!(format_angle(0.0, 4), "0.0");
        assert_eq!(format_angle(-0.0, 4), "0.0");
        assert_eq!(format_angle(1.0, 4), "1.0");
        assert_eq!(format_angle(0.78539816, 4), "0.7854");
        assert_eq!(format_angle(2.0, 0), "2");
    }

    #[test]
    fn empty_model_writes_nothing() {
        let model = PathModel::new();
        assert_eq!(write_path_code(&model, &FieldTransform::default(), 4), "");
    }

    #[test]
    fn writes_one_line_per_segment() {
        let transform = FieldTransform::with_origin(DVec2::ZERO, 0.5);
        let mut model = PathModel::new();
        model.append_from(DVec2::ZERO, SegmentKind::SplineTo);
        model.drag_tail_end(DVec2::new(100.0, 0.0));
        model.append_from(DVec2::new(100.0, 40.0), SegmentKind::StrafeConstantHeading);

        let code = write_path_code(&model, &transform, 4);
        assert_eq!(
            code,
            "actionBuilder(new Pose2d(0,0,0))\n\
             \t.splineTo(new Vector2d(50,0),0.0)\n\
             \t.strafeToConstantHeading(new Vector2d(50,-20))"
        );
    }

    #[test]
    fn linear_heading_spline_writes_end_pose() {
        let transform = FieldTransform::with_origin(DVec2::ZERO, 1.0);
        let mut model = PathModel::new();
        model.append_from(DVec2::ZERO, SegmentKind::SplineLinearHeading);
        model.drag_tail_end(DVec2::new(10.0, 10.0));
        let end = model.chain()[0].end;
        model.set_heading_angle(0, end, 0.5);
        model.set_path_angle(0, end, -1.0);

        let code = write_path_code(&model, &transform, 4);
        assert!(code.ends_with("\t.splineToLinearHeading(new Pose2d(10,-10,-0.5),1.0)"));
    }

    #[test]
    fn degenerate_segments_are_skipped() {
        let transform = FieldTransform::with_origin(DVec2::ZERO, 1.0);
        let mut model = PathModel::new();
        model.append_from(DVec2::ZERO, SegmentKind::SplineTo);
        model.drag_tail_end(DVec2::new(10.0, 0.0));
        model.append_from(DVec2::new(10.2, 0.0), SegmentKind::SplineTo);

        let code = write_path_code(&model, &transform, 4);
        assert_eq!(code.lines().count(), 2);
    }
}
