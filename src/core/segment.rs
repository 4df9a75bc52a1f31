//! Bahnsegmente, ihre Segmentarten und die Winkel-Semantik pro Art.

use super::{FieldPose, FieldTransform, PathNode};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Segmente kürzer als dieser Abstand (Display-Einheiten) gelten als degeneriert.
pub const MIN_SEGMENT_LENGTH: f64 = 1.0;

/// Bewegungsart eines Segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Gerade fahren, Heading linear interpoliert
    #[serde(rename = "strafeToLinearHeading")]
    StrafeLinearHeading,
    /// Gerade fahren, Heading bleibt konstant
    #[serde(rename = "strafeToConstantHeading")]
    StrafeConstantHeading,
    /// Spline, Heading folgt der Tangente
    #[default]
    #[serde(rename = "splineTo")]
    SplineTo,
    /// Spline, Heading bleibt konstant
    #[serde(rename = "splineToConstantHeading")]
    SplineConstantHeading,
    /// Spline, Heading linear interpoliert
    #[serde(rename = "splineToLinearHeading")]
    SplineLinearHeading,
}

/// Welche Winkel eines Knotens eine Winkel-Operation setzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleTarget {
    /// Nur Heading
    Heading,
    /// Nur Tangente
    Tangent,
    /// Heading und Tangente gemeinsam
    Both,
}

impl AngleTarget {
    /// Setzt die betroffenen Winkel des Knotens.
    pub fn apply(self, node: &mut PathNode, angle: f64) {
        match self {
            AngleTarget::Heading => node.set_heading(angle),
            AngleTarget::Tangent => node.set_tangent(angle),
            AngleTarget::Both => {
                node.set_heading(angle);
                node.set_tangent(angle);
            }
        }
    }
}

/// Argument-Form einer Segmentzeile im Code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeArgs {
    /// `new Vector2d(x,y),heading`
    VectorHeading,
    /// `new Vector2d(x,y)`
    Vector,
    /// `new Vector2d(x,y),tangent`
    VectorTangent,
    /// `new Pose2d(x,y,heading),tangent`
    PoseTangent,
}

/// Tabelleneintrag mit allem artspezifischen Verhalten eines Segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSemantics {
    /// Methodenname im Code
    pub code_name: &'static str,
    /// End-Heading muss dem Start-Heading entsprechen
    pub constant_heading: bool,
    /// Bei Heading-Reparatur wird zusätzlich die Tangente übernommen
    pub repair_tangent: bool,
    /// Wirkung von "Bahnwinkel setzen"
    pub path_angle: AngleTarget,
    /// Wirkung von "Heading-Winkel setzen"
    pub heading_angle: AngleTarget,
    /// Argumente der Codezeile
    pub args: CodeArgs,
    /// Gekrümmter Verlauf (Spline) statt gerader Linie
    pub curved: bool,
}

const SEMANTICS: [KindSemantics; 5] = [
    // StrafeLinearHeading
    KindSemantics {
        code_name: "strafeToLinearHeading",
        constant_heading: false,
        repair_tangent: false,
        path_angle: AngleTarget::Both,
        heading_angle: AngleTarget::Both,
        args: CodeArgs::VectorHeading,
        curved: false,
    },
    // StrafeConstantHeading
    KindSemantics {
        code_name: "strafeToConstantHeading",
        constant_heading: true,
        repair_tangent: true,
        path_angle: AngleTarget::Both,
        heading_angle: AngleTarget::Both,
        args: CodeArgs::Vector,
        curved: false,
    },
    // SplineTo
    KindSemantics {
        code_name: "splineTo",
        constant_heading: false,
        repair_tangent: false,
        path_angle: AngleTarget::Both,
        heading_angle: AngleTarget::Both,
        args: CodeArgs::VectorHeading,
        curved: true,
    },
    // SplineConstantHeading
    KindSemantics {
        code_name: "splineToConstantHeading",
        constant_heading: true,
        repair_tangent: false,
        path_angle: AngleTarget::Tangent,
        heading_angle: AngleTarget::Heading,
        args: CodeArgs::VectorTangent,
        curved: true,
    },
    // SplineLinearHeading
    KindSemantics {
        code_name: "splineToLinearHeading",
        constant_heading: false,
        repair_tangent: false,
        path_angle: AngleTarget::Tangent,
        heading_angle: AngleTarget::Heading,
        args: CodeArgs::PoseTangent,
        curved: true,
    },
];

impl SegmentKind {
    /// Alle Segmentarten in Anzeige-Reihenfolge
    pub const ALL: [SegmentKind; 5] = [
        SegmentKind::StrafeLinearHeading,
        SegmentKind::StrafeConstantHeading,
        SegmentKind::SplineTo,
        SegmentKind::SplineConstantHeading,
        SegmentKind::SplineLinearHeading,
    ];

    /// Tabelleneintrag dieser Art
    pub fn semantics(self) -> &'static KindSemantics {
        &SEMANTICS[self as usize]
    }

    /// Methodenname im Code (z.B. `splineTo`)
    pub fn code_name(self) -> &'static str {
        self.semantics().code_name
    }

    /// Sucht die Art zu einem exakten Methodennamen.
    pub fn from_code_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code_name() == name)
    }

    /// Ob das End-Heading dem Start-Heading folgen muss
    pub fn is_constant_heading(self) -> bool {
        self.semantics().constant_heading
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code_name())
    }
}

/// Repariert die Winkel des Endknotens gemäß der Segmentart.
///
/// Gibt `true` zurück, wenn der Endknoten verändert wurde.
pub fn validate_angles(kind: SegmentKind, start: &PathNode, end: &mut PathNode) -> bool {
    let semantics = kind.semantics();
    if !semantics.constant_heading || end.heading() == start.heading() {
        return false;
    }
    end.set_heading(start.heading());
    if semantics.repair_tangent {
        end.set_tangent(start.tangent());
    }
    true
}

/// Kante zwischen zwei Knoten (per ID) mit Segmentart.
///
/// Der Startknoten ist mit dem Endknoten des Vorgängers identisch (gleiche ID).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    /// ID des Startknotens
    pub start: u64,
    /// ID des Endknotens
    pub end: u64,
    /// Bewegungsart
    pub kind: SegmentKind,
    /// Hervorgehoben (Select-Tool)
    pub selected: bool,
}

impl PathSegment {
    /// Erstellt ein nicht selektiertes Segment
    pub fn new(start: u64, end: u64, kind: SegmentKind) -> Self {
        Self {
            start,
            end,
            kind,
            selected: false,
        }
    }
}

/// Art-spezifische Argumente eines Bewegungsbefehls (Feld-Raum).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionArgs {
    /// Zielposition und ein Winkel (Heading oder Tangente, je nach Art)
    VectorAngle { end: DVec2, angle: f64 },
    /// Nur Zielposition
    Vector { end: DVec2 },
    /// Zielpose und End-Tangente
    PoseAngle { pose: FieldPose, angle: f64 },
}

/// Übergabe-Tupel an den Bewegungsplaner: Startpose, Art und Argumente im Feld-Raum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionCommand {
    /// Startpose des Segments
    pub start_pose: FieldPose,
    /// Bewegungsart
    pub kind: SegmentKind,
    /// Argumente laut Art-Tabelle
    pub args: MotionArgs,
}

impl MotionCommand {
    /// Baut den Befehl für ein Segment aus seinen beiden Knoten.
    pub fn from_nodes(
        kind: SegmentKind,
        start: &PathNode,
        end: &PathNode,
        transform: &FieldTransform,
    ) -> Self {
        let end_vector = end.vector_in_field(transform);
        let args = match kind.semantics().args {
            CodeArgs::VectorHeading => MotionArgs::VectorAngle {
                end: end_vector,
                angle: end.heading_in_field(),
            },
            CodeArgs::Vector => MotionArgs::Vector { end: end_vector },
            CodeArgs::VectorTangent => MotionArgs::VectorAngle {
                end: end_vector,
                angle: end.tangent_in_field(),
            },
            CodeArgs::PoseTangent => MotionArgs::PoseAngle {
                pose: end.pose_in_field(transform),
                angle: end.tangent_in_field(),
            },
        };

        Self {
            start_pose: start.pose_in_field(transform),
            kind,
            args,
        }
    }
}
