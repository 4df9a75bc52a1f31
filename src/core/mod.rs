//! Core-Domänentypen: Knoten, Segmente, PathModel und Koordinaten-Transformation.

/// Positionierter, orientierter Bahnpunkt
pub mod node;
pub mod path_model;
/// Segmentarten und ihre Winkel-Semantik
pub mod segment;
pub mod transform;

pub use node::PathNode;
pub use path_model::{NodePick, PathModel};
pub use segment::{
    validate_angles, AngleTarget, CodeArgs, KindSemantics, MotionArgs, MotionCommand,
    PathSegment, SegmentKind, MIN_SEGMENT_LENGTH,
};
pub use transform::{FieldPose, FieldTransform};
