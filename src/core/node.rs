//! Ein Knoten der Bahn: Position plus Heading und Tangente.

use super::{FieldPose, FieldTransform};
use glam::DVec2;

/// Positionierter, orientierter Punkt im Display-Raum.
///
/// `heading` ist die Ausrichtung des Roboters, `tangent` die Fahrtrichtung.
/// Beide Winkel sind in Radiant und im Display-Raum (Y nach unten) angegeben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    id: u64,
    position: DVec2,
    heading: f64,
    tangent: f64,
}

impl PathNode {
    /// Erstellt einen neuen Knoten
    pub fn new(id: u64, position: DVec2, heading: f64, tangent: f64) -> Self {
        Self {
            id,
            position,
            heading,
            tangent,
        }
    }

    /// Stabile ID innerhalb des PathModels
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Position im Display-Raum
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Heading im Display-Raum
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Tangente im Display-Raum
    pub fn tangent(&self) -> f64 {
        self.tangent
    }

    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
    }

    pub fn set_tangent(&mut self, tangent: f64) {
        self.tangent = tangent;
    }

    /// Abstand zu einem Display-Punkt
    pub fn distance_to(&self, point: DVec2) -> f64 {
        self.position.distance(point)
    }

    /// Pose (Position + Heading) im Feld-Raum
    pub fn pose_in_field(&self, transform: &FieldTransform) -> FieldPose {
        FieldPose::new(
            transform.to_field(self.position),
            FieldTransform::negate_angle(self.heading),
        )
    }

    /// Position im Feld-Raum
    pub fn vector_in_field(&self, transform: &FieldTransform) -> DVec2 {
        transform.to_field(self.position)
    }

    /// Heading im Feld-Raum
    pub fn heading_in_field(&self) -> f64 {
        FieldTransform::negate_angle(self.heading)
    }

    /// Tangente im Feld-Raum
    pub fn tangent_in_field(&self) -> f64 {
        FieldTransform::negate_angle(self.tangent)
    }
}
