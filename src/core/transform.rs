//! Umrechnung zwischen Display-Koordinaten (Pixel) und Feld-Koordinaten (Zoll).

use glam::DVec2;

/// Pose im Feld-Koordinatensystem (Position + Heading).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPose {
    /// Position in Feld-Einheiten
    pub position: DVec2,
    /// Heading in Radiant (Feld-Vorzeichenkonvention)
    pub heading: f64,
}

impl FieldPose {
    /// Erstellt eine neue Feld-Pose
    pub fn new(position: DVec2, heading: f64) -> Self {
        Self { position, heading }
    }
}

/// Affine Abbildung zwischen Display- und Feld-Koordinaten.
///
/// Die Display-Y-Achse zeigt nach unten, die Feld-Y-Achse nach oben. Durch die
/// Spiegelung wechseln alle Winkel beim Übergang das Vorzeichen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldTransform {
    /// Display-Position des Feld-Ursprungs
    origin: DVec2,
    /// Feld-Einheiten pro Display-Pixel
    field_per_pixel: f64,
}

impl FieldTransform {
    /// Quadratisches Feld (`field_size` Zoll) auf quadratischer Zeichenfläche
    /// (`canvas_size` Pixel), Feld-Ursprung in der Mitte der Fläche.
    pub fn for_canvas(field_size: f64, canvas_size: f64) -> Self {
        let canvas_size = canvas_size.max(1.0);
        Self {
            origin: DVec2::splat(canvas_size * 0.5),
            field_per_pixel: field_size / canvas_size,
        }
    }

    /// Freie Abbildung mit beliebigem Ursprung und Maßstab.
    pub fn with_origin(origin: DVec2, field_per_pixel: f64) -> Self {
        Self {
            origin,
            field_per_pixel,
        }
    }

    /// Display-Position des Feld-Ursprungs
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Feld-Einheiten pro Display-Pixel
    pub fn field_per_pixel(&self) -> f64 {
        self.field_per_pixel
    }

    /// Display → Feld
    pub fn to_field(&self, display: DVec2) -> DVec2 {
        DVec2::new(
            (display.x - self.origin.x) * self.field_per_pixel,
            (self.origin.y - display.y) * self.field_per_pixel,
        )
    }

    /// Feld → Display
    pub fn to_display(&self, field: DVec2) -> DVec2 {
        DVec2::new(
            field.x / self.field_per_pixel + self.origin.x,
            self.origin.y - field.y / self.field_per_pixel,
        )
    }

    /// Spiegelt einen Winkel zwischen den beiden Räumen (in beide Richtungen gleich).
    pub fn negate_angle(angle: f64) -> f64 {
        -angle
    }
}

impl Default for FieldTransform {
    fn default() -> Self {
        Self::for_canvas(
            crate::shared::options::FIELD_SIZE_INCHES,
            crate::shared::options::CANVAS_SIZE_PX,
        )
    }
}
