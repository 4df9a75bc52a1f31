//! Minimaler Feld-Scanner für Codezeilen: Werte werden nur über die Literale
//! `(`, `,` und `)` abgegrenzt, Verschachtelung wird nicht unterstützt.

use thiserror::Error;

/// Fehler beim Scannen einer Codezeile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Erwartetes Literal kommt ab der aktuellen Position nicht mehr vor
    #[error("Marker '{marker}' fehlt ab Position {position}")]
    MissingMarker { marker: String, position: usize },
    /// Feld wird nicht durch das erwartete Trennzeichen abgeschlossen
    #[error("Feld ab Position {position} endet nicht mit '{delimiter}'")]
    UnterminatedField { delimiter: char, position: usize },
    /// Feldinhalt ist keine gültige Zahl
    #[error("'{text}' ist keine gültige Zahl")]
    InvalidNumber { text: String },
}

/// Liest Felder einer (whitespace-freien) Zeile von links nach rechts.
#[derive(Debug, Clone)]
pub struct FieldScanner<'a> {
    line: &'a str,
    cursor: usize,
}

impl<'a> FieldScanner<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, cursor: 0 }
    }

    /// Aktuelle Byte-Position
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Springt hinter das nächste Vorkommen von `marker`.
    pub fn seek(&mut self, marker: &str) -> Result<(), ScanError> {
        let rest = &self.line[self.cursor..];
        match rest.find(marker) {
            Some(offset) => {
                self.cursor += offset + marker.len();
                Ok(())
            }
            None => Err(ScanError::MissingMarker {
                marker: marker.to_string(),
                position: self.cursor,
            }),
        }
    }

    /// Erwartet `literal` exakt an der aktuellen Position.
    pub fn expect(&mut self, literal: char) -> Result<(), ScanError> {
        if self.line[self.cursor..].starts_with(literal) {
            self.cursor += literal.len_utf8();
            Ok(())
        } else {
            Err(ScanError::MissingMarker {
                marker: literal.to_string(),
                position: self.cursor,
            })
        }
    }

    /// Liest eine Zahl bis zum Trennzeichen und springt dahinter.
    pub fn number_until(&mut self, delimiter: char) -> Result<f64, ScanError> {
        let rest = &self.line[self.cursor..];
        let Some(end) = rest.find(delimiter) else {
            return Err(ScanError::UnterminatedField {
                delimiter,
                position: self.cursor,
            });
        };
        let text = &rest[..end];
        let value = text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ScanError::InvalidNumber {
                text: truncate_for_error(text).to_string(),
            })?;
        self.cursor += end + delimiter.len_utf8();
        Ok(value)
    }

    /// `x,y)` → Vektor
    pub fn vector(&mut self) -> Result<(f64, f64), ScanError> {
        let x = self.number_until(',')?;
        let y = self.number_until(')')?;
        Ok((x, y))
    }

    /// `x,y,h)` → Pose
    pub fn pose(&mut self) -> Result<(f64, f64, f64), ScanError> {
        let x = self.number_until(',')?;
        let y = self.number_until(',')?;
        let h = self.number_until(')')?;
        Ok((x, y, h))
    }

    /// `,a)` → Winkel nach einem Vektor bzw. einer Pose
    pub fn trailing_angle(&mut self) -> Result<f64, ScanError> {
        self.expect(',')?;
        self.number_until(')')
    }
}

/// Kürzt lange Feldinhalte für Fehlermeldungen.
fn truncate_for_error(s: &str) -> &str {
    match s.char_indices().nth(40) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_pose_after_marker() {
        let mut scanner = FieldScanner::new("actionBuilder(newPose2d(1.5,-2,0.25))");
        scanner.seek("newPose2d(").unwrap();
        assert_eq!(scanner.pose().unwrap(), (1.5, -2.0, 0.25));
    }

    #[test]
    fn reads_vector_and_trailing_angle() {
        let mut scanner = FieldScanner::new(".splineTo(newVector2d(10,20),-1.5)");
        scanner.seek("newVector2d(").unwrap();
        assert_eq!(scanner.vector().unwrap(), (10.0, 20.0));
        assert_eq!(scanner.trailing_angle().unwrap(), -1.5);
    }

    #[test]
    fn missing_marker_is_reported() {
        let mut scanner = FieldScanner::new(".splineTo(10,20)");
        let err = scanner.seek("newVector2d(").unwrap_err();
        assert!(matches!(err, ScanError::MissingMarker { .. }));
    }

    #[test]
    fn field_running_past_end_is_reported() {
        let mut scanner = FieldScanner::new("newVector2d(10,20");
        scanner.seek("newVector2d(").unwrap();
        let err = scanner.vector().unwrap_err();
        assert_eq!(
            err,
            ScanError::UnterminatedField {
                delimiter: ')',
                position: 15
            }
        );
    }

    #[test]
    fn non_numeric_field_is_reported() {
        let mut scanner = FieldScanner::new("newVector2d(abc,20)");
        scanner.seek("newVector2d(").unwrap();
        assert_eq!(
            scanner.vector().unwrap_err(),
            ScanError::InvalidNumber {
                text: "abc".to_string()
            }
        );
    }

    #[test]
    fn trailing_angle_requires_comma() {
        let mut scanner = FieldScanner::new("newVector2d(1,2)3)");
        scanner.seek("newVector2d(").unwrap();
        scanner.vector().unwrap();
        assert!(scanner.trailing_angle().is_err());
    }

    #[test]
    fn infinity_is_not_a_valid_field() {
        let mut scanner = FieldScanner::new("inf)");
        assert!(scanner.number_until(')').is_err());
    }
}
