//! Zentrale Konfiguration für den Path Drawer.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{FieldTransform, SegmentKind};
use serde::{Deserialize, Serialize};

// ── Feld ────────────────────────────────────────────────────────────

/// Kantenlänge des quadratischen Feldes in Zoll.
pub const FIELD_SIZE_INCHES: f64 = 144.0;
/// Kantenlänge der quadratischen Zeichenfläche in Pixeln.
pub const CANVAS_SIZE_PX: f64 = 800.0;

// ── Tools ───────────────────────────────────────────────────────────

/// Pick-Radius (Display-Pixel) für Knoten und Segmente.
pub const PICK_RADIUS_PX: f64 = 20.0;
/// Abtastpunkte pro Segment für Vorschau und Hit-Test.
pub const LINE_DETAIL: usize = 40;

// ── Code ────────────────────────────────────────────────────────────

/// Maximale Nachkommastellen im Code-Text.
pub const CODE_PRECISION: usize = 4;
/// Maximale Tiefe der Undo/Redo-Stacks.
pub const HISTORY_MAX_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `path_drawer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Feld ────────────────────────────────────────────────────
    /// Feldgröße in Zoll
    pub field_size: f64,
    /// Größe der Zeichenfläche in Pixeln
    pub canvas_size: f64,

    // ── Tools ───────────────────────────────────────────────────
    /// Pick-Radius in Display-Pixeln
    pub pick_radius: f64,
    /// Abtastpunkte pro Segment
    pub line_detail: usize,
    /// Segmentart für neu gezeichnete Segmente
    pub default_kind: SegmentKind,

    // ── Code ────────────────────────────────────────────────────
    /// Nachkommastellen im Code-Text
    pub code_precision: usize,
    /// Maximale History-Tiefe
    pub history_max_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            field_size: FIELD_SIZE_INCHES,
            canvas_size: CANVAS_SIZE_PX,

            pick_radius: PICK_RADIUS_PX,
            line_detail: LINE_DETAIL,
            default_kind: SegmentKind::default(),

            code_precision: CODE_PRECISION,
            history_max_depth: HISTORY_MAX_DEPTH,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("path-drawer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("path_drawer.toml")
    }

    /// Koordinaten-Transformation für Feld- und Flächengröße.
    pub fn transform(&self) -> FieldTransform {
        FieldTransform::for_canvas(self.field_size, self.canvas_size)
    }
}
