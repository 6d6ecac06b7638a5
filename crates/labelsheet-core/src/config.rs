//! Sheet geometry and typography settings
//!
//! Lengths are kept in millimetres, the way label stock is sold, and
//! converted to PDF points on the way out.

use serde::{Deserialize, Serialize};

use crate::error::{LabelError, Result};

/// Points per millimetre (72 pt per inch, 25.4 mm per inch)
pub const MM: f32 = 72.0 / 25.4;

/// Converts millimetres to points
pub fn mm(value: f32) -> f32 {
    value * MM
}

/// Paper sizes the sheet can be printed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    /// US Letter, 8.5 × 11 in
    #[default]
    Letter,
    /// ISO A4, 210 × 297 mm
    A4,
}

impl PageFormat {
    /// Width and height in points
    pub fn size(self) -> (f32, f32) {
        match self {
            Self::Letter => (612.0, 792.0),
            Self::A4 => (mm(210.0), mm(297.0)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::A4 => "A4",
        }
    }
}

/// Everything the layout engine needs to know about the sheet
///
/// Supplied once per run and never mutated. The font is deliberately not part
/// of it: the resolved font handle travels next to the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub page: PageFormat,
    pub cols: u32,
    pub rows: u32,
    pub label_width_mm: f32,
    pub label_height_mm: f32,
    pub hspace_mm: f32,
    pub vspace_mm: f32,
    /// Size text is set at when it fits
    pub font_size: f32,
    /// Floor for shrinking
    pub min_font_size: f32,
    /// Horizontal padding inside each cell, on both sides
    pub padding_mm: f32,
    pub draw_rects: bool,
    /// Draw a guide line under every baseline
    pub debug: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page: PageFormat::Letter,
            cols: 3,
            rows: 10,
            label_width_mm: 51.0,
            label_height_mm: 25.0,
            hspace_mm: 3.0,
            vspace_mm: 3.0,
            font_size: 9.0,
            min_font_size: 8.0,
            padding_mm: 2.0,
            draw_rects: true,
            debug: false,
        }
    }
}

impl LayoutConfig {
    /// Rejects geometry the grid cannot be built from
    pub fn validate(&self) -> Result<()> {
        if self.cols == 0 || self.rows == 0 {
            return Err(LabelError::ConfigError(format!(
                "grid must have at least one column and one row (got {}x{})",
                self.cols, self.rows
            )));
        }
        if !(self.label_width_mm > 0.0 && self.label_height_mm > 0.0) {
            return Err(LabelError::ConfigError(format!(
                "label size must be positive (got {}x{} mm)",
                self.label_width_mm, self.label_height_mm
            )));
        }
        if !(self.hspace_mm >= 0.0 && self.vspace_mm >= 0.0 && self.padding_mm >= 0.0) {
            return Err(LabelError::ConfigError(
                "spacing and padding cannot be negative".into(),
            ));
        }
        if !(self.min_font_size > 0.0 && self.min_font_size <= self.font_size) {
            return Err(LabelError::ConfigError(format!(
                "minimum font size must be positive and at most the base size (got {} > {})",
                self.min_font_size, self.font_size
            )));
        }
        Ok(())
    }

    pub fn label_width(&self) -> f32 {
        mm(self.label_width_mm)
    }

    pub fn label_height(&self) -> f32 {
        mm(self.label_height_mm)
    }

    pub fn hspace(&self) -> f32 {
        mm(self.hspace_mm)
    }

    pub fn vspace(&self) -> f32 {
        mm(self.vspace_mm)
    }

    pub fn padding(&self) -> f32 {
        mm(self.padding_mm)
    }

    /// Widest a line of text may be inside a cell
    pub fn max_text_width(&self) -> f32 {
        self.label_width() - 2.0 * self.padding()
    }
}
