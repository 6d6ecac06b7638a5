//! The two seams of the label pipeline
//!
//! - [`FontRef`] - how wide is this text in this font at this size
//! - [`Canvas`] - where rectangles, lines and text end up
//!
//! The layout engine only talks to these traits, so the same sheet can be
//! laid out against a real TrueType face, the built-in Helvetica metrics or a
//! stub font in tests, and written to PDF or to a JSON trace.

use crate::{error::Result, types::GlyphId};
use std::sync::Arc;

/// Your window into font data and metrics
///
/// ```ignore
/// struct MyFont;
///
/// impl FontRef for MyFont {
///     fn name(&self) -> &str {
///         "MyFont"
///     }
///
///     fn data(&self) -> &[u8] {
///         &[]
///     }
///
///     fn units_per_em(&self) -> u16 {
///         1000
///     }
///
///     fn glyph_id(&self, ch: char) -> Option<GlyphId> {
///         Some(ch as u32)
///     }
///
///     fn advance_width(&self, _glyph_id: GlyphId) -> f32 {
///         500.0
///     }
/// }
/// ```
pub trait FontRef: Send + Sync {
    /// Name the font is registered under in the output document
    fn name(&self) -> &str;

    /// Raw font bytes as they live in the file
    ///
    /// Empty for fonts the output format provides itself (the PDF standard
    /// 14 fonts).
    fn data(&self) -> &[u8];

    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Find the glyph that represents this character
    ///
    /// Returns None when the font doesn't contain this character.
    fn glyph_id(&self, ch: char) -> Option<GlyphId>;

    /// How wide this glyph stands, in font units
    fn advance_width(&self, glyph_id: GlyphId) -> f32;

    /// Width of `text` set at `size` points
    ///
    /// Characters missing from the font are measured as glyph 0.
    fn text_width(&self, text: &str, size: f32) -> f32 {
        let upem = f32::from(self.units_per_em().max(1));
        let units: f32 = text
            .chars()
            .map(|ch| self.advance_width(self.glyph_id(ch).unwrap_or(0)))
            .sum();
        units / upem * size
    }
}

/// A paginated drawing surface
///
/// Coordinates are PDF user space: points, origin at the bottom-left corner
/// of the page, y growing upward. A fresh canvas has its first page open.
pub trait Canvas {
    /// Who are you?
    fn name(&self) -> &'static str;

    /// Stroke the outline of a rectangle whose bottom-left corner is `(x, y)`
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<()>;

    /// Stroke a straight line
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<()>;

    /// Set `text` with its baseline starting at `(x, y)`
    fn draw_text(
        &mut self,
        font: &Arc<dyn FontRef>,
        size: f32,
        x: f32,
        y: f32,
        text: &str,
    ) -> Result<()>;

    /// Close the current page and open the next one
    fn new_page(&mut self) -> Result<()>;

    /// Encode everything drawn so far as bytes
    fn finish(&mut self) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;
}
