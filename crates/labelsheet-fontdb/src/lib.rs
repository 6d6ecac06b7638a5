//! Where fonts come from: loading, metrics and discovery for Labelsheet
//!
//! Three ways to get a font onto the sheet:
//!
//! - [`Font`] - a TrueType/OpenType file parsed with `read-fonts`, embedded
//!   into the output
//! - [`BuiltinFont`] - Helvetica, which every PDF viewer already has, measured
//!   from its published metrics
//! - [`resolve_font`] - the policy that picks between them
//!
//! ## Memory Management
//!
//! Fonts store their raw data and create `FontRef` on-demand for parsing.
//! Only the first face of a file is used: the PDF embeds the whole file as
//! one TrueType program, which a collection is not.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use read_fonts::{FontRef as ReadFontRef, TableProvider};

use labelsheet_core::{
    error::{FontLoadError, Result},
    traits::FontRef,
    types::GlyphId,
};

pub mod builtin;
pub mod resolve;

pub use builtin::BuiltinFont;
pub use resolve::{resolve_font, resolve_font_from, ResolvedFont, SYSTEM_FONT_CANDIDATES};

/// Vertical metrics a PDF font descriptor needs, scaled to 1000 units per em
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub cap_height: f32,
    pub bbox: [f32; 4],
}

/// A font that's been read into memory, ready to measure and embed
pub struct Font {
    name: String,
    data: Vec<u8>,
    units_per_em: u16,
}

impl Font {
    /// Opens a font file from disk, named after the file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => FontLoadError::FileNotFound(path.display().to_string()),
            _ => FontLoadError::Unreadable {
                path: path.display().to_string(),
                source,
            },
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Font".to_string());

        Self::from_data(data, &name)
    }

    /// Turns raw font bytes into something we can work with
    pub fn from_data(data: Vec<u8>, name: &str) -> Result<Self> {
        let font_ref = ReadFontRef::new(&data).map_err(|_| FontLoadError::InvalidData)?;

        // Measuring needs both tables; fail now rather than print zero-width text
        if font_ref.cmap().is_err() || font_ref.hmtx().is_err() {
            return Err(FontLoadError::NotSupported(format!(
                "{name} has no cmap or hmtx table"
            ))
            .into());
        }

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        Ok(Font {
            name: pdf_safe_name(name),
            data,
            units_per_em,
        })
    }

    /// Registers the font under a different name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = pdf_safe_name(name);
        self
    }

    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::new(&self.data).ok()
    }

    /// Descriptor metrics, falling back to typical Latin proportions
    pub fn metrics(&self) -> FontMetrics {
        let scale = 1000.0 / f32::from(self.units_per_em.max(1));
        let fallback = FontMetrics {
            ascent: 800.0,
            descent: -200.0,
            cap_height: 700.0,
            bbox: [0.0, -200.0, 1000.0, 800.0],
        };
        let Some(font) = self.font_ref() else {
            return fallback;
        };

        let bbox = font
            .head()
            .map(|head| {
                [
                    f32::from(head.x_min()) * scale,
                    f32::from(head.y_min()) * scale,
                    f32::from(head.x_max()) * scale,
                    f32::from(head.y_max()) * scale,
                ]
            })
            .unwrap_or(fallback.bbox);
        let (ascent, descent) = font
            .hhea()
            .map(|hhea| {
                (
                    f32::from(hhea.ascender().to_i16()) * scale,
                    f32::from(hhea.descender().to_i16()) * scale,
                )
            })
            .unwrap_or((fallback.ascent, fallback.descent));
        let cap_height = font
            .os2()
            .ok()
            .and_then(|os2| os2.s_cap_height())
            .map(|cap| f32::from(cap) * scale)
            .unwrap_or(ascent);

        FontMetrics {
            ascent,
            descent,
            cap_height,
            bbox,
        }
    }

    /// Counts how many different glyphs this font contains
    pub fn glyph_count(&self) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.maxp().ok().map(|maxp| u32::from(maxp.num_glyphs())))
    }
}

impl FontRef for Font {
    fn name(&self) -> &str {
        &self.name
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
    }

    fn advance_width(&self, glyph_id: GlyphId) -> f32 {
        self.font_ref()
            .and_then(|font| {
                use read_fonts::types::GlyphId as ReadGlyphId;
                let advance = font.hmtx().ok()?.advance(ReadGlyphId::new(glyph_id))?;
                Some(f32::from(advance))
            })
            .unwrap_or(0.0)
    }
}

/// PDF names cannot carry spaces or delimiters
fn pdf_safe_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '+'))
        .collect();
    if cleaned.is_empty() {
        "Font".to_string()
    } else {
        cleaned
    }
}
