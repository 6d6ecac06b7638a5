//! Picking the font a sheet is printed in
//!
//! A user-supplied file wins. Without one, a short list of well-known system
//! locations is searched for a TrueType font with Latin accents, and when none
//! of them loads the sheet falls back to built-in Helvetica.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use labelsheet_core::{error::Result, traits::FontRef};

use crate::{builtin::BuiltinFont, Font};

/// Name a user-supplied font is registered under
pub const CUSTOM_FONT_NAME: &str = "CustomFont";

/// Source reported for the built-in fallback
pub const BUILTIN_SOURCE: &str = "built-in";

/// System fonts tried in order when no font file is given
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/local/share/fonts/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
];

/// The chosen font and where it came from
pub struct ResolvedFont {
    pub font: Arc<dyn FontRef>,
    /// File path, or [`BUILTIN_SOURCE`]
    pub source: String,
}

impl ResolvedFont {
    pub fn name(&self) -> &str {
        self.font.name()
    }

    pub fn is_builtin(&self) -> bool {
        self.source == BUILTIN_SOURCE
    }

    fn builtin() -> Self {
        Self {
            font: Arc::new(BuiltinFont::helvetica()),
            source: BUILTIN_SOURCE.to_string(),
        }
    }
}

impl fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("name", &self.name())
            .field("source", &self.source)
            .finish()
    }
}

/// Resolves against [`SYSTEM_FONT_CANDIDATES`]
pub fn resolve_font(user_path: Option<&Path>) -> Result<ResolvedFont> {
    resolve_font_from(user_path, SYSTEM_FONT_CANDIDATES)
}

/// Resolves a font, probing `candidates` when no usable user path is given
///
/// A user path that points at an existing file must load; a broken file is
/// an error. A user path that does not exist is ignored with a warning.
/// Candidates that are missing or fail to parse are skipped.
pub fn resolve_font_from<I, P>(user_path: Option<&Path>, candidates: I) -> Result<ResolvedFont>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    if let Some(path) = user_path {
        if path.is_file() {
            let font = Font::from_file(path)?.with_name(CUSTOM_FONT_NAME);
            log::info!("Using font file {}", path.display());
            return Ok(ResolvedFont {
                font: Arc::new(font),
                source: path.display().to_string(),
            });
        }
        log::warn!(
            "Font file {} not found, looking for a system font",
            path.display()
        );
    }

    for candidate in candidates {
        let candidate = candidate.as_ref();
        if !candidate.is_file() {
            continue;
        }
        match Font::from_file(candidate) {
            Ok(font) => {
                log::info!("Using system font {}", candidate.display());
                return Ok(ResolvedFont {
                    font: Arc::new(font),
                    source: candidate.display().to_string(),
                });
            },
            Err(e) => {
                log::debug!("Skipping {}: {}", candidate.display(), e);
            },
        }
    }

    log::info!("No TrueType font found, using built-in Helvetica");
    Ok(ResolvedFont::builtin())
}
