//! Labelsheet Core: from a guest list to a sheet of labels
//!
//! Names go in as raw text lines and come out as draw calls on a grid sized
//! for commercial label stock.
//!
//! ## The Pipeline
//!
//! 1. **Normalization** - [`normalize`] cleans lines into display names
//! 2. **Fitting** - [`fit`] wraps each name onto at most two lines and shrinks
//!    the font until it fits the cell
//! 3. **Placement** - [`grid`] maps a label's index to its page and cell
//! 4. **Drawing** - [`sheet`] drives a [`Canvas`] with the results
//!
//! ## Lay Out Your First Sheet
//!
//! ```rust,no_run
//! use labelsheet_core::{normalize::normalize_names, LabelSheet, LayoutConfig};
//! # use labelsheet_core::traits::*;
//! # fn load_font() -> std::sync::Arc<dyn FontRef> { unimplemented!() }
//! # fn make_canvas() -> Box<dyn Canvas> { unimplemented!() }
//!
//! let config = LayoutConfig::default();
//! let names = normalize_names(["NOMBRE", "Ana García", "Luis Pérez"]);
//!
//! let font = load_font();
//! let mut canvas = make_canvas();
//! let summary = LabelSheet::new(&config)?.render(&names, &font, canvas.as_mut())?;
//! let bytes = canvas.finish()?;
//! # Ok::<(), labelsheet_core::LabelError>(())
//! ```

pub mod config;
pub mod error;
pub mod fit;
pub mod grid;
pub mod normalize;
pub mod sheet;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use config::{LayoutConfig, PageFormat};
pub use error::{LabelError, Result};
pub use fit::{fit_text, FittedText};
pub use grid::{CellPosition, GridGeometry};
pub use sheet::{LabelSheet, SheetSummary};
pub use traits::{Canvas, FontRef};

/// Shared primitive types
pub mod types {
    /// Unique identifier for a glyph within a font
    pub type GlyphId = u32;
}
