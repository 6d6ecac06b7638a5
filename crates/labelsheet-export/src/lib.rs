//! Export module for Labelsheet
//!
//! Canvases the label sheet can be drawn onto:
//!
//! - [`PdfCanvas`] - the printable document
//! - [`JsonCanvas`] - every draw call as structured data, for inspection and
//!   regression tests

pub mod json;
pub mod pdf;

pub use json::{DrawOp, JsonCanvas, JsonDocument, JSON_SCHEMA_VERSION};
pub use pdf::PdfCanvas;
