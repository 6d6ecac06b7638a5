//! JSON export format
//!
//! Records every draw call instead of rendering it. Handy for checking what
//! the layout engine decided (which line breaks, which sizes, which page)
//! without opening a PDF.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use labelsheet_core::{
    error::{ExportError, Result},
    traits::{Canvas, FontRef},
    LayoutConfig,
};

/// Schema version for JSON output format
pub const JSON_SCHEMA_VERSION: &str = "1.0";

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    Text {
        font: String,
        size: f32,
        x: f32,
        y: f32,
        text: String,
    },
}

/// Draw calls of a single page, in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonPage {
    pub ops: Vec<DrawOp>,
}

impl JsonPage {
    /// Text runs on this page
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rect_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { .. }))
            .count()
    }
}

/// The whole recorded document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonDocument {
    pub schema_version: String,
    pub page_width: f32,
    pub page_height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<LayoutConfig>,
    pub pages: Vec<JsonPage>,
}

/// Canvas that writes draw calls as JSON
///
/// # Examples
///
/// ```ignore
/// use labelsheet_export::JsonCanvas;
///
/// let mut canvas = JsonCanvas::new(612.0, 792.0).with_pretty_print();
/// sheet.render(&names, &font, &mut canvas)?;
/// println!("{}", String::from_utf8_lossy(&canvas.finish()?));
/// ```
pub struct JsonCanvas {
    /// Whether to pretty-print the JSON
    pretty: bool,
    document: JsonDocument,
}

impl JsonCanvas {
    /// Create a canvas with one empty page
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            pretty: false,
            document: JsonDocument {
                schema_version: JSON_SCHEMA_VERSION.to_string(),
                page_width,
                page_height,
                config: None,
                pages: vec![JsonPage::default()],
            },
        }
    }

    /// Enable pretty-printing
    pub fn with_pretty_print(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Record the layout settings alongside the draw calls
    pub fn with_config(mut self, config: &LayoutConfig) -> Self {
        self.document.config = Some(config.clone());
        self
    }

    pub fn document(&self) -> &JsonDocument {
        &self.document
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.document.pages.last_mut() {
            page.ops.push(op);
        }
    }
}

impl Canvas for JsonCanvas {
    fn name(&self) -> &'static str {
        "json"
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        self.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<()> {
        self.push(DrawOp::Line { x1, y1, x2, y2 });
        Ok(())
    }

    fn draw_text(
        &mut self,
        font: &Arc<dyn FontRef>,
        size: f32,
        x: f32,
        y: f32,
        text: &str,
    ) -> Result<()> {
        self.push(DrawOp::Text {
            font: font.name().to_string(),
            size,
            x,
            y,
            text: text.to_string(),
        });
        Ok(())
    }

    fn new_page(&mut self) -> Result<()> {
        self.document.pages.push(JsonPage::default());
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        let json = if self.pretty {
            serde_json::to_string_pretty(&self.document)
        } else {
            serde_json::to_string(&self.document)
        }
        .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;

        Ok(json.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
