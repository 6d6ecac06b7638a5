//! The label sheet: names in, draw calls out
//!
//! For every name the sheet looks up its cell, strokes the cell outline,
//! fits the text and centers the resulting one or two lines inside the cell.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    config::LayoutConfig,
    error::Result,
    fit::{fit_text, FittedText},
    grid::{CellPosition, GridGeometry},
    traits::{Canvas, FontRef},
};

/// What a finished run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSummary {
    pub names: usize,
    pub pages: usize,
    pub cells_per_page: usize,
}

/// Lays names out on a grid and draws them onto a [`Canvas`]
pub struct LabelSheet<'a> {
    config: &'a LayoutConfig,
    geometry: GridGeometry,
}

impl<'a> LabelSheet<'a> {
    /// Validates the config and precomputes the grid
    pub fn new(config: &'a LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            geometry: GridGeometry::new(config),
        })
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Fits a single name into the usable width of a cell
    pub fn fit(&self, name: &str, font: &dyn FontRef) -> FittedText {
        fit_text(
            name,
            font,
            self.config.font_size,
            self.config.min_font_size,
            self.config.max_text_width(),
        )
    }

    /// Draws every name, adding pages as the grid fills up
    pub fn render(
        &self,
        names: &[String],
        font: &Arc<dyn FontRef>,
        canvas: &mut dyn Canvas,
    ) -> Result<SheetSummary> {
        let per_page = self.geometry.cells_per_page();

        for (index, name) in names.iter().enumerate() {
            if index > 0 && index % per_page == 0 {
                canvas.new_page()?;
            }
            let cell = self.geometry.position(index);
            self.draw_label(name, &cell, font, canvas)?;
        }

        let summary = SheetSummary {
            names: names.len(),
            pages: self.geometry.page_count(names.len()),
            cells_per_page: per_page,
        };
        log::info!(
            "Laid out {} labels on {} page(s) via {}",
            summary.names,
            summary.pages,
            canvas.name()
        );
        Ok(summary)
    }

    fn draw_label(
        &self,
        name: &str,
        cell: &CellPosition,
        font: &Arc<dyn FontRef>,
        canvas: &mut dyn Canvas,
    ) -> Result<()> {
        let width = self.geometry.cell_width;
        let height = self.geometry.cell_height;

        if self.config.draw_rects {
            canvas.draw_rect(cell.x, cell.y, width, height)?;
        }

        if name.is_empty() {
            return Ok(());
        }

        let fitted = self.fit(name, font.as_ref());
        log::debug!(
            "page {} row {} col {}: {:?} at {:.1} pt",
            cell.page,
            cell.row,
            cell.column,
            fitted.lines,
            fitted.size
        );

        let line_height = fitted.line_height();
        let start_y = cell.y + (height - fitted.block_height()) / 2.0;
        let count = fitted.lines.len();

        for (index, line) in fitted.lines.iter().enumerate() {
            let baseline = start_y + (count - index - 1) as f32 * line_height;
            if !line.is_empty() {
                let line_width = font.text_width(line, fitted.size);
                let x = cell.x + (width - line_width) / 2.0;
                canvas.draw_text(font, fitted.size, x, baseline, line)?;
            }
            if self.config.debug {
                let padding = self.config.padding();
                canvas.draw_line(cell.x + padding, baseline, cell.x + width - padding, baseline)?;
            }
        }

        Ok(())
    }
}
