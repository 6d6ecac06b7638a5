//! Where each label lands on which page
//!
//! The grid is centered on the page with equal margins. Placement is a pure
//! function of the label's index, so label 31 of a 3×10 sheet is always page
//! 1, row 0, column 1 no matter what was drawn before it.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

/// Cell origin and grid slot for one label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellPosition {
    /// Zero-based page index
    pub page: usize,
    pub row: usize,
    pub column: usize,
    /// Left edge of the cell, in points
    pub x: f32,
    /// Bottom edge of the cell, in points
    pub y: f32,
}

/// Page and grid measurements in points
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub cols: usize,
    pub rows: usize,
    pub cell_width: f32,
    pub cell_height: f32,
    pub hspace: f32,
    pub vspace: f32,
    pub margin_x: f32,
    pub margin_y: f32,
}

impl GridGeometry {
    /// Centers the configured grid on the configured page
    ///
    /// A grid larger than the page gets negative margins and simply hangs off
    /// the edges.
    pub fn new(config: &LayoutConfig) -> Self {
        let (page_width, page_height) = config.page.size();
        let cols = config.cols as usize;
        let rows = config.rows as usize;
        let cell_width = config.label_width();
        let cell_height = config.label_height();
        let hspace = config.hspace();
        let vspace = config.vspace();

        let total_width = cols as f32 * cell_width + cols.saturating_sub(1) as f32 * hspace;
        let total_height = rows as f32 * cell_height + rows.saturating_sub(1) as f32 * vspace;

        Self {
            page_width,
            page_height,
            cols,
            rows,
            cell_width,
            cell_height,
            hspace,
            vspace,
            margin_x: (page_width - total_width) / 2.0,
            margin_y: (page_height - total_height) / 2.0,
        }
    }

    pub fn cells_per_page(&self) -> usize {
        (self.cols * self.rows).max(1)
    }

    /// Slot of the `index`-th label (zero-based)
    pub fn position(&self, index: usize) -> CellPosition {
        let per_page = self.cells_per_page();
        let page = index / per_page;
        let slot = index % per_page;
        let row = slot / self.cols.max(1);
        let column = slot % self.cols.max(1);

        CellPosition {
            page,
            row,
            column,
            x: self.margin_x + column as f32 * (self.cell_width + self.hspace),
            y: self.page_height
                - self.margin_y
                - self.cell_height
                - row as f32 * (self.cell_height + self.vspace),
        }
    }

    /// Pages needed for `count` labels; an empty sheet still has one page
    pub fn page_count(&self, count: usize) -> usize {
        count.div_ceil(self.cells_per_page()).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageFormat;
    use proptest::prelude::*;

    fn geometry() -> GridGeometry {
        GridGeometry::new(&LayoutConfig::default())
    }

    #[test]
    fn test_grid_is_centered() {
        let grid = geometry();
        let total_width = 3.0 * grid.cell_width + 2.0 * grid.hspace;
        let total_height = 10.0 * grid.cell_height + 9.0 * grid.vspace;
        assert!((2.0 * grid.margin_x + total_width - 612.0).abs() < 1e-3);
        assert!((2.0 * grid.margin_y + total_height - 792.0).abs() < 1e-3);
    }

    #[test]
    fn test_first_cell_at_top_left() {
        let grid = geometry();
        let cell = grid.position(0);
        assert_eq!((cell.page, cell.row, cell.column), (0, 0, 0));
        assert!((cell.x - grid.margin_x).abs() < 1e-4);
        assert!((cell.y - (792.0 - grid.margin_y - grid.cell_height)).abs() < 1e-4);
    }

    #[test]
    fn test_row_advances_after_full_row() {
        let grid = geometry();
        let third = grid.position(2);
        let fourth = grid.position(3);
        assert_eq!((third.row, third.column), (0, 2));
        assert_eq!((fourth.row, fourth.column), (1, 0));
        assert!((fourth.x - grid.margin_x).abs() < 1e-4);
        assert!((grid.position(0).y - fourth.y - (grid.cell_height + grid.vspace)).abs() < 1e-3);
    }

    #[test]
    fn test_new_page_restarts_at_top_left() {
        let grid = geometry();
        let first = grid.position(0);
        let next_page = grid.position(30);
        assert_eq!(next_page.page, 1);
        assert_eq!((next_page.row, next_page.column), (0, 0));
        assert_eq!((next_page.x, next_page.y), (first.x, first.y));
    }

    #[test]
    fn test_page_count() {
        let grid = geometry();
        assert_eq!(grid.page_count(0), 1);
        assert_eq!(grid.page_count(1), 1);
        assert_eq!(grid.page_count(30), 1);
        assert_eq!(grid.page_count(31), 2);
        assert_eq!(grid.page_count(35), 2);
    }

    #[test]
    fn test_a4_margins() {
        let grid = GridGeometry::new(&LayoutConfig {
            page: PageFormat::A4,
            ..LayoutConfig::default()
        });
        assert!(grid.margin_x > 0.0);
        assert!((grid.page_height - 841.8898).abs() < 1e-2);
    }

    #[test]
    fn test_oversized_grid_gets_negative_margin() {
        let grid = GridGeometry::new(&LayoutConfig {
            cols: 10,
            ..LayoutConfig::default()
        });
        assert!(grid.margin_x < 0.0);
    }

    proptest! {
        #[test]
        fn prop_each_page_holds_cols_times_rows(cols in 1u32..6, rows in 1u32..12, count in 1usize..200) {
            let grid = GridGeometry::new(&LayoutConfig { cols, rows, ..LayoutConfig::default() });
            let per_page = (cols * rows) as usize;
            let pages = grid.page_count(count);
            prop_assert_eq!(pages, count.div_ceil(per_page));

            let mut per_page_counts = vec![0usize; pages];
            for index in 0..count {
                let cell = grid.position(index);
                prop_assert!(cell.row < rows as usize);
                prop_assert!(cell.column < cols as usize);
                per_page_counts[cell.page] += 1;
            }
            for full_page in &per_page_counts[..pages - 1] {
                prop_assert_eq!(*full_page, per_page);
            }
            prop_assert_eq!(per_page_counts[pages - 1], count - per_page * (pages - 1));
        }
    }
}
