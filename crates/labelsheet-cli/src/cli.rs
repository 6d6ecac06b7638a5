//! CLI argument definitions using Clap v4

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use labelsheet_core::{LayoutConfig, PageFormat};

/// Labelsheet - print a guest list onto sheets of adhesive labels
#[derive(Parser, Debug)]
#[command(name = "labelsheet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Text file with one name per line
    pub input: PathBuf,

    /// Where to write the sheet
    pub output: PathBuf,

    // Sheet geometry
    /// Paper size
    #[arg(long, value_enum, default_value_t = PageArg::Letter)]
    pub page: PageArg,

    /// Labels per row
    #[arg(long, default_value_t = 3)]
    pub cols: u32,

    /// Labels per column
    #[arg(long, default_value_t = 10)]
    pub rows: u32,

    /// Label width in millimetres
    #[arg(long = "label-width-mm", default_value_t = 51.0)]
    pub label_width_mm: f32,

    /// Label height in millimetres
    #[arg(long = "label-height-mm", default_value_t = 25.0)]
    pub label_height_mm: f32,

    /// Gap between columns in millimetres
    #[arg(long = "hspace-mm", default_value_t = 3.0)]
    pub hspace_mm: f32,

    /// Gap between rows in millimetres
    #[arg(long = "vspace-mm", default_value_t = 3.0)]
    pub vspace_mm: f32,

    // Text
    /// Font size in points
    #[arg(long = "font-size", default_value_t = 9.0)]
    pub font_size: f32,

    /// Smallest size long names may shrink to
    #[arg(long = "min-font-size", default_value_t = 8.0)]
    pub min_font_size: f32,

    /// TrueType font to embed instead of a system font
    #[arg(long = "font-path", env = "LABELSHEET_FONT")]
    pub font_path: Option<PathBuf>,

    // Output
    /// Do not outline the labels
    #[arg(long = "no-rect")]
    pub no_rect: bool,

    /// Draw a guide line under every baseline
    #[arg(long)]
    pub debug: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pdf)]
    pub format: OutputFormat,

    /// Print the run summary as JSON
    #[arg(long = "summary-json", conflicts_with = "quiet")]
    pub summary_json: bool,

    /// Suppress the run summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Layout settings taken from the arguments
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            page: self.page.into(),
            cols: self.cols,
            rows: self.rows,
            label_width_mm: self.label_width_mm,
            label_height_mm: self.label_height_mm,
            hspace_mm: self.hspace_mm,
            vspace_mm: self.vspace_mm,
            font_size: self.font_size,
            min_font_size: self.min_font_size,
            draw_rects: !self.no_rect,
            debug: self.debug,
            ..LayoutConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageArg {
    Letter,
    A4,
}

impl From<PageArg> for PageFormat {
    fn from(page: PageArg) -> Self {
        match page {
            PageArg::Letter => PageFormat::Letter,
            PageArg::A4 => PageFormat::A4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Printable PDF document
    Pdf,
    /// Draw commands as JSON
    Json,
}
