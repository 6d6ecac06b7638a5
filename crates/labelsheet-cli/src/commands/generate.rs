//! Generate command: names file in, label sheet out

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use labelsheet_core::{
    normalize::normalize_names, traits::Canvas, LabelError, LabelSheet, LayoutConfig,
    SheetSummary,
};
use labelsheet_export::{JsonCanvas, PdfCanvas};
use labelsheet_fontdb::resolve_font;

use crate::cli::{Cli, OutputFormat};

/// What a run did, printed after the file is written
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub page: &'static str,
    pub cols: u32,
    pub rows: u32,
    pub label_width_mm: f32,
    pub label_height_mm: f32,
    pub hspace_mm: f32,
    pub vspace_mm: f32,
    pub font: String,
    pub font_source: String,
    pub font_size: f32,
    pub min_font_size: f32,
    pub names: usize,
    pub pages: usize,
    pub output: String,
}

impl RunSummary {
    fn new(
        config: &LayoutConfig,
        font: &str,
        font_source: &str,
        sheet: SheetSummary,
        output: &Path,
    ) -> Self {
        Self {
            page: config.page.as_str(),
            cols: config.cols,
            rows: config.rows,
            label_width_mm: config.label_width_mm,
            label_height_mm: config.label_height_mm,
            hspace_mm: config.hspace_mm,
            vspace_mm: config.vspace_mm,
            font: font.to_string(),
            font_source: font_source.to_string(),
            font_size: config.font_size,
            min_font_size: config.min_font_size,
            names: sheet.names,
            pages: sheet.pages,
            output: output.display().to_string(),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Page:     {}", self.page)?;
        writeln!(f, "Grid:     {} x {}", self.cols, self.rows)?;
        writeln!(
            f,
            "Label:    {} x {} mm",
            self.label_width_mm, self.label_height_mm
        )?;
        writeln!(
            f,
            "Spacing:  {} mm horizontal, {} mm vertical",
            self.hspace_mm, self.vspace_mm
        )?;
        writeln!(
            f,
            "Font:     {} ({}), {} pt, min {} pt",
            self.font, self.font_source, self.font_size, self.min_font_size
        )?;
        writeln!(f, "Names:    {}", self.names)?;
        writeln!(f, "Pages:    {}", self.pages)?;
        write!(f, "Output:   {}", self.output)
    }
}

/// Reads the names, lays them out and writes the output file
pub fn run(args: &Cli) -> Result<RunSummary> {
    let config = args.layout_config();
    let sheet = LabelSheet::new(&config)?;

    let text = fs::read_to_string(&args.input).map_err(|source| LabelError::Input {
        path: args.input.display().to_string(),
        source,
    })?;
    let names = normalize_names(text.lines());
    log::info!("Read {} name(s) from {}", names.len(), args.input.display());

    let resolved = resolve_font(args.font_path.as_deref())?;

    let (width, height) = config.page.size();
    let mut canvas: Box<dyn Canvas> = match args.format {
        OutputFormat::Pdf => Box::new(PdfCanvas::new(width, height).with_title(
            args.input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Labels".to_string()),
        )),
        OutputFormat::Json => Box::new(
            JsonCanvas::new(width, height)
                .with_pretty_print()
                .with_config(&config),
        ),
    };

    let sheet_summary = sheet.render(&names, &resolved.font, canvas.as_mut())?;
    let bytes = canvas.finish()?;

    fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!(
        "Wrote {} bytes of {} to {}",
        bytes.len(),
        canvas.extension(),
        args.output.display()
    );

    Ok(RunSummary::new(
        &config,
        resolved.name(),
        &resolved.source,
        sheet_summary,
        &args.output,
    ))
}
