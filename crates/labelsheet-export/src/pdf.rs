//! PDF export
//!
//! Draw calls go straight into a `pdf-writer` content stream. Finished pages
//! are deflated and kept until [`Canvas::finish`] assembles the document.
//!
//! Fonts without data are written as the standard Helvetica Type1 font in
//! WinAnsi encoding. Fonts with data are embedded whole as a Type0 /
//! CIDFontType2 font with Identity-H encoding, so each character is written
//! as its two-byte glyph id.

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::types::{CidFontType, FontFlags, SystemInfo, UnicodeCmap};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use labelsheet_core::{
    error::{ExportError, Result},
    traits::{Canvas, FontRef},
};
use labelsheet_fontdb::{builtin, Font};

/// Gray level of the `--debug` baseline guides
const GUIDE_GRAY: f32 = 0.6;

fn system_info() -> SystemInfo<'static> {
    SystemInfo {
        registry: Str(b"Adobe"),
        ordering: Str(b"Identity"),
        supplement: 0,
    }
}

/// A font used somewhere in the document
struct FontSlot {
    /// Resource name inside the page dictionaries (`F1`, `F2`, ...)
    resource: String,
    font: Arc<dyn FontRef>,
    /// Glyphs drawn with an embedded font and the character each came from
    used: BTreeMap<u16, char>,
}

impl FontSlot {
    fn is_builtin(&self) -> bool {
        self.font.data().is_empty()
    }

    /// Bytes for a `Tj` operator in this font's encoding
    fn encode(&mut self, text: &str) -> Vec<u8> {
        if self.is_builtin() {
            return builtin::encode_winansi(text);
        }

        let mut bytes = Vec::with_capacity(text.len() * 2);
        for ch in text.chars() {
            let gid = self
                .font
                .glyph_id(ch)
                .and_then(|gid| u16::try_from(gid).ok())
                .unwrap_or(0);
            self.used.entry(gid).or_insert(ch);
            bytes.extend_from_slice(&gid.to_be_bytes());
        }
        bytes
    }
}

/// Canvas producing a PDF document
pub struct PdfCanvas {
    page_width: f32,
    page_height: f32,
    title: Option<String>,
    /// Deflated content streams of completed pages
    pages: Vec<Vec<u8>>,
    current: Content,
    fonts: Vec<FontSlot>,
}

impl PdfCanvas {
    /// Create a canvas with its first page open
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            page_width,
            page_height,
            title: None,
            pages: Vec::new(),
            current: Content::new(),
            fonts: Vec::new(),
        }
    }

    /// Set the document title shown by viewers
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Pages so far, counting the open one
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    fn font_slot(&mut self, font: &Arc<dyn FontRef>) -> &mut FontSlot {
        let index = match self.fonts.iter().position(|slot| slot.font.name() == font.name()) {
            Some(index) => index,
            None => {
                let resource = format!("F{}", self.fonts.len() + 1);
                log::debug!("Registering font {} as /{}", font.name(), resource);
                self.fonts.push(FontSlot {
                    resource,
                    font: Arc::clone(font),
                    used: BTreeMap::new(),
                });
                self.fonts.len() - 1
            },
        };
        &mut self.fonts[index]
    }

    fn close_page(&mut self) -> Result<()> {
        let content = std::mem::replace(&mut self.current, Content::new());
        let raw = content.finish();
        self.pages.push(deflate(&raw)?);
        Ok(())
    }
}

impl Canvas for PdfCanvas {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        self.current.rect(x, y, width, height).stroke();
        Ok(())
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<()> {
        self.current
            .save_state()
            .set_stroke_gray(GUIDE_GRAY)
            .set_line_width(0.5)
            .move_to(x1, y1)
            .line_to(x2, y2)
            .stroke()
            .restore_state();
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
        let slot = self.font_slot(font);
        let bytes = slot.encode(text);
        let resource = slot.resource.clone();

        self.current
            .begin_text()
            .set_font(Name(resource.as_bytes()), size)
            .next_line(x, y)
            .show(Str(&bytes))
            .end_text();
        Ok(())
    }

    fn new_page(&mut self) -> Result<()> {
        self.close_page()
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        self.close_page()?;
        let pages = std::mem::take(&mut self.pages);

        let mut next_id = 1;
        let mut alloc = || {
            let id = Ref::new(next_id);
            next_id += 1;
            id
        };

        let mut pdf = Pdf::new();
        let catalog_id = alloc();
        let pages_id = alloc();
        let info_id = alloc();

        let font_refs: Vec<(String, Ref)> = self
            .fonts
            .iter()
            .map(|slot| -> Result<(String, Ref)> {
                let id = write_font(&mut pdf, slot, &mut alloc)?;
                Ok((slot.resource.clone(), id))
            })
            .collect::<Result<_>>()?;

        let page_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        for ((page_id, content_id), stream) in page_ids.iter().zip(&content_ids).zip(&pages) {
            let mut page = pdf.page(*page_id);
            page.media_box(Rect::new(0.0, 0.0, self.page_width, self.page_height))
                .parent(pages_id)
                .contents(*content_id);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (name, font_id) in &font_refs {
                fonts.pair(Name(name.as_bytes()), *font_id);
            }
            fonts.finish();
            resources.finish();
            page.finish();

            pdf.stream(*content_id, stream).filter(Filter::FlateDecode);
        }

        let mut info = pdf.document_info(info_id);
        info.producer(TextStr(concat!("labelsheet ", env!("CARGO_PKG_VERSION"))));
        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        info.finish();

        log::debug!(
            "Wrote PDF with {} page(s) and {} font(s)",
            page_ids.len(),
            font_refs.len()
        );
        Ok(pdf.finish())
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }
}

/// Writes the font objects for one slot, returning the font dictionary ref
fn write_font(pdf: &mut Pdf, slot: &FontSlot, alloc: &mut impl FnMut() -> Ref) -> Result<Ref> {
    let font_id = alloc();

    if slot.is_builtin() {
        pdf.type1_font(font_id)
            .base_font(Name(builtin::HELVETICA.as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        return Ok(font_id);
    }

    let cid_id = alloc();
    let descriptor_id = alloc();
    let file_id = alloc();
    let cmap_id = alloc();

    let name = slot.font.name();
    let base_font = Name(name.as_bytes());
    let data = slot.font.data();

    // The descriptor wants real vertical metrics; reparse the face for them
    let metrics = Font::from_data(data.to_vec(), name)?.metrics();
    let scale = 1000.0 / f32::from(slot.font.units_per_em().max(1));

    pdf.type0_font(font_id)
        .base_font(base_font)
        .encoding_predefined(Name(b"Identity-H"))
        .descendant_font(cid_id)
        .to_unicode(cmap_id);

    let mut cid = pdf.cid_font(cid_id);
    cid.subtype(CidFontType::Type2)
        .base_font(base_font)
        .system_info(system_info())
        .font_descriptor(descriptor_id)
        .cid_to_gid_map_predefined(Name(b"Identity"));
    {
        let mut widths = cid.widths();
        for &gid in slot.used.keys() {
            let advance = slot.font.advance_width(u32::from(gid)) * scale;
            widths.consecutive(gid, [advance]);
        }
    }
    cid.finish();

    let [x_min, y_min, x_max, y_max] = metrics.bbox;
    pdf.font_descriptor(descriptor_id)
        .name(base_font)
        .flags(FontFlags::NON_SYMBOLIC)
        .bbox(Rect::new(x_min, y_min, x_max, y_max))
        .italic_angle(0.0)
        .ascent(metrics.ascent)
        .descent(metrics.descent)
        .cap_height(metrics.cap_height)
        .stem_v(80.0)
        .font_file2(file_id);

    let compressed = deflate(data)?;
    pdf.stream(file_id, &compressed)
        .filter(Filter::FlateDecode)
        .pair(Name(b"Length1"), data.len() as i32);

    let mut cmap: UnicodeCmap = UnicodeCmap::new(Name(b"Custom"), system_info());
    for (&gid, &ch) in &slot.used {
        cmap.pair(gid, ch);
    }
    pdf.cmap(cmap_id, &cmap.finish());

    Ok(font_id)
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    let compressed = encoder
        .finish()
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    Ok(compressed)
}
