//! Single-page PDF backend for [`DrawPlan`]s.
//!
//! Text uses the non-embedded Japanese CID font `HeiseiKakuGo-W5`, which conforming readers
//! substitute with a local Gothic face. Strings are written as UTF-16BE through the predefined
//! `UniJIS-UTF16-H` CMap, so no font program is shipped with the document.

use pdf_writer::types::{CidFontType, FontFlags, SystemInfo};
use pdf_writer::{Content, Name, Pdf, Rect as PdfRect, Ref, Str, TextStr};

use crate::foundation::core::Rgb;
use crate::foundation::error::{FormError, FormResult};
use crate::render::plan::{DrawOp, DrawPlan, Stroke};

const FONT_NAME: Name<'static> = Name(b"F1");
const CID_FONT: Name<'static> = Name(b"HeiseiKakuGo-W5");
const TYPE0_FONT: Name<'static> = Name(b"HeiseiKakuGo-W5-UniJIS-UTF16-H");
const ENCODING: Name<'static> = Name(b"UniJIS-UTF16-H");

/// Document-level metadata written into the PDF info dictionary.
#[derive(Clone, Debug)]
pub struct PdfBackendOpts {
    pub title: String,
    pub producer: String,
}

impl Default for PdfBackendOpts {
    fn default() -> Self {
        Self {
            title: String::new(),
            producer: concat!("hygiene-form ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PdfBackend {
    opts: PdfBackendOpts,
}

impl PdfBackend {
    pub fn new(opts: PdfBackendOpts) -> Self {
        Self { opts }
    }

    /// Serialize `plan` into a complete single-page PDF file.
    #[tracing::instrument(skip_all, fields(ops = plan.ops.len()))]
    pub fn render(&self, plan: &DrawPlan) -> FormResult<Vec<u8>> {
        validate_plan(plan)?;

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let page_id = Ref::new(3);
        let content_id = Ref::new(4);
        let font_id = Ref::new(5);
        let cid_font_id = Ref::new(6);
        let descriptor_id = Ref::new(7);
        let info_id = Ref::new(8);

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id).kids([page_id]).count(1);

        {
            let mut page = pdf.page(page_id);
            page.media_box(PdfRect::new(
                0.0,
                0.0,
                plan.page.width as f32,
                plan.page.height as f32,
            ))
            .parent(pages_id)
            .contents(content_id);
            page.resources().fonts().pair(FONT_NAME, font_id);
        }

        write_font(&mut pdf, font_id, cid_font_id, descriptor_id);

        let content = encode_content(plan);
        pdf.stream(content_id, &content);

        {
            let mut info = pdf.document_info(info_id);
            if !self.opts.title.is_empty() {
                info.title(TextStr(&self.opts.title));
            }
            info.producer(TextStr(&self.opts.producer));
        }

        let bytes = pdf.finish();
        tracing::debug!(bytes = bytes.len(), "pdf serialized");
        Ok(bytes)
    }
}

fn validate_plan(plan: &DrawPlan) -> FormResult<()> {
    if !(plan.page.width.is_finite() && plan.page.height.is_finite())
        || plan.page.width <= 0.0
        || plan.page.height <= 0.0
    {
        return Err(FormError::render(format!(
            "invalid page size {}x{}",
            plan.page.width, plan.page.height
        )));
    }
    for (i, op) in plan.ops.iter().enumerate() {
        let finite = match op {
            DrawOp::Text { origin, size, .. } => origin.is_finite() && size.is_finite(),
            DrawOp::Line { line, stroke } => line.is_finite() && stroke.width.is_finite(),
            DrawOp::Rect { rect, stroke, .. } => {
                rect.is_finite() && stroke.is_none_or(|s| s.width.is_finite())
            }
        };
        if !finite {
            return Err(FormError::render(format!(
                "draw op {i} has a non-finite coordinate"
            )));
        }
    }
    Ok(())
}

fn write_font(pdf: &mut Pdf, font_id: Ref, cid_font_id: Ref, descriptor_id: Ref) {
    pdf.type0_font(font_id)
        .base_font(TYPE0_FONT)
        .encoding_predefined(ENCODING)
        .descendant_font(cid_font_id);

    {
        let mut cid = pdf.cid_font(cid_font_id);
        cid.subtype(CidFontType::Type0)
            .base_font(CID_FONT)
            .system_info(SystemInfo {
                registry: Str(b"Adobe"),
                ordering: Str(b"Japan1"),
                supplement: 6,
            })
            .font_descriptor(descriptor_id)
            .default_width(1000.0);
        // Proportional and half-width Roman ranges of Adobe-Japan1; must agree with
        // `render::metrics`.
        cid.widths().same(1, 95, 500.0).same(231, 632, 500.0);
    }

    pdf.font_descriptor(descriptor_id)
        .name(CID_FONT)
        .flags(FontFlags::SYMBOLIC)
        .bbox(PdfRect::new(-92.0, -250.0, 1010.0, 922.0))
        .italic_angle(0.0)
        .ascent(752.0)
        .descent(-221.0)
        .cap_height(737.0)
        .stem_v(114.0);
}

fn encode_content(plan: &DrawPlan) -> Vec<u8> {
    let mut content = Content::new();
    for op in &plan.ops {
        match op {
            DrawOp::Text { origin, size, text } => {
                let bytes = encode_utf16be(text);
                content
                    .save_state()
                    .set_fill_rgb(0.0, 0.0, 0.0)
                    .begin_text()
                    .set_font(FONT_NAME, *size as f32)
                    .next_line(origin.x as f32, origin.y as f32)
                    .show(Str(&bytes))
                    .end_text()
                    .restore_state();
            }
            DrawOp::Line { line, stroke } => {
                content.save_state();
                apply_stroke(&mut content, *stroke);
                content
                    .move_to(line.p0.x as f32, line.p0.y as f32)
                    .line_to(line.p1.x as f32, line.p1.y as f32)
                    .stroke()
                    .restore_state();
            }
            DrawOp::Rect { rect, fill, stroke } => {
                if fill.is_none() && stroke.is_none() {
                    continue;
                }
                content.save_state();
                if let Some(Rgb { r, g, b }) = fill {
                    content.set_fill_rgb(*r, *g, *b);
                }
                if let Some(s) = stroke {
                    apply_stroke(&mut content, *s);
                }
                content.rect(
                    rect.x0 as f32,
                    rect.y0 as f32,
                    rect.width() as f32,
                    rect.height() as f32,
                );
                match (fill.is_some(), stroke.is_some()) {
                    (true, true) => content.fill_nonzero_and_stroke(),
                    (true, false) => content.fill_nonzero(),
                    _ => content.stroke(),
                };
                content.restore_state();
            }
        }
    }
    content.finish()
}

fn apply_stroke(content: &mut Content, stroke: Stroke) {
    let Rgb { r, g, b } = stroke.color;
    content
        .set_stroke_rgb(r, g, b)
        .set_line_width(stroke.width as f32);
}

fn encode_utf16be(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/pdf.rs"]
mod tests;
