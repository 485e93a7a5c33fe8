use std::collections::HashMap;

use crate::effects::blur::stack_blur_rgba8;
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{TitleError, TitleResult};
use crate::foundation::math::{add_sat_u8, mul_div255_u8};
use crate::render::surface::{
    Baseline, FamilyToken, FrameRGBA, Surface, TextAlign, TextStyle,
};

/// Layout brush placeholder. Paint color is applied per raster layer
/// (the glow and ink passes reuse one shaped layout with different
/// colors), so the brush carries no data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrush;

/// CPU raster surface backed by `vello_cpu` for vector/text
/// rasterization and `parley` for shaping and measurement.
///
/// The canvas is a premultiplied RGBA8 byte buffer. `vello_cpu` renders
/// into a fresh buffer, so each primitive rasterizes into a scratch
/// pixmap and is then premul-over composited onto the canvas.
pub struct CpuSurface {
    width: u32,
    height: u32,
    buf: Vec<u8>,
    ctx: Option<vello_cpu::RenderContext>,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    font_cache: HashMap<(u64, u32), vello_cpu::peniko::FontData>,
    fill: Rgba8,
    // Held as paint state; nothing strokes text in the current pipeline.
    #[allow(dead_code)]
    stroke: Rgba8,
    shadow_color: Rgba8,
    shadow_blur: u32,
    text_align: TextAlign,
    baseline: Baseline,
    font: Option<TextStyle>,
}

impl CpuSurface {
    pub fn new(canvas: Canvas) -> TitleResult<Self> {
        let mut surface = Self {
            width: 0,
            height: 0,
            buf: Vec::new(),
            ctx: None,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            font_cache: HashMap::new(),
            fill: Rgba8::BLACK,
            stroke: Rgba8::BLACK,
            shadow_color: Rgba8::BLACK,
            shadow_blur: 0,
            text_align: TextAlign::Left,
            baseline: Baseline::Top,
            font: None,
        };
        surface.resize(canvas)?;
        Ok(surface)
    }

    /// Read the rendered frame back as premultiplied RGBA8.
    pub fn readback(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.width,
            height: self.height,
            data: self.buf.clone(),
            premultiplied: true,
        }
    }

    /// Rasterize one primitive through a scratch render context and
    /// return its premultiplied RGBA8 bytes.
    fn rasterize(
        &mut self,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> TitleResult<()>,
    ) -> TitleResult<Vec<u8>> {
        let w16 = u16_dim(self.width, "surface width")?;
        let h16 = u16_dim(self.height, "surface height")?;
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w16 && ctx.height() == h16 => ctx,
            _ => vello_cpu::RenderContext::new(w16, h16),
        };
        ctx.reset();
        let out = f(self, &mut ctx).map(|()| {
            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
            ctx.render_to_pixmap(&mut pixmap);
            pixmap.data_as_u8_slice().to_vec()
        });
        self.ctx = Some(ctx);
        out
    }

    /// Shape `text` at the active font. `None` for empty input.
    fn shape(&mut self, text: &str) -> TitleResult<Option<parley::Layout<TextBrush>>> {
        let Some(style) = self.font.clone() else {
            return Err(TitleError::render("fill_text/measure_text require set_font"));
        };
        if text.is_empty() {
            return Ok(None);
        }

        let stack = match &style.family {
            FamilyToken::Serif => parley::style::FontStack::Single(
                parley::style::FontFamily::Generic(parley::style::GenericFamily::Serif),
            ),
            FamilyToken::SansSerif => parley::style::FontStack::Single(
                parley::style::FontFamily::Generic(parley::style::GenericFamily::SansSerif),
            ),
            FamilyToken::Named(name) => parley::style::FontStack::Single(
                parley::style::FontFamily::Named(std::borrow::Cow::Owned(name.clone())),
            ),
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(stack));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px as f32));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(style.weight)),
        ));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(Some(layout))
    }

    /// Rasterize every glyph run of `layout` in a single color.
    fn rasterize_layout(
        &mut self,
        layout: &parley::Layout<TextBrush>,
        transform: vello_cpu::kurbo::Affine,
        color: Rgba8,
    ) -> TitleResult<Vec<u8>> {
        self.rasterize(|this, ctx| {
            ctx.set_transform(transform);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let font = run.run().font();
                    let font_data = this.cpu_font_for(font.data.id(), font.data.as_ref(), font.index);
                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(&font_data)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
            Ok(())
        })
    }

    /// Bridge a parley-selected font into a `vello_cpu` font, keyed by
    /// the underlying blob so repeated draws reuse one copy.
    fn cpu_font_for(&mut self, blob_id: u64, bytes: &[u8], index: u32) -> vello_cpu::peniko::FontData {
        let key = (blob_id, index);
        if let Some(f) = self.font_cache.get(&key) {
            return f.clone();
        }
        let out = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(bytes.to_vec()),
            index,
        );
        self.font_cache.insert(key, out.clone());
        out
    }
}

impl Surface for CpuSurface {
    fn resize(&mut self, canvas: Canvas) -> TitleResult<()> {
        u16_dim(canvas.width, "surface width")?;
        u16_dim(canvas.height, "surface height")?;
        self.width = canvas.width;
        self.height = canvas.height;
        self.buf = vec![0u8; (canvas.width as usize) * (canvas.height as usize) * 4];
        self.ctx = None;
        Ok(())
    }

    fn fill_rect(&mut self, rect: kurbo::Rect) -> TitleResult<()> {
        let color = self.fill;
        let layer = self.rasterize(|_, ctx| {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
            ctx.fill_rect(&rect_to_cpu(rect));
            Ok(())
        })?;
        premul_over_in_place(&mut self.buf, &layer)
    }

    fn set_font(&mut self, style: &TextStyle) -> TitleResult<()> {
        if !style.size_px.is_finite() || style.size_px <= 0.0 {
            return Err(TitleError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        self.font = Some(style.clone());
        Ok(())
    }

    fn set_fill_color(&mut self, color: Rgba8) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Rgba8) {
        self.stroke = color;
    }

    fn set_shadow(&mut self, color: Rgba8, blur_radius: u32) {
        self.shadow_color = color;
        self.shadow_blur = blur_radius;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: Baseline) {
        self.baseline = baseline;
    }

    fn measure_text(&mut self, text: &str) -> TitleResult<f64> {
        Ok(match self.shape(text)? {
            Some(layout) => f64::from(layout.width()),
            None => 0.0,
        })
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        max_width: Option<f64>,
    ) -> TitleResult<()> {
        let Some(layout) = self.shape(text)? else {
            return Ok(());
        };
        let natural = f64::from(layout.width());
        if natural <= 0.0 {
            return Ok(());
        }
        let target = match max_width {
            Some(m) => m.min(natural),
            None => natural,
        };
        if target <= 0.0 {
            return Ok(());
        }

        let sx = target / natural;
        let x_left = match self.text_align {
            TextAlign::Left => x,
            TextAlign::Center => x - target / 2.0,
            TextAlign::Right => x - target,
        };
        let y_top = match self.baseline {
            Baseline::Top => y,
            Baseline::Middle => y - f64::from(layout.height()) / 2.0,
        };
        let transform = vello_cpu::kurbo::Affine::translate((x_left, y_top))
            * vello_cpu::kurbo::Affine::scale_non_uniform(sx, 1.0);

        // Glow first: the same layout tinted with the shadow color,
        // blurred, and laid under the sharp glyphs.
        if self.shadow_blur > 0 {
            let shadow_color = self.shadow_color;
            let shadow_blur = self.shadow_blur;
            let mut glow = self.rasterize_layout(&layout, transform, shadow_color)?;
            stack_blur_rgba8(&mut glow, self.width, self.height, shadow_blur)?;
            premul_over_in_place(&mut self.buf, &glow)?;
        }

        let ink = self.rasterize_layout(&layout, transform, self.fill)?;
        premul_over_in_place(&mut self.buf, &ink)
    }

    fn blur(&mut self, radius: u32) -> TitleResult<()> {
        stack_blur_rgba8(&mut self.buf, self.width, self.height, radius)
    }
}

fn u16_dim(v: u32, what: &str) -> TitleResult<u16> {
    v.try_into()
        .map_err(|_| TitleError::render(format!("{what} exceeds u16")))
}

fn rect_to_cpu(r: kurbo::Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> TitleResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(TitleError::render(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = s[3] as u16;
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - sa;
        d[3] = add_sat_u8(sa as u8, mul_div255_u8(d[3] as u16, inv));
        for c in 0..3 {
            let dc = mul_div255_u8(d[c] as u16, inv);
            d[c] = add_sat_u8(s[c], dc);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_opaque_source_replaces() {
        let mut dst = vec![10u8, 20, 30, 255];
        let src = vec![100u8, 110, 120, 255];
        premul_over_in_place(&mut dst, &src).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn over_transparent_source_keeps_dst() {
        let mut dst = vec![10u8, 20, 30, 255];
        let src = vec![0u8, 0, 0, 0];
        premul_over_in_place(&mut dst, &src).unwrap();
        assert_eq!(dst, vec![10, 20, 30, 255]);
    }

    #[test]
    fn over_rejects_mismatched_buffers() {
        let mut dst = vec![0u8; 8];
        assert!(premul_over_in_place(&mut dst, &[0u8; 4]).is_err());
        let mut odd = vec![0u8; 6];
        assert!(premul_over_in_place(&mut odd, &[0u8; 6]).is_err());
    }
}
