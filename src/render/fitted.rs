use crate::card::layout::Metrics;
use crate::foundation::error::TitleResult;
use crate::render::surface::{Baseline, Placement, Surface, TextAlign, TextStyle};

/// Draw one text block, horizontally squashed to fit the column.
///
/// `text` may contain embedded `'\n'` breaks; each segment becomes its
/// own sub-line. `y` is the top of the first sub-line (the vertical
/// center when the block is multi-line). `squash` in `(0, 1]` is the
/// target compression; regardless of squash, no line ever renders wider
/// than `metrics.max_width`.
///
/// Sub-lines stack at a pitch equal to the measured width of a single
/// capital `M` at the active font. That glyph-derived pitch, not the
/// font's line height, is what gives stacked headings their tight look;
/// keep it.
pub fn draw_fitted_text(
    surface: &mut dyn Surface,
    metrics: &Metrics,
    text: &str,
    y: f64,
    squash: f64,
    placement: Placement,
    style: &TextStyle,
) -> TitleResult<()> {
    surface.set_font(style)?;

    let x = match placement {
        Placement::Right => {
            surface.set_text_align(TextAlign::Right);
            metrics.right_boundary
        }
        Placement::Left => {
            surface.set_text_align(TextAlign::Left);
            metrics.left_margin
        }
        Placement::Center => {
            surface.set_text_align(TextAlign::Center);
            metrics.center_x()
        }
        Placement::At(x) => x,
    };

    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() > 1 {
        surface.set_text_baseline(Baseline::Middle);
    }

    for (n, line) in lines.iter().enumerate() {
        let pitch = surface.measure_text("M")?;
        let natural = surface.measure_text(line)?;
        let target = if natural * squash >= metrics.max_width {
            metrics.max_width
        } else {
            natural * squash
        };
        surface.fill_text(line, x, y + n as f64 * pitch, Some(target))?;
    }

    surface.set_text_baseline(Baseline::Top);
    surface.set_text_align(TextAlign::Left);
    Ok(())
}
