use crate::foundation::core::Canvas;
use crate::foundation::error::{TitleError, TitleResult};

/// Left/right margin as a fraction of canvas width.
const MARGIN_FRAC: f64 = 1.0 / 15.0;

/// Font sizes as fractions of canvas height. Fixed design constants,
/// not derived from content.
const SM_HEAD_FRAC: f64 = 0.188;
const LG_HEAD_FRAC: f64 = 0.308;
const EP_FRAC: f64 = 0.095;
const TITLE_FRAC: f64 = 0.095;

/// Card geometry derived from the canvas dimensions.
///
/// Recomputed fresh on every render so it always reflects the canvas
/// that produced it; never persisted independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub left_margin: f64,
    pub right_boundary: f64,
    pub max_width: f64,
    pub sm_head_size: f64,
    pub lg_head_size: f64,
    pub ep_size: f64,
    pub title_size: f64,
}

impl Metrics {
    pub fn for_canvas(canvas: Canvas) -> TitleResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(TitleError::validation(
                "canvas width and height must be > 0",
            ));
        }
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let left_margin = w * MARGIN_FRAC;
        let right_boundary = w - left_margin;
        Ok(Self {
            left_margin,
            right_boundary,
            max_width: right_boundary - left_margin,
            sm_head_size: h * SM_HEAD_FRAC,
            lg_head_size: h * LG_HEAD_FRAC,
            ep_size: h * EP_FRAC,
            title_size: h * TITLE_FRAC,
        })
    }

    /// Midpoint of the text column, used as the center-alignment anchor.
    pub fn center_x(&self) -> f64 {
        (self.right_boundary + self.left_margin) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_canvas_geometry() {
        let m = Metrics::for_canvas(Canvas {
            width: 900,
            height: 675,
        })
        .unwrap();
        assert_eq!(m.left_margin, 60.0);
        assert_eq!(m.right_boundary, 840.0);
        assert_eq!(m.max_width, 780.0);
        assert_eq!(m.center_x(), 450.0);
    }

    #[test]
    fn column_invariant_holds_across_widths() {
        for width in [1u32, 320, 900, 1920, 7680] {
            let m = Metrics::for_canvas(Canvas { width, height: 675 }).unwrap();
            assert_eq!(m.right_boundary - m.left_margin, m.max_width);
            assert_eq!(m.right_boundary, f64::from(width) - m.left_margin);
        }
    }

    #[test]
    fn font_sizes_follow_height_ratios() {
        let m = Metrics::for_canvas(Canvas {
            width: 900,
            height: 675,
        })
        .unwrap();
        assert_eq!(m.sm_head_size, 675.0 * 0.188);
        assert_eq!(m.lg_head_size, 675.0 * 0.308);
        assert_eq!(m.ep_size, 675.0 * 0.095);
        assert_eq!(m.title_size, 675.0 * 0.095);
    }

    #[test]
    fn zero_canvas_is_rejected() {
        assert!(Metrics::for_canvas(Canvas { width: 0, height: 675 }).is_err());
        assert!(Metrics::for_canvas(Canvas { width: 900, height: 0 }).is_err());
    }
}
