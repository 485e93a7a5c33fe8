use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::TitleResult;

/// Opaque font family token, passed through to the surface.
///
/// The engine never interprets these beyond handing them to the raster
/// backend; how `Serif` maps onto an actual face is the backend's
/// concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FamilyToken {
    Serif,
    SansSerif,
    Named(String),
}

/// Per-call text style descriptor: font family, weight, and pixel size.
///
/// Every draw operation receives its own style instead of depending on
/// paint state left behind by a previous call.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub family: FamilyToken,
    pub weight: u16,
    pub size_px: f64,
}

impl TextStyle {
    pub fn new(family: FamilyToken, weight: u16, size_px: f64) -> Self {
        Self {
            family,
            weight,
            size_px,
        }
    }
}

/// Horizontal text alignment mode of the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchor for drawn text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Baseline {
    /// `y` is the top of the line box.
    #[default]
    Top,
    /// `y` is the vertical center of the line box.
    Middle,
}

/// Where a fitted-text call anchors horizontally.
///
/// The three symbolic placements resolve against the column margins;
/// `At` is the escape hatch: a literal x coordinate, leaving the
/// surface's alignment mode untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Left,
    Center,
    Right,
    At(f64),
}

/// One rendered frame read back from a surface.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

/// A 2D raster target with mutable paint state.
///
/// Owned by the caller and borrowed exclusively for the duration of one
/// render call. Implementations must treat empty strings and zero-width
/// measurements as draw-nothing, never as errors.
pub trait Surface {
    fn resize(&mut self, canvas: Canvas) -> TitleResult<()>;

    /// Fill `rect` with the current fill color.
    fn fill_rect(&mut self, rect: kurbo::Rect) -> TitleResult<()>;

    fn set_font(&mut self, style: &TextStyle) -> TitleResult<()>;

    fn set_fill_color(&mut self, color: Rgba8);

    fn set_stroke_color(&mut self, color: Rgba8);

    /// Configure the glow drawn beneath subsequent text. A radius of 0
    /// disables it.
    fn set_shadow(&mut self, color: Rgba8, blur_radius: u32);

    fn set_text_align(&mut self, align: TextAlign);

    fn set_text_baseline(&mut self, baseline: Baseline);

    /// Natural rendered width of `text` at the active font.
    fn measure_text(&mut self, text: &str) -> TitleResult<f64>;

    /// Draw `text` anchored at (`x`, `y`) per the active alignment and
    /// baseline. With `max_width`, glyphs are horizontally compressed so
    /// the rendered width is exactly `min(natural_width, max_width)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>)
    -> TitleResult<()>;

    /// Surface-wide blur post-filter over the full bounds.
    fn blur(&mut self, radius: u32) -> TitleResult<()>;
}
