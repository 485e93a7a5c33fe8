//! Intertitle renders stylized, multi-line episode title cards.
//!
//! A card is five fixed text slots (two small headings, one large
//! heading, an episode label, a title line) composed onto a 4:3 raster
//! canvas: each line is horizontally squashed to fit the text column,
//! the two-color theme is derived from a seed, every glyph gets a soft
//! orange glow, and the finished card is passed through a gentle
//! surface-wide blur.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `seed + dark flag -> Theme` (two colors, one always black)
//! 2. **Measure**: `Canvas -> Metrics` (margins, column width, font sizes)
//! 3. **Compose**: `render_card` draws the background and the five slots
//!    through the [`Surface`] trait
//! 4. **Soften**: a stack-blur post-filter over the full card
//! 5. **Export** (optional): encode the [`FrameRGBA`] readback as PNG
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: theme and geometry are pure functions
//!   of their inputs; the seed is threaded explicitly, never read from
//!   shared state.
//! - **Surfaces are borrowed, not owned**: the engine holds the caller's
//!   [`Surface`] exclusively for one render call and performs no IO.
#![forbid(unsafe_code)]

mod card;
mod effects;
mod foundation;
mod render;

/// PNG encoding of rendered frames.
pub mod export;

pub use card::layout::Metrics;
pub use card::model::{DEFAULT_CANVAS, TitleAlign, TitleCard};
pub use card::theme::{TINTS, Theme, random_seed, resolve_theme};
pub use effects::blur::stack_blur_rgba8;
pub use foundation::core::{Canvas, Rgba8};
pub use foundation::error::{TitleError, TitleResult};
pub use render::compose::render_card;
pub use render::cpu::CpuSurface;
pub use render::fitted::draw_fitted_text;
pub use render::surface::{
    Baseline, FamilyToken, FrameRGBA, Placement, Surface, TextAlign, TextStyle,
};
