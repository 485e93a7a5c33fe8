use crate::card::layout::Metrics;
use crate::card::model::{TitleAlign, TitleCard};
use crate::card::theme::resolve_theme;
use crate::foundation::core::Rgba8;
use crate::foundation::error::TitleResult;
use crate::render::fitted::draw_fitted_text;
use crate::render::surface::{Baseline, FamilyToken, Placement, Surface, TextStyle};

/// Glow behind every glyph.
const GLOW_COLOR: Rgba8 = Rgba8::rgb(0xFF, 0xA5, 0x00); // orange
const GLOW_RADIUS: u32 = 6;

/// Final softening pass over the whole card.
const CARD_BLUR_RADIUS: u32 = 1;

/// Slot vertical positions as fractions of canvas height.
const TOP_Y_FRAC: f64 = 0.06667;
const MID_Y_FRAC: f64 = 0.21926;
const BOT_Y_FRAC: f64 = 0.35852;
const EP_Y_FRAC: f64 = 0.62963;
const TITLE_Y_FRAC: f64 = 0.78519;

/// Per-slot horizontal compression ratios. The bottom line runs at 1.0
/// and relies entirely on the max-width clamp to stay in the column.
const TOP_SQUASH: f64 = 0.62;
const MID_SQUASH: f64 = 0.62;
const BOT_SQUASH: f64 = 1.0;
const EP_SQUASH: f64 = 0.76;
const TITLE_SQUASH: f64 = 0.74;

impl TitleAlign {
    fn placement(self) -> Placement {
        match self {
            TitleAlign::Left => Placement::Left,
            TitleAlign::Center => Placement::Center,
            TitleAlign::Right => Placement::Right,
        }
    }
}

/// Render one card onto `surface`.
///
/// The only effectful entry point besides PNG export. The theme seed is
/// passed in explicitly; rendering never reseeds. Synchronous and
/// atomic from the caller's perspective; any measurement or drawing
/// failure propagates immediately.
#[tracing::instrument(skip(surface, card), fields(dark = card.dark_mode))]
pub fn render_card(surface: &mut dyn Surface, card: &TitleCard, seed: f64) -> TitleResult<()> {
    let theme = resolve_theme(seed, card.dark_mode);
    let metrics = Metrics::for_canvas(card.canvas)?;
    let w = f64::from(card.canvas.width);
    let h = f64::from(card.canvas.height);

    surface.resize(card.canvas)?;
    surface.set_fill_color(theme.background);
    surface.fill_rect(kurbo::Rect::new(0.0, 0.0, w, h))?;

    // Foreground text with a soft orange glow.
    surface.set_fill_color(theme.foreground);
    surface.set_stroke_color(theme.foreground);
    surface.set_text_baseline(Baseline::Top);
    surface.set_shadow(GLOW_COLOR, GLOW_RADIUS);

    let sm_head = TextStyle::new(FamilyToken::Serif, 900, metrics.sm_head_size);
    let lg_head = TextStyle::new(FamilyToken::Serif, 900, metrics.lg_head_size);
    let ep = TextStyle::new(FamilyToken::SansSerif, 700, metrics.ep_size);
    let title = TextStyle::new(FamilyToken::Serif, 600, metrics.title_size);

    draw_fitted_text(
        surface,
        &metrics,
        &card.top(),
        h * TOP_Y_FRAC,
        TOP_SQUASH,
        Placement::Left,
        &sm_head,
    )?;
    draw_fitted_text(
        surface,
        &metrics,
        &card.mid(),
        h * MID_Y_FRAC,
        MID_SQUASH,
        Placement::Left,
        &sm_head,
    )?;
    draw_fitted_text(
        surface,
        &metrics,
        &card.bot(),
        h * BOT_Y_FRAC,
        BOT_SQUASH,
        Placement::Left,
        &lg_head,
    )?;
    draw_fitted_text(
        surface,
        &metrics,
        &card.ep(),
        h * EP_Y_FRAC,
        EP_SQUASH,
        Placement::Left,
        &ep,
    )?;
    draw_fitted_text(
        surface,
        &metrics,
        &card.title(),
        h * TITLE_Y_FRAC,
        TITLE_SQUASH,
        card.title_align.placement(),
        &title,
    )?;

    surface.blur(CARD_BLUR_RADIUS)?;
    Ok(())
}
