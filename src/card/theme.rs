use crate::foundation::core::Rgba8;

/// The nine theme tints, warmest cream first, purest white last.
///
/// One of these is always paired with pure black; which side of the
/// pairing it lands on depends on the dark-mode flag.
pub const TINTS: [Rgba8; 9] = [
    Rgba8::rgb(0xFE, 0xFA, 0xEE),
    Rgba8::rgb(0xFE, 0xFB, 0xF1),
    Rgba8::rgb(0xFE, 0xFC, 0xF5),
    Rgba8::rgb(0xFF, 0xFD, 0xF8),
    Rgba8::rgb(0xFF, 0xFE, 0xFC),
    Rgba8::rgb(0xF6, 0xFD, 0xFF),
    Rgba8::rgb(0xF7, 0xFE, 0xFF),
    Rgba8::rgb(0xFA, 0xFE, 0xFF),
    Rgba8::rgb(0xFF, 0xFF, 0xFF),
];

/// The two-color theme of a card: one side is always pure black, the
/// other a tint selected by the seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgba8,
    pub foreground: Rgba8,
}

/// Select the tint for `seed`.
///
/// Deterministic: identical seeds select identical tints. A seed of
/// exactly 1.0 would index one past the palette; the index clamps to
/// the last tint instead.
fn tint_for_seed(seed: f64) -> Rgba8 {
    let i = (seed * TINTS.len() as f64).floor() as usize;
    TINTS[i.min(TINTS.len() - 1)]
}

/// Resolve the card theme from an explicit seed and the dark-mode flag.
///
/// Pure function of its inputs; the seed is threaded in by the caller
/// rather than read from shared state.
pub fn resolve_theme(seed: f64, dark_mode: bool) -> Theme {
    let tint = tint_for_seed(seed);
    if dark_mode {
        Theme {
            background: Rgba8::BLACK,
            foreground: tint,
        }
    } else {
        Theme {
            background: tint,
            foreground: Rgba8::BLACK,
        }
    }
}

/// Draw a fresh theme seed in `[0, 1)`.
///
/// Replaces the mutable process-wide seed of earlier designs: callers
/// hold the returned value and pass it into [`resolve_theme`]
/// explicitly. Reseeding is calling this again.
pub fn random_seed() -> f64 {
    fastrand::f64()
}
