use std::path::Path;

use crate::foundation::core::Canvas;
use crate::foundation::error::{TitleError, TitleResult};

/// Default card canvas, 4:3.
pub const DEFAULT_CANVAS: Canvas = Canvas {
    width: 900,
    height: 675,
};

/// Horizontal alignment of the title slot.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TitleAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// One card: five text slots plus formatting toggles.
///
/// A pure data model rebuilt from the input source on every render; the
/// field identifiers match the stable keys of the card file
/// (`topText`, `topTextCaps`, ..., `titleAlign`, `darkMode`). Empty
/// strings are valid and render as empty lines.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleCard {
    pub top_text: String,
    pub top_text_caps: bool,
    pub mid_text: String,
    pub mid_text_caps: bool,
    pub bot_text: String,
    pub bot_text_caps: bool,
    pub ep_text: String,
    pub ep_text_caps: bool,
    pub title_text: String,
    pub title_text_caps: bool,
    pub title_align: TitleAlign,
    pub dark_mode: bool,
    pub canvas: Canvas,
}

impl Default for TitleCard {
    fn default() -> Self {
        Self {
            top_text: String::new(),
            top_text_caps: false,
            mid_text: String::new(),
            mid_text_caps: false,
            bot_text: String::new(),
            bot_text_caps: false,
            ep_text: String::new(),
            ep_text_caps: false,
            title_text: String::new(),
            title_text_caps: false,
            title_align: TitleAlign::Left,
            dark_mode: false,
            canvas: DEFAULT_CANVAS,
        }
    }
}

/// The caps toggle is applied on every read, never cached, so a flag
/// flipped after the text was set can never serve stale text.
fn apply_caps(raw: &str, caps: bool) -> String {
    if caps { raw.to_uppercase() } else { raw.to_owned() }
}

impl TitleCard {
    pub fn from_json(s: &str) -> TitleResult<Self> {
        serde_json::from_str(s).map_err(|e| TitleError::serde(format!("invalid card JSON: {e}")))
    }

    pub fn from_path(path: &Path) -> TitleResult<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| TitleError::serde(format!("read card '{}': {e}", path.display())))?;
        Self::from_json(&s)
    }

    pub fn to_json_pretty(&self) -> TitleResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TitleError::serde(format!("serialize card: {e}")))
    }

    /// Effective top-slot text.
    pub fn top(&self) -> String {
        apply_caps(&self.top_text, self.top_text_caps)
    }

    /// Effective mid-slot text.
    pub fn mid(&self) -> String {
        apply_caps(&self.mid_text, self.mid_text_caps)
    }

    /// Effective bottom-slot text.
    pub fn bot(&self) -> String {
        apply_caps(&self.bot_text, self.bot_text_caps)
    }

    /// Effective episode-slot text.
    pub fn ep(&self) -> String {
        apply_caps(&self.ep_text, self.ep_text_caps)
    }

    /// Effective title-slot text.
    pub fn title(&self) -> String {
        apply_caps(&self.title_text, self.title_text_caps)
    }
}
