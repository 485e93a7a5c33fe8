use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::TitleResult;
use crate::render::surface::FrameRGBA;

/// Encode a rendered frame as a PNG byte stream.
pub fn encode_png(frame: &FrameRGBA) -> TitleResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode png")?;
    Ok(out.into_inner())
}

/// Write a rendered frame to `path` as PNG, creating parent
/// directories as needed.
pub fn save_png(frame: &FrameRGBA, path: &Path) -> TitleResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_png_emits_png_magic() {
        let frame = FrameRGBA {
            width: 2,
            height: 2,
            data: vec![0u8; 16],
            premultiplied: true,
        };
        let bytes = encode_png(&frame).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
