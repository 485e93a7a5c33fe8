use crate::foundation::error::{TitleError, TitleResult};

/// In-place stack blur over a premultiplied RGBA8 buffer.
///
/// Separable triangular-weighted convolution (the stack-blur kernel:
/// weight `radius + 1 - |d|` at offset `d`), horizontal pass then
/// vertical pass. Radius 0 is the identity. Edge pixels clamp-extend.
pub fn stack_blur_rgba8(
    buf: &mut [u8],
    width: u32,
    height: u32,
    radius: u32,
) -> TitleResult<()> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| TitleError::validation("blur buffer size overflow"))?;
    if buf.len() != expected_len {
        return Err(TitleError::validation(
            "stack_blur_rgba8 expects buf matching width*height*4",
        ));
    }
    if radius == 0 || width == 0 || height == 0 {
        return Ok(());
    }

    let mut tmp = vec![0u8; expected_len];
    horizontal_pass(buf, &mut tmp, width, height, radius);
    vertical_pass(&tmp, buf, width, height, radius);
    Ok(())
}

/// Triangular weight at distance `d` from the kernel center.
fn weight(radius: i64, d: i64) -> u64 {
    (radius + 1 - d.abs()) as u64
}

/// Sum of all kernel weights: (radius + 1)^2.
fn denom(radius: u32) -> u64 {
    let r = u64::from(radius) + 1;
    r * r
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, radius: u32) {
    let w = width as i64;
    let r = i64::from(radius);
    let den = denom(radius);
    for y in 0..height as i64 {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for d in -r..=r {
                let sx = (x + d).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * 4;
                let kw = weight(r, d);
                for c in 0..4 {
                    acc[c] += kw * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = ((acc[c] + den / 2) / den).min(255) as u8;
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, radius: u32) {
    let w = width as i64;
    let h = height as i64;
    let r = i64::from(radius);
    let den = denom(radius);
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for d in -r..=r {
                let sy = (y + d).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 4;
                let kw = weight(r, d);
                for c in 0..4 {
                    acc[c] += kw * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = ((acc[c] + den / 2) / den).min(255) as u8;
            }
        }
    }
}
