//! Power-of-two canvas canonicalization
//!
//! Older hardware only accepts textures whose sides are powers of two. Rather
//! than rescaling the image, the canvas grows: the pixels keep their size and
//! sit in the top-left corner, the rest of the canvas is zero padding
//! (transparent black for RGBA8).

/// Bytes per pixel of the RGBA8 buffers handled by this crate
pub const RGBA8_BYTES_PER_PIXEL: usize = 4;

/// Smallest power of two that is `>= value` (1 for 0)
///
/// Returns `None` if the result does not fit in a `u32`.
pub fn next_power_of_two(value: u32) -> Option<u32> {
    value.max(1).checked_next_power_of_two()
}

/// Canonical canvas size for an image of `width` x `height`
///
/// Each axis is handled independently. With `resize_if_needed` false the
/// original size is returned unchanged, power of two or not.
pub fn canonical_size(width: u32, height: u32, resize_if_needed: bool) -> Option<(u32, u32)> {
    if !resize_if_needed || (width.is_power_of_two() && height.is_power_of_two()) {
        return Some((width, height));
    }
    Some((next_power_of_two(width)?, next_power_of_two(height)?))
}

/// Copy a tightly packed image into the top-left corner of a larger canvas
///
/// `pixels` holds `width * height` pixels of `bytes_per_pixel` bytes each. The
/// returned buffer holds `canvas_width * canvas_height` pixels; everything
/// outside the source rectangle is zero.
pub fn pad_to_canvas(
    pixels: &[u8],
    width: u32,
    height: u32,
    canvas_width: u32,
    canvas_height: u32,
    bytes_per_pixel: usize,
) -> Vec<u8> {
    debug_assert!(width <= canvas_width && height <= canvas_height);

    let src_row = width as usize * bytes_per_pixel;
    let dst_row = canvas_width as usize * bytes_per_pixel;
    let mut out = vec![0u8; dst_row * canvas_height as usize];
    if src_row == 0 {
        return out;
    }

    for (row, src) in pixels.chunks_exact(src_row).take(height as usize).enumerate() {
        let dst_off = row * dst_row;
        out[dst_off..dst_off + src_row].copy_from_slice(src);
    }
    out
}
