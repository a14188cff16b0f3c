//! Image decoding seam

use crate::{DecodeError, RGBA8_BYTES_PER_PIXEL};
use std::path::Path;

/// A decoded image as tightly packed RGBA8 rows, top row first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// Check that the image has pixels and that the buffer matches its size
    pub fn validate(&self) -> Result<(), DecodeError> {
        if self.width == 0 || self.height == 0 {
            return Err(DecodeError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.width as usize * self.height as usize * RGBA8_BYTES_PER_PIXEL;
        if self.rgba.len() != expected {
            return Err(DecodeError::PixelCount {
                expected,
                actual: self.rgba.len(),
            });
        }
        Ok(())
    }
}

/// Turns an image file into pixels
///
/// Implementations must not touch device state; they are called before any
/// device work for a load begins.
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, path: &Path) -> Result<DecodedImage, DecodeError>;
}

/// Default decoder using the `image` crate.
///
/// This decoder:
/// - reads the file using `std::fs`,
/// - decodes it via `image::load_from_memory` (format guessed from content),
/// - converts to an RGBA8 buffer.
///
/// Supported formats depend on enabled `image` crate features (this crate
/// enables PNG + JPEG).
#[cfg(feature = "image")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageFileDecoder;

#[cfg(feature = "image")]
impl ImageFileDecoder {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "image")]
impl ImageDecoder for ImageFileDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, DecodeError> {
        let bytes = std::fs::read(path).map_err(|source| DecodeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let rgba = image::load_from_memory(&bytes)
            .map_err(|err| DecodeError::Image(Box::new(err)))?
            .into_rgba8();
        tex_trace!(
            "Decoded {} ({}x{})",
            path.display(),
            rgba.width(),
            rgba.height()
        );
        Ok(DecodedImage {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}

#[cfg(all(test, feature = "image"))]
mod tests {
    use super::*;

    fn write_png(name: &str, width: u32, height: u32) -> std::path::PathBuf {
        use image::codecs::png::PngEncoder;
        use image::{ColorType, ImageEncoder, RgbaImage};

        let mut img = RgbaImage::new(width, height);
        for p in img.pixels_mut() {
            *p = image::Rgba([10, 20, 30, 40]);
        }

        let mut bytes = Vec::new();
        let enc = PngEncoder::new(&mut bytes);
        enc.write_image(&img, img.width(), img.height(), ColorType::Rgba8.into())
            .unwrap();

        let dir = std::env::temp_dir().join("texture-cache-tests");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join(name);
        std::fs::write(&path, &bytes).unwrap();
        path
    }

    #[test]
    fn decodes_png_to_rgba8() {
        let path = write_png("decoder_test.png", 5, 3);
        let out = ImageFileDecoder::new().decode(&path).unwrap();
        assert_eq!((out.width, out.height), (5, 3));
        assert_eq!(out.rgba.len(), 5 * 3 * 4);
        assert_eq!(&out.rgba[..4], &[10, 20, 30, 40]);
        out.validate().unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("texture-cache-tests/does-not-exist.png");
        let err = ImageFileDecoder::new().decode(&path).unwrap_err();
        assert!(matches!(err, DecodeError::Io { .. }));
    }

    #[test]
    fn garbage_is_an_image_error() {
        let dir = std::env::temp_dir().join("texture-cache-tests");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = ImageFileDecoder::new().decode(&path).unwrap_err();
        assert!(matches!(err, DecodeError::Image(_)));
    }

    #[test]
    fn validate_rejects_mismatched_buffers() {
        let img = DecodedImage {
            width: 2,
            height: 2,
            rgba: vec![0; 15],
        };
        assert!(matches!(
            img.validate(),
            Err(DecodeError::PixelCount {
                expected: 16,
                actual: 15
            })
        ));
        let empty = DecodedImage {
            width: 0,
            height: 4,
            rgba: Vec::new(),
        };
        assert!(matches!(empty.validate(), Err(DecodeError::EmptyImage { .. })));
    }
}
