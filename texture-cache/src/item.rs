//! A single registered image

use crate::{
    DeviceError, DeviceHandle, DeviceTexture, LoadOptions, RGBA8_BYTES_PER_PIXEL, TextureBackend,
    TextureError, TextureResult, TextureUpload, canonical_size, pad_to_canvas,
};
use std::borrow::Cow;
use std::path::Path;

/// One logical image resource
///
/// An item starts out as metadata only. [`load`](Self::load) decodes the file
/// and uploads it to the device; [`unload`](Self::unload) gives the device
/// memory back but keeps the dimensions so the item can be loaded again. The
/// device handle exists exactly while the item is loaded.
#[derive(Debug)]
pub struct TextureItem {
    name: String,
    texture: Option<DeviceTexture>,
    width: u32,
    height: u32,
    original_width: u32,
    original_height: u32,
}

impl TextureItem {
    /// Create an unloaded item. No I/O happens here.
    pub fn new(image_name: impl Into<String>) -> Self {
        Self {
            name: image_name.into(),
            texture: None,
            width: 0,
            height: 0,
            original_width: 0,
            original_height: 0,
        }
    }

    /// Name (path) of the image file
    pub fn image_name(&self) -> &str {
        &self.name
    }

    /// Canvas width on the device, a power of two if the image was resized
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height on the device, a power of two if the image was resized
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width of the image file itself
    pub fn original_width(&self) -> u32 {
        self.original_width
    }

    /// Height of the image file itself
    pub fn original_height(&self) -> u32 {
        self.original_height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn original_size(&self) -> (u32, u32) {
        (self.original_width, self.original_height)
    }

    /// Fraction of the canvas covered by the image, for texture coordinates
    ///
    /// `(1.0, 1.0)` unless the image was padded to a larger canvas, and for
    /// an item that was never loaded.
    pub fn uv_extent(&self) -> (f32, f32) {
        if self.width == 0 || self.height == 0 {
            return (1.0, 1.0);
        }
        (
            self.original_width as f32 / self.width as f32,
            self.original_height as f32 / self.height as f32,
        )
    }

    /// Device handle, `None` while unloaded
    pub fn id(&self) -> Option<DeviceHandle> {
        self.texture.as_ref().map(DeviceTexture::handle)
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    /// Decode the image and upload it to the device
    ///
    /// Does nothing if the item is already loaded. On failure the item stays
    /// unloaded and nothing is kept on the device.
    pub fn load(&mut self, backend: &TextureBackend, options: &LoadOptions) -> TextureResult<()> {
        if self.is_loaded() {
            tex_trace!("`{}` already loaded", self.name);
            return Ok(());
        }

        let image = backend
            .decoder()
            .decode(Path::new(&self.name))
            .map_err(|err| TextureError::decode(&self.name, err))?;

        let (width, height) = canonical_size(image.width, image.height, options.resize_if_needed)
            .ok_or_else(|| {
                TextureError::device_allocation(
                    &self.name,
                    DeviceError::InvalidSize {
                        width: image.width,
                        height: image.height,
                    },
                )
            })?;
        image
            .validate()
            .map_err(|err| TextureError::decode(&self.name, err))?;

        let pixels = if (width, height) == (image.width, image.height) {
            Cow::Borrowed(image.rgba.as_slice())
        } else {
            tex_debug!(
                "Padding `{}` from {}x{} to {}x{}",
                self.name,
                image.width,
                image.height,
                width,
                height
            );
            Cow::Owned(pad_to_canvas(
                &image.rgba,
                image.width,
                image.height,
                width,
                height,
                RGBA8_BYTES_PER_PIXEL,
            ))
        };

        let upload = TextureUpload {
            pixels: &pixels,
            width,
            height,
            min_filter: options.min_filter,
            mag_filter: options.mag_filter,
            generate_mipmaps: options.generate_mipmaps(),
        };
        let texture = DeviceTexture::allocate(backend.device(), &upload)
            .map_err(|err| TextureError::device_allocation(&self.name, err))?;

        tex_debug!(
            "Loaded `{}` as {} ({}x{}, original {}x{})",
            self.name,
            texture.handle(),
            width,
            height,
            image.width,
            image.height
        );
        self.texture = Some(texture);
        self.width = width;
        self.height = height;
        self.original_width = image.width;
        self.original_height = image.height;
        Ok(())
    }

    /// Release the device texture, keeping the dimensions for a reload
    ///
    /// Does nothing if the item is not loaded. If the device refuses the
    /// release the item stays loaded so the call can be retried.
    pub fn unload(&mut self) -> TextureResult<()> {
        let Some(texture) = self.texture.as_mut() else {
            return Ok(());
        };
        texture
            .release()
            .map_err(|err: DeviceError| TextureError::device_release(&self.name, err))?;
        self.texture = None;
        tex_debug!("Unloaded `{}`", self.name);
        Ok(())
    }
}
