//! OpenGL texture allocation

use crate::GlTexture;
use glow::{Context, HasContext};
use std::num::NonZeroU32;
use std::sync::Arc;
use texture_cache::{DeviceError, DeviceHandle, MagFilter, MinFilter, TextureDevice, TextureUpload};

const MAX_QUEUED_GL_ERRORS: usize = 16;

/// Texture device backed by a glow OpenGL context
///
/// All calls must happen on the thread where the context is current. The
/// `Send`/`Sync` impls exist so the device can sit in the process-wide
/// [`TextureManager`](texture_cache::TextureManager); they do not make GL
/// calls from other threads valid.
pub struct GlowDevice {
    gl: Arc<Context>,
}

// SAFETY: GL objects are only created and deleted through `&self` methods that
// the caller drives from the context thread (see type docs).
unsafe impl Send for GlowDevice {}
unsafe impl Sync for GlowDevice {}

impl GlowDevice {
    pub fn new(gl: Arc<Context>) -> Self {
        Self { gl }
    }

    pub fn gl(&self) -> &Arc<Context> {
        &self.gl
    }

    /// Largest texture side the driver accepts
    pub fn max_texture_size(&self) -> u32 {
        let size = unsafe { self.gl.get_parameter_i32(glow::MAX_TEXTURE_SIZE) };
        u32::try_from(size).unwrap_or(0)
    }

    fn currently_bound_texture(&self) -> Option<GlTexture> {
        let last = unsafe { self.gl.get_parameter_i32(glow::TEXTURE_BINDING_2D) };
        u32::try_from(last)
            .ok()
            .and_then(NonZeroU32::new)
            .map(glow::NativeTexture)
    }

    /// Drain the GL error queue, returning the first error if any
    fn take_gl_error(&self) -> Option<u32> {
        let mut first = None;
        // a lost context may keep reporting errors, so the drain is bounded
        for _ in 0..MAX_QUEUED_GL_ERRORS {
            let err = unsafe { self.gl.get_error() };
            if err == glow::NO_ERROR {
                break;
            }
            first.get_or_insert(err);
        }
        first
    }
}

impl TextureDevice for GlowDevice {
    fn allocate(&self, upload: &TextureUpload<'_>) -> Result<DeviceHandle, DeviceError> {
        let max = self.max_texture_size();
        if upload.width == 0 || upload.height == 0 || upload.width > max || upload.height > max {
            return Err(DeviceError::InvalidSize {
                width: upload.width,
                height: upload.height,
            });
        }

        // Errors left over from unrelated calls must not fail this upload
        if let Some(_stale) = self.take_gl_error() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Discarding stale GL error 0x{:04X} before upload", _stale);
        }

        let last_texture = self.currently_bound_texture();
        let gl = &self.gl;

        unsafe {
            let texture = gl.create_texture().map_err(DeviceError::CreateTexture)?;

            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);

            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                gl_min_filter(upload.min_filter) as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                gl_mag_filter(upload.mag_filter) as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );

            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                upload.width as i32,
                upload.height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(upload.pixels)),
            );

            if upload.generate_mipmaps {
                gl.generate_mipmap(glow::TEXTURE_2D);
            }

            let error = self.take_gl_error();
            gl.bind_texture(glow::TEXTURE_2D, last_texture);

            if let Some(error) = error {
                gl.delete_texture(texture);
                return Err(DeviceError::Upload(format!(
                    "GL error 0x{:04X} while uploading {}x{}",
                    error, upload.width, upload.height
                )));
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Created GL texture {} ({}x{}, mipmaps: {})",
                texture.0,
                upload.width,
                upload.height,
                upload.generate_mipmaps
            );

            Ok(device_handle(texture))
        }
    }

    fn release(&self, handle: DeviceHandle) -> Result<(), DeviceError> {
        let texture = gl_texture(handle).ok_or_else(|| {
            DeviceError::Release(format!("handle {handle} is not an OpenGL texture name"))
        })?;

        let _ = self.take_gl_error();
        unsafe { self.gl.delete_texture(texture) };
        if let Some(error) = self.take_gl_error() {
            return Err(DeviceError::Release(format!(
                "GL error 0x{:04X} deleting texture {}",
                error, texture.0
            )));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Deleted GL texture {}", texture.0);
        Ok(())
    }
}

/// Device handle for a GL texture name
pub fn device_handle(texture: GlTexture) -> DeviceHandle {
    DeviceHandle::new(texture.0.into())
}

/// GL texture name behind a device handle allocated by [`GlowDevice`]
pub fn gl_texture(handle: DeviceHandle) -> Option<GlTexture> {
    u32::try_from(handle.get())
        .ok()
        .and_then(NonZeroU32::new)
        .map(glow::NativeTexture)
}

/// `GL_TEXTURE_MIN_FILTER` value for a downscale filter
pub fn gl_min_filter(filter: MinFilter) -> u32 {
    match filter {
        MinFilter::Nearest => glow::NEAREST,
        MinFilter::Linear => glow::LINEAR,
        MinFilter::NearestMipmapNearest => glow::NEAREST_MIPMAP_NEAREST,
        MinFilter::LinearMipmapNearest => glow::LINEAR_MIPMAP_NEAREST,
        MinFilter::NearestMipmapLinear => glow::NEAREST_MIPMAP_LINEAR,
        MinFilter::LinearMipmapLinear => glow::LINEAR_MIPMAP_LINEAR,
    }
}

/// `GL_TEXTURE_MAG_FILTER` value for an upscale filter
pub fn gl_mag_filter(filter: MagFilter) -> u32 {
    match filter {
        MagFilter::Nearest => glow::NEAREST,
        MagFilter::Linear => glow::LINEAR,
    }
}
