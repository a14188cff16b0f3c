//! Graphics device seam
//!
//! The device binding layer creates and deletes texture objects. This crate
//! only talks to it through [`TextureDevice`] and never shares a handle
//! between two owners: every allocated handle is wrapped in exactly one
//! [`DeviceTexture`], which releases it when dropped.

use crate::{DeviceError, MagFilter, MinFilter};
use std::fmt;
use std::num::NonZeroU64;
use std::sync::Arc;

/// Opaque identifier of a texture object allocated by a [`TextureDevice`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceHandle(NonZeroU64);

impl DeviceHandle {
    pub fn new(raw: NonZeroU64) -> Self {
        Self(raw)
    }

    /// Returns `None` for 0, which no device hands out
    pub fn from_raw(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for DeviceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the device needs to create one texture
#[derive(Copy, Clone, Debug)]
pub struct TextureUpload<'a> {
    /// Tightly packed RGBA8 rows, `width * height * 4` bytes
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub min_filter: MinFilter,
    pub mag_filter: MagFilter,
    pub generate_mipmaps: bool,
}

/// Device binding layer
///
/// `allocate` must either return a handle to a fully initialized texture or
/// fail without leaving anything allocated. `release` may fail, in which case
/// the handle is still considered live and may be released again later.
pub trait TextureDevice: Send + Sync {
    fn allocate(&self, upload: &TextureUpload<'_>) -> Result<DeviceHandle, DeviceError>;

    fn release(&self, handle: DeviceHandle) -> Result<(), DeviceError>;
}

/// An allocated device texture and the device that owns it
///
/// Dropping a `DeviceTexture` releases the handle. Call
/// [`release`](Self::release) to observe release failures instead.
pub struct DeviceTexture {
    handle: DeviceHandle,
    device: Arc<dyn TextureDevice>,
    released: bool,
}

impl DeviceTexture {
    /// Allocate a texture on `device`
    pub fn allocate(
        device: &Arc<dyn TextureDevice>,
        upload: &TextureUpload<'_>,
    ) -> Result<Self, DeviceError> {
        let handle = device.allocate(upload)?;
        tex_trace!(
            "Allocated device texture {} ({}x{}, mipmaps: {})",
            handle,
            upload.width,
            upload.height,
            upload.generate_mipmaps
        );
        Ok(Self {
            handle,
            device: Arc::clone(device),
            released: false,
        })
    }

    pub fn handle(&self) -> DeviceHandle {
        self.handle
    }

    /// Release the handle now
    ///
    /// On failure the texture is still live; calling this again retries. Once
    /// it succeeded, dropping the value does nothing.
    pub fn release(&mut self) -> Result<(), DeviceError> {
        if self.released {
            return Ok(());
        }
        self.device.release(self.handle)?;
        self.released = true;
        tex_trace!("Released device texture {}", self.handle);
        Ok(())
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for DeviceTexture {
    fn drop(&mut self) {
        if let Err(_err) = self.release() {
            tex_error!(
                "Leaking device texture {}, release on drop failed: {}",
                self.handle,
                _err
            );
        }
    }
}

impl fmt::Debug for DeviceTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceTexture")
            .field("handle", &self.handle)
            .field("released", &self.released)
            .finish()
    }
}
