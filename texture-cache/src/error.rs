//! Error types for texture-cache

use thiserror::Error;

/// Result type for texture operations
pub type TextureResult<T> = Result<T, TextureError>;

/// Errors reported by [`TextureItem`](crate::TextureItem) and
/// [`TextureManager`](crate::TextureManager) operations.
///
/// None of these are fatal to the manager: the registry stays consistent and
/// the failed operation can be retried.
#[derive(Error, Debug)]
pub enum TextureError {
    /// The source image could not be read or decoded. The item is unchanged.
    #[error("Failed to decode image `{name}`")]
    Decode {
        name: String,
        #[source]
        source: DecodeError,
    },

    /// The device could not create the texture. Nothing was retained.
    #[error("Failed to allocate device texture for `{name}`")]
    DeviceAllocation {
        name: String,
        #[source]
        source: DeviceError,
    },

    /// The device could not release the texture. The item is still loaded.
    #[error("Failed to release device texture for `{name}`")]
    DeviceRelease {
        name: String,
        #[source]
        source: DeviceError,
    },

    /// The manager has no decoder/device configured.
    #[error("No texture backend configured, cannot load `{name}`")]
    NoBackend { name: String },
}

impl TextureError {
    /// Create a decode error
    pub fn decode(name: impl Into<String>, source: DecodeError) -> Self {
        let name = name.into();
        tex_warn!("Decoding `{}` failed: {}", name, source);
        Self::Decode { name, source }
    }

    /// Create a device allocation error
    pub fn device_allocation(name: impl Into<String>, source: DeviceError) -> Self {
        let name = name.into();
        tex_error!("Device allocation for `{}` failed: {}", name, source);
        Self::DeviceAllocation { name, source }
    }

    /// Create a device release error
    pub fn device_release(name: impl Into<String>, source: DeviceError) -> Self {
        let name = name.into();
        tex_error!("Device release for `{}` failed: {}", name, source);
        Self::DeviceRelease { name, source }
    }

    /// Create a missing backend error
    pub fn no_backend(name: impl Into<String>) -> Self {
        let name = name.into();
        tex_warn!("No texture backend configured for `{}`", name);
        Self::NoBackend { name }
    }

    /// Name of the image the failed operation was about
    pub fn image_name(&self) -> &str {
        match self {
            Self::Decode { name, .. }
            | Self::DeviceAllocation { name, .. }
            | Self::DeviceRelease { name, .. }
            | Self::NoBackend { name } => name,
        }
    }
}

/// Errors produced by an [`ImageDecoder`](crate::ImageDecoder)
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Reading the file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a supported image
    #[error("Unsupported or corrupt image: {0}")]
    Image(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The decoder produced an image without pixels
    #[error("Image has zero size ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// The pixel buffer does not match the reported dimensions
    #[error("Expected {expected} bytes of RGBA8 pixels, got {actual}")]
    PixelCount { expected: usize, actual: usize },

    /// Decoder specific failure
    #[error("{0}")]
    Other(String),
}

/// Errors produced by a [`TextureDevice`](crate::TextureDevice)
#[derive(Error, Debug)]
pub enum DeviceError {
    /// The texture object could not be created
    #[error("Failed to create texture: {0}")]
    CreateTexture(String),

    /// Uploading pixels or setting sampler state failed
    #[error("Failed to upload texture data: {0}")]
    Upload(String),

    /// Deleting the texture object failed
    #[error("Failed to release texture: {0}")]
    Release(String),

    /// The device cannot hold a texture of this size
    #[error("Unsupported texture size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}
