//! Load options and manager configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Filtering used when a texture is drawn smaller than its size (downscale)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MinFilter {
    Nearest,
    #[default]
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl MinFilter {
    /// Whether sampling with this filter reads from a mipmap chain
    pub fn uses_mipmaps(self) -> bool {
        !matches!(self, MinFilter::Nearest | MinFilter::Linear)
    }
}

/// Filtering used when a texture is drawn larger than its size (upscale)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MagFilter {
    Nearest,
    #[default]
    Linear,
}

/// Options for loading a texture onto the device
///
/// The default matches what most callers want: linear filtering both ways,
/// no forced mipmaps, and power-of-two canonicalization enabled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadOptions {
    /// Downscale filter
    pub min_filter: MinFilter,
    /// Upscale filter
    pub mag_filter: MagFilter,
    /// Always generate a mipmap chain, whatever the filters and size
    pub force_mipmap: bool,
    /// Grow non power-of-two images to a power-of-two canvas. The image keeps
    /// its pixels and occupies the top-left corner of the canvas.
    pub resize_if_needed: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            min_filter: MinFilter::Linear,
            mag_filter: MagFilter::Linear,
            force_mipmap: false,
            resize_if_needed: true,
        }
    }
}

impl LoadOptions {
    pub fn with_min_filter(mut self, min_filter: MinFilter) -> Self {
        self.min_filter = min_filter;
        self
    }

    pub fn with_mag_filter(mut self, mag_filter: MagFilter) -> Self {
        self.mag_filter = mag_filter;
        self
    }

    pub fn with_force_mipmap(mut self, force_mipmap: bool) -> Self {
        self.force_mipmap = force_mipmap;
        self
    }

    pub fn with_resize_if_needed(mut self, resize_if_needed: bool) -> Self {
        self.resize_if_needed = resize_if_needed;
        self
    }

    /// Whether the device should build a mipmap chain for this load
    pub fn generate_mipmaps(&self) -> bool {
        self.force_mipmap || self.min_filter.uses_mipmaps()
    }
}

/// Configuration for [`TextureManager`](crate::TextureManager)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextureManagerConfig {
    /// Options used by [`TextureManager::load_image`](crate::TextureManager::load_image)
    pub default_options: LoadOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_linear_without_mipmaps() {
        let opts = LoadOptions::default();
        assert_eq!(opts.min_filter, MinFilter::Linear);
        assert_eq!(opts.mag_filter, MagFilter::Linear);
        assert!(!opts.force_mipmap);
        assert!(opts.resize_if_needed);
        assert!(!opts.generate_mipmaps());
    }

    #[test]
    fn mipmapped_min_filter_requests_mipmaps() {
        for filter in [
            MinFilter::NearestMipmapNearest,
            MinFilter::LinearMipmapNearest,
            MinFilter::NearestMipmapLinear,
            MinFilter::LinearMipmapLinear,
        ] {
            assert!(LoadOptions::default().with_min_filter(filter).generate_mipmaps());
        }
        assert!(LoadOptions::default().with_force_mipmap(true).generate_mipmaps());
        assert!(!LoadOptions::default()
            .with_min_filter(MinFilter::Nearest)
            .generate_mipmaps());
    }
}
