//! Glow (OpenGL) device binding for texture-cache
//!
//! [`GlowDevice`] implements [`TextureDevice`](texture_cache::TextureDevice)
//! with plain `glTexImage2D` uploads, so it works on OpenGL 2.1+ and
//! OpenGL ES 2.0+ (where non power-of-two textures are restricted, which is
//! what the power-of-two canvases of texture-cache are for).
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use texture_cache::{ImageFileDecoder, TextureBackend, TextureManager};
//! use texture_cache_glow::GlowDevice;
//!
//! let gl = unsafe {
//!     glow::Context::from_loader_function(|s| {
//!         // Your OpenGL loader function
//!         std::ptr::null()
//!     })
//! };
//! let device = Arc::new(GlowDevice::new(Arc::new(gl)));
//! let backend = TextureBackend::new(Arc::new(ImageFileDecoder::new()), device);
//!
//! let mut textures = TextureManager::global().lock();
//! textures.set_backend(backend);
//! textures.load_image("assets/grass.png").unwrap();
//! let gl_texture = textures
//!     .get_texture_item("assets/grass.png")
//!     .and_then(|item| item.id())
//!     .and_then(texture_cache_glow::gl_texture);
//! ```

// Re-export glow to make it easier for users to use the correct version.
pub use glow;
use glow::{Context, HasContext};

#[cfg(not(target_arch = "wasm32"))]
mod device;

#[cfg(not(target_arch = "wasm32"))]
pub use device::*;

pub type GlTexture = <Context as HasContext>::Texture;
