//! Load-once texture registry for real-time renderers
//!
//! This crate keeps track of GPU textures by image name. Each distinct image
//! file is decoded and uploaded at most once; renderers look textures up by
//! name, and pixel memory can be reclaimed by unloading a texture while its
//! metadata stays registered for an on-demand reload.
//!
//! # Features
//!
//! - **Single loading**: [`TextureManager`] creates a [`TextureItem`] per image
//!   name and loading an already loaded item is a no-op
//! - **Unload / reload**: dimensions survive an unload, the device texture does not
//! - **Power-of-two canvases**: non power-of-two images are placed in the
//!   top-left corner of the next power-of-two canvas for older hardware
//! - **Pluggable collaborators**: decoding goes through [`ImageDecoder`] and
//!   device calls through [`TextureDevice`]
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use texture_cache::{ImageFileDecoder, LoadOptions, MinFilter, TextureBackend, TextureManager};
//! # fn device() -> Arc<dyn texture_cache::TextureDevice> { unimplemented!() }
//!
//! let backend = TextureBackend::new(Arc::new(ImageFileDecoder::new()), device());
//!
//! let mut textures = TextureManager::global().lock();
//! textures.set_backend(backend);
//! textures.load_image("assets/grass.png").unwrap();
//! textures
//!     .load_image_with(
//!         "assets/font.png",
//!         &LoadOptions::default().with_min_filter(MinFilter::LinearMipmapLinear),
//!     )
//!     .unwrap();
//!
//! let grass = textures.get_texture_item("assets/grass.png").unwrap();
//! assert!(grass.is_loaded());
//! ```

#[macro_use]
mod logging;

mod canvas;
mod decoder;
mod device;
mod error;
mod item;
mod manager;
mod options;

pub use canvas::*;
pub use decoder::*;
pub use device::*;
pub use error::*;
pub use item::*;
pub use logging::init_tracing;
pub use manager::*;
pub use options::*;
