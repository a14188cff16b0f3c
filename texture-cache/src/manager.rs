//! The texture registry

use crate::{
    ImageDecoder, LoadOptions, TextureDevice, TextureError, TextureItem, TextureManagerConfig,
    TextureResult,
};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Mutex<TextureManager>> = OnceLock::new();

/// The decoder and device used to load textures
#[derive(Clone)]
pub struct TextureBackend {
    decoder: Arc<dyn ImageDecoder>,
    device: Arc<dyn TextureDevice>,
}

impl TextureBackend {
    pub fn new(decoder: Arc<dyn ImageDecoder>, device: Arc<dyn TextureDevice>) -> Self {
        Self { decoder, device }
    }

    pub fn decoder(&self) -> &Arc<dyn ImageDecoder> {
        &self.decoder
    }

    pub fn device(&self) -> &Arc<dyn TextureDevice> {
        &self.device
    }
}

impl fmt::Debug for TextureBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureBackend").finish_non_exhaustive()
    }
}

/// Registry of textures keyed by image name
///
/// The manager owns every [`TextureItem`]; lookups hand out borrows only, so
/// an item can never outlive its removal. Images are loaded at most once:
/// asking for an image that is already loaded returns immediately.
///
/// Unloaded images keep their entry. Requesting them again reloads them, so
/// the application decides how long textures occupy device memory.
///
/// One instance per process is available through [`global`](Self::global).
/// Separate instances can be created with [`new`](Self::new), e.g. one per
/// graphics context.
#[derive(Debug, Default)]
pub struct TextureManager {
    items: BTreeMap<String, TextureItem>,
    backend: Option<TextureBackend>,
    config: TextureManagerConfig,
}

impl TextureManager {
    /// Create an empty manager without a backend
    ///
    /// Images can be registered right away; loading needs
    /// [`set_backend`](Self::set_backend) first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager loading through `backend`
    pub fn with_backend(backend: TextureBackend) -> Self {
        Self {
            backend: Some(backend),
            ..Self::default()
        }
    }

    /// The process-wide manager, created empty on first access
    ///
    /// The lock covers a whole operation, so the loaded check and the load
    /// itself happen atomically for every caller. Statics are never dropped;
    /// call [`shutdown`](Self::shutdown) before the graphics context goes away.
    pub fn global() -> &'static Mutex<TextureManager> {
        GLOBAL.get_or_init(|| {
            tex_info!("Creating process-wide texture manager");
            Mutex::new(TextureManager::new())
        })
    }

    pub fn backend(&self) -> Option<&TextureBackend> {
        self.backend.as_ref()
    }

    /// Set the backend used by later loads. Already loaded textures keep
    /// releasing through the device that allocated them.
    pub fn set_backend(&mut self, backend: TextureBackend) {
        self.backend = Some(backend);
    }

    pub fn config(&self) -> &TextureManagerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TextureManagerConfig) {
        self.config = config;
    }

    /// Register an image without loading it
    ///
    /// Returns `false` if the name is already registered; the existing entry
    /// is left alone.
    pub fn add_image(&mut self, image_name: &str) -> bool {
        if self.items.contains_key(image_name) {
            return false;
        }
        self.items
            .insert(image_name.to_owned(), TextureItem::new(image_name));
        tex_trace!("Registered `{}`", image_name);
        true
    }

    /// Unload and forget an image
    ///
    /// Returns `Ok(false)` if the name is not registered. If the device fails
    /// to release the texture the entry is kept and the error returned.
    pub fn remove_image(&mut self, image_name: &str) -> TextureResult<bool> {
        let Some(item) = self.items.get_mut(image_name) else {
            return Ok(false);
        };
        item.unload()?;
        self.items.remove(image_name);
        tex_debug!("Removed `{}`", image_name);
        Ok(true)
    }

    /// Load an image with the configured default options
    ///
    /// See [`load_image_with`](Self::load_image_with).
    pub fn load_image(&mut self, image_name: &str) -> TextureResult<()> {
        let options = self.config.default_options;
        self.load_image_with(image_name, &options)
    }

    /// Load an image, registering it first if needed
    ///
    /// An image that is already loaded is not loaded again. A failed load
    /// leaves the image registered, so it can simply be retried.
    pub fn load_image_with(&mut self, image_name: &str, options: &LoadOptions) -> TextureResult<()> {
        let item = self
            .items
            .entry(image_name.to_owned())
            .or_insert_with(|| {
                tex_trace!("Registered `{}`", image_name);
                TextureItem::new(image_name)
            });
        if item.is_loaded() {
            return Ok(());
        }
        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| TextureError::no_backend(image_name))?;
        item.load(backend, options)
    }

    /// Release the device texture of an image but keep it registered
    ///
    /// Returns `Ok(false)` if the name is not registered.
    pub fn unload_image(&mut self, image_name: &str) -> TextureResult<bool> {
        match self.items.get_mut(image_name) {
            Some(item) => item.unload().map(|()| true),
            None => Ok(false),
        }
    }

    /// Unload every loaded image, returning how many were unloaded
    ///
    /// Stops at the first release failure; images after it stay loaded.
    pub fn unload_all(&mut self) -> TextureResult<usize> {
        let mut count = 0;
        for item in self.items.values_mut().filter(|item| item.is_loaded()) {
            item.unload()?;
            count += 1;
        }
        if count > 0 {
            tex_debug!("Unloaded {} textures", count);
        }
        Ok(count)
    }

    /// Unload and remove every image
    ///
    /// Images whose release fails stay registered and loaded, and the first
    /// such error is returned; calling `shutdown` again retries them.
    pub fn shutdown(&mut self) -> TextureResult<()> {
        let mut first_error = None;
        self.items.retain(|_, item| match item.unload() {
            Ok(()) => false,
            Err(err) => {
                first_error.get_or_insert(err);
                true
            }
        });
        match first_error {
            Some(err) => {
                tex_warn!(
                    "Shutdown kept {} textures the device did not release",
                    self.items.len()
                );
                Err(err)
            }
            None => {
                tex_info!("Texture manager shut down");
                Ok(())
            }
        }
    }

    /// Look up an image. Does not load it.
    pub fn get_texture_item(&self, texture_name: &str) -> Option<&TextureItem> {
        self.items.get(texture_name)
    }

    /// Look up an image for loading or unloading it directly
    pub fn get_texture_item_mut(&mut self, texture_name: &str) -> Option<&mut TextureItem> {
        self.items.get_mut(texture_name)
    }

    pub fn contains(&self, image_name: &str) -> bool {
        self.items.contains_key(image_name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of images currently on the device
    pub fn loaded_count(&self) -> usize {
        self.items.values().filter(|item| item.is_loaded()).count()
    }

    /// Iterate over all images in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TextureItem)> {
        self.items.iter().map(|(name, item)| (name.as_str(), item))
    }
}
