//! In-memory decoder and device shared by the integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;
use texture_cache::{
    DecodeError, DecodedImage, DeviceError, DeviceHandle, ImageDecoder, TextureBackend,
    TextureDevice, TextureUpload,
};

/// Decoder serving solid-color images registered by name
#[derive(Default)]
pub struct MemoryDecoder {
    images: Mutex<HashMap<String, (u32, u32)>>,
    decodes: Mutex<usize>,
}

impl MemoryDecoder {
    pub fn insert(&self, name: &str, width: u32, height: u32) {
        self.images.lock().insert(name.to_owned(), (width, height));
    }

    pub fn decodes(&self) -> usize {
        *self.decodes.lock()
    }
}

impl ImageDecoder for MemoryDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, DecodeError> {
        *self.decodes.lock() += 1;
        let key = path.to_string_lossy();
        let (width, height) = self
            .images
            .lock()
            .get(&*key)
            .copied()
            .ok_or_else(|| DecodeError::Other(format!("no such image: {key}")))?;
        Ok(DecodedImage {
            width,
            height,
            rgba: vec![0x80; width as usize * height as usize * 4],
        })
    }
}

/// Device recording allocations, with switchable failures
#[derive(Default)]
pub struct RecordingDevice {
    next: Mutex<u64>,
    live: Mutex<BTreeSet<DeviceHandle>>,
    allocations: Mutex<usize>,
    last_upload: Mutex<Option<(u32, u32, bool)>>,
    fail_allocate: Mutex<bool>,
    fail_release: Mutex<bool>,
}

impl RecordingDevice {
    pub fn allocations(&self) -> usize {
        *self.allocations.lock()
    }

    pub fn live(&self) -> BTreeSet<DeviceHandle> {
        self.live.lock().clone()
    }

    pub fn is_live(&self, handle: DeviceHandle) -> bool {
        self.live.lock().contains(&handle)
    }

    /// Width, height and mipmap flag of the last successful upload
    pub fn last_upload(&self) -> Option<(u32, u32, bool)> {
        *self.last_upload.lock()
    }

    pub fn set_fail_allocate(&self, fail: bool) {
        *self.fail_allocate.lock() = fail;
    }

    pub fn set_fail_release(&self, fail: bool) {
        *self.fail_release.lock() = fail;
    }
}

impl TextureDevice for RecordingDevice {
    fn allocate(&self, upload: &TextureUpload<'_>) -> Result<DeviceHandle, DeviceError> {
        if *self.fail_allocate.lock() {
            return Err(DeviceError::CreateTexture("out of memory".into()));
        }
        assert_eq!(
            upload.pixels.len(),
            upload.width as usize * upload.height as usize * 4
        );
        let mut next = self.next.lock();
        *next += 1;
        let handle = DeviceHandle::from_raw(*next).unwrap();
        self.live.lock().insert(handle);
        *self.allocations.lock() += 1;
        *self.last_upload.lock() = Some((upload.width, upload.height, upload.generate_mipmaps));
        Ok(handle)
    }

    fn release(&self, handle: DeviceHandle) -> Result<(), DeviceError> {
        if *self.fail_release.lock() {
            return Err(DeviceError::Release("context lost".into()));
        }
        assert!(self.live.lock().remove(&handle), "released {handle} twice");
        Ok(())
    }
}

pub fn backend() -> (TextureBackend, Arc<MemoryDecoder>, Arc<RecordingDevice>) {
    let decoder = Arc::new(MemoryDecoder::default());
    let device = Arc::new(RecordingDevice::default());
    let backend = TextureBackend::new(decoder.clone(), device.clone());
    (backend, decoder, device)
}
