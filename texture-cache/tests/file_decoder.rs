#![cfg(feature = "image")]

mod common;

use std::sync::Arc;
use texture_cache::{ImageFileDecoder, TextureBackend, TextureError, TextureManager};

#[test]
fn loads_png_files_from_disk() {
    use image::{Rgba, RgbaImage};

    let dir = std::env::temp_dir().join("texture-cache-tests");
    let _ = std::fs::create_dir_all(&dir);
    let path = dir.join("banner_100x50.png");
    RgbaImage::from_pixel(100, 50, Rgba([1, 2, 3, 255]))
        .save(&path)
        .unwrap();

    let device = Arc::new(common::RecordingDevice::default());
    let backend = TextureBackend::new(Arc::new(ImageFileDecoder::new()), device.clone());
    let mut textures = TextureManager::with_backend(backend);

    let name = path.to_str().unwrap();
    textures.load_image(name).unwrap();

    let item = textures.get_texture_item(name).unwrap();
    assert_eq!(item.original_size(), (100, 50));
    assert_eq!(item.size(), (128, 64));
    assert_eq!(device.last_upload(), Some((128, 64, false)));

    let missing = dir.join("no_such_file.png");
    let err = textures.load_image(missing.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, TextureError::Decode { .. }));
}
