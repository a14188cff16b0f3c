//! The process-wide manager
//!
//! Kept in its own test binary so no other test touches the shared instance.

mod common;

use texture_cache::TextureManager;

#[test]
fn global_instance_is_created_once_and_shared() {
    assert!(std::ptr::eq(
        TextureManager::global(),
        TextureManager::global()
    ));

    let (backend, decoder, device) = common::backend();
    decoder.insert("shared.png", 10, 10);

    {
        let mut textures = TextureManager::global().lock();
        assert!(textures.is_empty());
        textures.set_backend(backend);
        textures.load_image("shared.png").unwrap();
    }

    // a second thread sees the same registry
    std::thread::spawn(|| {
        let textures = TextureManager::global().lock();
        let item = textures.get_texture_item("shared.png").unwrap();
        assert!(item.is_loaded());
        assert_eq!(item.size(), (16, 16));
    })
    .join()
    .unwrap();

    TextureManager::global().lock().shutdown().unwrap();
    assert!(TextureManager::global().lock().is_empty());
    assert!(device.live().is_empty());
}
