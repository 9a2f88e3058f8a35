/// Product pictures, with a flat tile for pictures that are not on disk
use iced::widget::image::Handle;
use std::path::Path;
use std::sync::OnceLock;

/// Size of the placeholder tile in pixels
const TILE_WIDTH: u32 = 4;
const TILE_HEIGHT: u32 = 3;

/// Pale orange, RGBA
const TILE_COLOR: [u8; 4] = [0xff, 0xd8, 0xb0, 0xff];

/// Handle for the picture at `path`, or the shared placeholder when the
/// file does not exist
pub fn product_image(path: &str) -> Handle {
    if Path::new(path).is_file() {
        Handle::from_path(path)
    } else {
        placeholder()
    }
}

/// One handle for every missing picture so the renderer uploads it once
fn placeholder() -> Handle {
    static PLACEHOLDER: OnceLock<Handle> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| Handle::from_rgba(TILE_WIDTH, TILE_HEIGHT, tile_pixels()))
        .clone()
}

fn tile_pixels() -> Vec<u8> {
    TILE_COLOR.repeat((TILE_WIDTH * TILE_HEIGHT) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_tile_pixels() {
        let pixels = tile_pixels();
        assert_eq!(pixels.len(), (TILE_WIDTH * TILE_HEIGHT * 4) as usize);
        assert_eq!(&pixels[..4], &TILE_COLOR);
    }

    #[test]
    fn test_missing_file_uses_placeholder() {
        let handle = product_image("assets/images/does-not-exist.jpg");
        assert!(matches!(handle, Handle::Rgba { .. }));
        assert_eq!(handle.id(), placeholder().id());
    }

    #[test]
    fn test_existing_file_is_loaded_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mango.jpg");
        std::fs::write(&path, b"not really a jpeg").unwrap();

        let handle = product_image(path.to_str().unwrap());
        assert!(matches!(handle, Handle::Path(..)));
    }
}
