use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

/// EXIF orientation of a JPEG, 1 (upright) when absent or unreadable.
pub fn exif_orientation(bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!("No EXIF orientation: {}", e);
            1
        }
    }
}

/// Loads an avatar portrait, turning it upright according to its EXIF data.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read avatar {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // Only JPEG carries reliable orientation data
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow!("Failed to decode avatar {}: {}", image_path.display(), e))?;

    // 1 = upright, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Mirrored variants are drawn as is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        1 => {}
        other => warn!(orientation = other, "Ignoring mirrored EXIF orientation"),
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to upload avatar {}: {}", image_path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_exif_means_upright() {
        assert_eq!(exif_orientation(b"not an image"), 1);
        assert_eq!(exif_orientation(&[]), 1);
    }
}
