use crate::Outcome;
use std::path::Path;

/// Side length, in points, of the picture on the main window.
pub const PICTURE_SIDE: u32 = 140;

/// Reads the image at `path` into RGBA pixels.
///
/// Will [`crate::Fault::Image`] if the file is missing or is not a PNG we can decode.
pub fn rgba(path: &Path) -> Outcome<image::RgbaImage> {
    let source = image::open(path)?;
    Ok(source.to_rgba8())
}

/// Builds a window icon from the image at `path`.  Returns [`None`] if the image will not load,
/// and the window goes without an icon.
#[tracing::instrument(skip_all)]
pub fn icon(path: &Path) -> Option<egui::IconData> {
    match rgba(path) {
        Ok(pixels) => {
            let (width, height) = pixels.dimensions();
            tracing::trace!("Icon loaded from {}", path.display());
            Some(egui::IconData {
                rgba: pixels.into_raw(),
                width,
                height,
            })
        }
        Err(e) => {
            tracing::warn!("No icon: {e}");
            None
        }
    }
}

/// Loads the image at `path` and scales it to `side` by `side` pixels with a smooth filter.
pub fn picture(path: &Path, side: u32) -> Outcome<egui::ColorImage> {
    let source = image::open(path)?;
    let scaled = source
        .resize_exact(side, side, image::imageops::FilterType::Lanczos3)
        .to_rgba8();
    let size = [scaled.width() as usize, scaled.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, scaled.as_raw()))
}

/// Uploads the picture at `path` as a texture.  Returns [`None`] if the image will not load, and
/// the main window shows no picture.
#[tracing::instrument(skip_all)]
pub fn texture(ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
    match picture(path, PICTURE_SIDE) {
        Ok(image) => {
            tracing::trace!("Picture loaded from {}", path.display());
            Some(ctx.load_texture("picture", image, egui::TextureOptions::LINEAR))
        }
        Err(e) => {
            tracing::warn!("No picture: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(name: &str) -> std::path::PathBuf {
        let path = crate::utils::scratch(name);
        let board = image::RgbaImage::from_fn(4, 4, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgba([255, 255, 255, 255])
            } else {
                image::Rgba([0, 0, 0, 255])
            }
        });
        board.save(&path).unwrap();
        path
    }

    #[test]
    fn missing_image_means_no_icon() {
        assert!(icon(Path::new("no/such/image.png")).is_none());
    }

    #[test]
    fn icon_keeps_dimensions() {
        let path = checkerboard("icon.png");
        let icon = icon(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!((icon.width, icon.height), (4, 4));
        assert_eq!(icon.rgba.len(), 4 * 4 * 4);
    }

    #[test]
    fn picture_is_scaled() {
        let path = checkerboard("picture.png");
        let picture = picture(&path, 10).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(picture.size, [10, 10]);
    }
}
