use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader, RgbImage, metadata::Orientation};

use crate::{
    encode::{EncodeConfig, write_gif},
    error::{UnveilError, UnveilResult},
    perm::Permutation,
    render::render_frames,
};

/// Decode `path` into an RGB8 image, honoring any EXIF orientation so
/// photos from phone cameras are not rendered sideways.
pub fn load_rgb(path: &Path) -> UnveilResult<RgbImage> {
    if !path.exists() {
        return Err(UnveilError::FileNotFound(path.to_path_buf()));
    }

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| UnveilError::decode(format!("failed to open '{}': {e}", path.display())))?;

    let mut decoder = reader
        .into_decoder()
        .map_err(|e| UnveilError::decode(format!("'{}' is not a readable image: {e}", path.display())))?;

    // A missing or unreadable EXIF block is not fatal.
    let orientation = decoder
        .orientation()
        .unwrap_or(Orientation::NoTransforms);

    let mut img = DynamicImage::from_decoder(decoder)
        .map_err(|e| UnveilError::decode(format!("failed to decode '{}': {e}", path.display())))?;
    img.apply_orientation(orientation);

    Ok(img.into_rgb8())
}

/// Run the whole transform: decode the source image, render the ten
/// reveal frames in permutation order, and encode them as a GIF.
#[tracing::instrument(skip(perm, cfg), fields(out = %cfg.out_path.display()))]
pub fn unveil_to_gif(input: &Path, perm: &Permutation, cfg: &EncodeConfig) -> UnveilResult<()> {
    let src = load_rgb(input)?;
    tracing::debug!(width = src.width(), height = src.height(), "decoded source image");

    let frames = render_frames(&src, perm);
    write_gif(&frames, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_input_reports_file_not_found() {
        let err = load_rgb(Path::new("target/does/not/exist.png")).unwrap_err();
        assert!(matches!(err, UnveilError::FileNotFound(_)));
    }

    #[test]
    fn non_image_input_reports_decode_error() {
        let dir = PathBuf::from("target").join("pipeline_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("not_an_image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_rgb(&path).unwrap_err();
        assert!(matches!(err, UnveilError::Decode(_)));
    }
}
