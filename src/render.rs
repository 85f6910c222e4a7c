use image::{Rgb, RgbImage, imageops};

use crate::{grid::partition, perm::Permutation};

/// Fill color for cells that have not been revealed yet.
pub const GRAY: Rgb<u8> = Rgb([128, 128, 128]);

/// Total frames in the animation: one fully gray frame plus one per cell.
pub const FRAME_COUNT: usize = 10;

pub fn gray_frame(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, GRAY)
}

/// Render the ten reveal frames for `src` in the order given by `perm`.
///
/// Frame 0 is fully gray; frame k shows the first k cells of the
/// permutation copied pixel-exact from the source. Each frame is rebuilt
/// from a fresh gray canvas rather than derived from the previous one, so
/// frames never alias each other's buffers.
#[tracing::instrument(skip_all, fields(width = src.width(), height = src.height()))]
pub fn render_frames(src: &RgbImage, perm: &Permutation) -> Vec<RgbImage> {
    let cells = partition(src.width(), src.height());

    let mut frames = Vec::with_capacity(FRAME_COUNT);
    for revealed in 0..FRAME_COUNT {
        let mut frame = gray_frame(src.width(), src.height());

        for cell_index in perm.cell_indices().take(revealed) {
            let rect = cells[cell_index];
            if rect.is_empty() {
                continue;
            }
            let region =
                imageops::crop_imm(src, rect.x, rect.y, rect.width, rect.height).to_image();
            imageops::replace(&mut frame, &region, i64::from(rect.x), i64::from(rect.y));
        }

        frames.push(frame);
    }

    tracing::debug!(frames = frames.len(), "rendered reveal frames");
    frames
}
