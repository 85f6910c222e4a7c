use image::{Rgb, RgbImage};
use unveil::{FRAME_COUNT, GRAY, Permutation, partition, render_frames};

/// Cell colors for the 9x9 test image, one distinct solid color per cell,
/// none of them the gray fill.
const CELL_COLORS: [Rgb<u8>; 9] = [
    Rgb([255, 0, 0]),
    Rgb([0, 255, 0]),
    Rgb([0, 0, 255]),
    Rgb([255, 255, 0]),
    Rgb([0, 255, 255]),
    Rgb([255, 0, 255]),
    Rgb([255, 255, 255]),
    Rgb([0, 0, 0]),
    Rgb([64, 192, 32]),
];

fn nine_cell_source() -> RgbImage {
    let mut img = RgbImage::new(9, 9);
    for (x, y, p) in img.enumerate_pixels_mut() {
        let cell = (y / 3) * 3 + x / 3;
        *p = CELL_COLORS[cell as usize];
    }
    img
}

/// The set of 0-based cells whose pixels differ from the gray fill.
fn revealed_cells(frame: &RgbImage) -> Vec<usize> {
    let cells = partition(frame.width(), frame.height());
    cells
        .iter()
        .enumerate()
        .filter(|(_, c)| {
            (c.y..c.bottom())
                .flat_map(|y| (c.x..c.right()).map(move |x| (x, y)))
                .any(|(x, y)| *frame.get_pixel(x, y) != GRAY)
        })
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn identity_permutation_reveals_row_major() {
    let src = nine_cell_source();
    let frames = render_frames(&src, &Permutation::identity());
    assert_eq!(frames.len(), FRAME_COUNT);

    assert!(frames[0].pixels().all(|&p| p == GRAY));

    for (k, frame) in frames.iter().enumerate() {
        assert_eq!(
            revealed_cells(frame),
            (0..k).collect::<Vec<_>>(),
            "frame {k}"
        );
    }

    // Frame 1: only the top-left 3x3 block carries source pixels.
    assert_eq!(*frames[1].get_pixel(0, 0), CELL_COLORS[0]);
    assert_eq!(*frames[1].get_pixel(2, 2), CELL_COLORS[0]);
    assert_eq!(*frames[1].get_pixel(3, 0), GRAY);
    assert_eq!(*frames[1].get_pixel(0, 3), GRAY);

    assert_eq!(frames[9].as_raw(), src.as_raw());
}

#[test]
fn reversed_permutation_starts_bottom_right() {
    let src = nine_cell_source();
    let perm = Permutation::parse("9,8,7,6,5,4,3,2,1").unwrap();
    let frames = render_frames(&src, &perm);

    assert_eq!(revealed_cells(&frames[1]), vec![8]);
    assert_eq!(*frames[1].get_pixel(8, 8), CELL_COLORS[8]);
    assert_eq!(*frames[1].get_pixel(0, 0), GRAY);

    // The final frame does not depend on the reveal order.
    assert_eq!(frames[9].as_raw(), src.as_raw());
}

#[test]
fn reveal_grows_by_exactly_one_cell_per_frame() {
    let src = nine_cell_source();
    let perm = Permutation::parse("246813579").unwrap();
    let frames = render_frames(&src, &perm);

    for k in 0..FRAME_COUNT - 1 {
        let a = revealed_cells(&frames[k]);
        let b = revealed_cells(&frames[k + 1]);
        assert_eq!(b.len(), a.len() + 1, "frame {k} -> {}", k + 1);
        assert!(a.iter().all(|c| b.contains(c)), "frame {k} not a subset");
    }
}

#[test]
fn rendering_is_deterministic() {
    let src = nine_cell_source();
    let perm = Permutation::parse("537194826").unwrap();

    let a = render_frames(&src, &perm);
    let b = render_frames(&src, &perm);
    for (fa, fb) in a.iter().zip(&b) {
        assert_eq!(fa.as_raw(), fb.as_raw());
    }
}

#[test]
fn revealed_pixels_are_byte_identical_on_odd_dimensions() {
    // 10x10: 3x3 cells except a 4-wide last column and 4-tall last row.
    let mut src = RgbImage::new(10, 10);
    for (x, y, p) in src.enumerate_pixels_mut() {
        *p = Rgb([(x * 25) as u8, (y * 25) as u8, 99]);
    }

    let perm = Permutation::parse("123456789").unwrap();
    let frames = render_frames(&src, &perm);
    let cells = partition(10, 10);

    // After frame 3 the whole top band is revealed, including the wide cell 3.
    let frame = &frames[3];
    for cell in &cells[..3] {
        for y in cell.y..cell.bottom() {
            for x in cell.x..cell.right() {
                assert_eq!(frame.get_pixel(x, y), src.get_pixel(x, y));
            }
        }
    }
    for cell in &cells[3..] {
        for y in cell.y..cell.bottom() {
            for x in cell.x..cell.right() {
                assert_eq!(*frame.get_pixel(x, y), GRAY);
            }
        }
    }
}
