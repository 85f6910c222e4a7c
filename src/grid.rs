/// One cell of the 3x3 partition, in source-image pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub fn right(self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(self) -> u32 {
        self.y + self.height
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(self, px: u32, py: u32) -> bool {
        self.x <= px && px < self.right() && self.y <= py && py < self.bottom()
    }
}

/// Partition a `width` x `height` image into nine cells in row-major order
/// (top-left to bottom-right).
///
/// Rows and columns 0 and 1 are `floor(dim / 3)` pixels; the last row and
/// column absorb any remainder, so the cells tile the image exactly.
/// Dimensions below 3 yield zero-sized cells and are accepted as-is.
pub fn partition(width: u32, height: u32) -> [CellRect; 9] {
    let cell_w = width / 3;
    let cell_h = height / 3;

    std::array::from_fn(|i| {
        let row = (i as u32) / 3;
        let col = (i as u32) % 3;

        let x = col * cell_w;
        let y = row * cell_h;
        let w = if col < 2 { cell_w } else { width - x };
        let h = if row < 2 { cell_h } else { height - y };

        CellRect {
            x,
            y,
            width: w,
            height: h,
        }
    })
}
