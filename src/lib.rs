#![forbid(unsafe_code)]

pub mod encode;
pub mod error;
pub mod grid;
pub mod perm;
pub mod pipeline;
pub mod render;

pub use encode::{EncodeConfig, LoopPolicy, write_gif};
pub use error::{UnveilError, UnveilResult};
pub use grid::{CellRect, partition};
pub use perm::Permutation;
pub use pipeline::{load_rgb, unveil_to_gif};
pub use render::{FRAME_COUNT, GRAY, gray_frame, render_frames};
