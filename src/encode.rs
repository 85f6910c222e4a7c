use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use image::{
    Delay, Frame, RgbImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::error::{UnveilError, UnveilResult};

/// Whether the finished animation plays once or repeats forever.
///
/// Both behaviors exist in the wild for this transform, so the choice is
/// explicit rather than baked in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopPolicy {
    #[default]
    Once,
    Infinite,
}

#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub out_path: PathBuf,
    pub frame_delay_ms: u32,
    pub loop_policy: LoopPolicy,
}

impl EncodeConfig {
    /// Derive the per-frame delay from a total animation duration split
    /// evenly across `frame_count` frames, rounded to whole milliseconds.
    pub fn from_total_duration(
        out_path: impl Into<PathBuf>,
        total_secs: f64,
        frame_count: u32,
    ) -> UnveilResult<Self> {
        if !total_secs.is_finite() || total_secs <= 0.0 {
            return Err(UnveilError::encode(
                "total duration must be a positive number of seconds",
            ));
        }
        if frame_count == 0 {
            return Err(UnveilError::encode("frame count must be non-zero"));
        }

        let cfg = Self {
            out_path: out_path.into(),
            frame_delay_ms: (total_secs * 1000.0 / f64::from(frame_count)).round() as u32,
            loop_policy: LoopPolicy::default(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> UnveilResult<()> {
        if self.frame_delay_ms == 0 {
            return Err(UnveilError::encode("frame delay must be non-zero"));
        }
        Ok(())
    }

    pub fn with_loop_policy(mut self, loop_policy: LoopPolicy) -> Self {
        self.loop_policy = loop_policy;
        self
    }

    pub fn with_out_path(mut self, out_path: impl Into<PathBuf>) -> Self {
        self.out_path = out_path.into();
        self
    }
}

fn ensure_parent_dir(path: &Path) -> UnveilResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            UnveilError::encode(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

/// Write `frames` as an animated GIF at `cfg.out_path`.
///
/// The file is written in place; if encoding fails partway a partial file
/// may be left behind.
pub fn write_gif(frames: &[RgbImage], cfg: &EncodeConfig) -> UnveilResult<()> {
    cfg.validate()?;

    let Some(first) = frames.first() else {
        return Err(UnveilError::encode("no frames to encode"));
    };
    if frames
        .iter()
        .any(|f| f.dimensions() != first.dimensions())
    {
        return Err(UnveilError::encode("all frames must share one size"));
    }

    ensure_parent_dir(&cfg.out_path)?;
    let file = File::create(&cfg.out_path).map_err(|e| {
        UnveilError::encode(format!(
            "failed to create '{}': {e}",
            cfg.out_path.display()
        ))
    })?;

    let mut encoder = GifEncoder::new(BufWriter::new(file));
    if cfg.loop_policy == LoopPolicy::Infinite {
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| UnveilError::encode(format!("failed to set loop behavior: {e}")))?;
    }

    for frame in frames {
        let rgba = image::DynamicImage::ImageRgb8(frame.clone()).into_rgba8();
        let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms, 1);
        encoder
            .encode_frame(Frame::from_parts(rgba, 0, 0, delay))
            .map_err(|e| {
                UnveilError::encode(format!(
                    "failed to write frame to '{}': {e}",
                    cfg.out_path.display()
                ))
            })?;
    }

    Ok(())
}
