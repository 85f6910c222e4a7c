use std::path::PathBuf;

use clap::Parser;
use unveil::{EncodeConfig, FRAME_COUNT, LoopPolicy, Permutation, unveil_to_gif};

/// Create a GIF that starts fully gray and reveals the input image one
/// ninth at a time, over a 3x3 grid, in the order you choose.
#[derive(Parser, Debug)]
#[command(name = "unveil", version)]
struct Cli {
    /// Input image (PNG, JPG, or anything else the image crate decodes).
    image: PathBuf,

    /// Reveal order for the nine grid cells, numbered 1-9 row-major.
    /// Accepted forms: "123546789", "1,2,3,5,4,6,7,8,9", "1 2 3 5 4 6 7 8 9".
    permutation: String,

    /// Output GIF path (default: input path with a .gif extension).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Total animation duration in seconds, split evenly across the 10 frames.
    #[arg(short, long, default_value_t = 12.0)]
    duration: f64,

    /// Loop the animation forever instead of playing it once.
    #[arg(long = "loop")]
    loop_forever: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Validate the permutation before touching the image at all.
    let perm = Permutation::parse(&cli.permutation)?;

    let out_path = cli
        .output
        .unwrap_or_else(|| cli.image.with_extension("gif"));

    let loop_policy = if cli.loop_forever {
        LoopPolicy::Infinite
    } else {
        LoopPolicy::Once
    };
    let cfg = EncodeConfig::from_total_duration(out_path, cli.duration, FRAME_COUNT as u32)?
        .with_loop_policy(loop_policy);

    unveil_to_gif(&cli.image, &perm, &cfg)?;

    eprintln!("wrote {}", cfg.out_path.display());
    Ok(())
}
