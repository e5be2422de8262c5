//! Renders one logo to `img_<w>x<h>.svg` files, one per requested size.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ridgeline_core::{generate, LogoParams, RenderSize};

#[derive(Parser, Debug)]
#[command(name = "render", about = "Render the landscape logo to SVG files")]
struct Args {
    /// Seed; a random one in [0, 999999) is chosen when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with generation parameters (seed, distance, sizes).
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Output sizes as WxH; replaces the sizes from --params.
    #[arg(long = "size", value_parser = parse_size)]
    sizes: Vec<RenderSize>,

    /// Output directory.
    #[arg(short, long, default_value = "data/logo")]
    output: PathBuf,

    /// Also write the generated scene as scene.json.
    #[arg(long)]
    json: bool,
}

fn parse_size(s: &str) -> Result<RenderSize, String> {
    let (w, h) = s.split_once('x').ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let width = w.parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let height = h.parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok(RenderSize { width, height })
}

fn load_params(args: &Args) -> Result<LogoParams> {
    let mut params = match &args.params {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => LogoParams { seed: rand::thread_rng().gen_range(0..999_999), ..LogoParams::default() },
    };
    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    if !args.sizes.is_empty() {
        params.sizes = args.sizes.clone();
    }
    Ok(params)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let params = load_params(&args)?;
    info!(seed = params.seed, "generating logo");

    let result = generate(&params)?;

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for r in &result.renders {
        let path = args.output.join(format!("{}.svg", r.region_id));
        fs::write(&path, &r.svg).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote");
    }
    if args.json {
        let path = args.output.join("scene.json");
        let text = serde_json::to_string_pretty(&result.scene)?;
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote");
    }

    Ok(())
}
