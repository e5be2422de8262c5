//! Samples many seeds and reports how often each theme, sky preset and peak
//! count comes up. Useful for eyeballing the clear-sky bias.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ridgeline_core::palette::{BACKGROUNDS, FAVOURED_BACKGROUND};
use ridgeline_core::{LogoBuilder, Scene};

#[derive(Parser, Debug)]
#[command(name = "survey", about = "Sample seeds and report logo parameter frequencies")]
struct Args {
    /// Number of seeds to sample.
    #[arg(short = 'n', long, default_value_t = 10_000)]
    count: u64,

    /// First seed; seeds are `first + i * stride`.
    #[arg(long, default_value_t = 1)]
    first: u64,

    /// Distance between sampled seeds. Consecutive small seeds share a
    /// near-zero first draw, so a large prime stride is the default.
    #[arg(long, default_value_t = 7_919)]
    stride: u64,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize, Default)]
struct Report {
    samples: u64,
    themes: BTreeMap<&'static str, u64>,
    backgrounds: Vec<u64>,
    peak_counts: BTreeMap<usize, u64>,
    /// Share of samples using the favoured clear-sky preset (uniform would be 0.125).
    favoured_share: f64,
    mean_mid_height: f64,
}

#[derive(Default)]
struct Tally {
    themes: BTreeMap<&'static str, u64>,
    backgrounds: Vec<u64>,
    peak_counts: BTreeMap<usize, u64>,
    mid_height_sum: f64,
}

impl Tally {
    fn new() -> Self {
        Self { backgrounds: vec![0; BACKGROUNDS.len()], ..Self::default() }
    }

    fn add(mut self, scene: &Scene) -> Self {
        *self.themes.entry(scene.theme.name()).or_default() += 1;
        self.backgrounds[scene.background] += 1;
        *self.peak_counts.entry(scene.peaks.len()).or_default() += 1;
        self.mid_height_sum += scene.peaks[scene.peaks.len() / 2].height();
        self
    }

    fn merge(mut self, other: Tally) -> Self {
        for (k, v) in other.themes {
            *self.themes.entry(k).or_default() += v;
        }
        for (a, b) in self.backgrounds.iter_mut().zip(other.backgrounds) {
            *a += b;
        }
        for (k, v) in other.peak_counts {
            *self.peak_counts.entry(k).or_default() += v;
        }
        self.mid_height_sum += other.mid_height_sum;
        self
    }
}

fn survey(first: u64, stride: u64, count: u64) -> Result<Report> {
    let tally = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut logo = LogoBuilder::new(first.wrapping_add(i.wrapping_mul(stride)));
            logo.build()?;
            logo.into_scene()
        })
        .try_fold(Tally::new, |t, scene| scene.map(|s| t.add(&s)))
        .try_reduce(Tally::new, |a, b| Ok(a.merge(b)))?;

    let n = count as f64;
    Ok(Report {
        samples: count,
        favoured_share: tally.backgrounds[FAVOURED_BACKGROUND] as f64 / n,
        mean_mid_height: tally.mid_height_sum / n,
        themes: tally.themes,
        backgrounds: tally.backgrounds,
        peak_counts: tally.peak_counts,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.count == 0 {
        bail!("--count must be at least 1");
    }
    if args.stride == 0 {
        bail!("--stride must be at least 1");
    }

    info!(count = args.count, first = args.first, stride = args.stride, "surveying seeds");
    let report = survey(args.first, args.stride, args.count)?;
    info!(favoured_share = report.favoured_share, "survey complete");

    let json = serde_json::to_string_pretty(&report)?;
    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote report");
        }
        None => println!("{json}"),
    }
    Ok(())
}
