//! Ridge geometry: peak sequences, the ridge outline and its highlight slivers.
//!
//! A ridge always spans 100 horizontal units. Each peak is an `(up, down)` pair of
//! relative moves; the outline draws them all in order, and every peak also gets
//! a thin highlight sliver anchored at its own apex.

pub mod path;

use serde::Serialize;
use tracing::debug;

use crate::error::{LogoError, Result};
use crate::rng::ParkMiller;
pub use path::{PathCommand, PathData, Vec2};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Horizontal extent of a ridge in viewport units.
pub const RIDGE_WIDTH: f64 = 100.0;
/// Minimum width of one up or down leg.
pub const MIN_SEPARATION: f64 = 10.0;
/// Y of the viewport floor every shape is anchored to.
pub const FLOOR_Y: f64 = 100.0;
pub const MIN_PEAKS: u32 = 2;
pub const MAX_PEAKS: u32 = 7;

/// Divisor applied to the leading (background) peaks.
///
/// Historically derived from two draws compared with `<= 5`, which always hold
/// for values in `[0, 1)`, so the factor never left 1.75. The draws are still
/// consumed by [`vestigial_frequency_factor`] to keep seeds reproducible.
pub const FREQUENCY_FACTOR: f64 = 1.75;

/// Drop multiplier for leading peaks; makes their descent negligible.
const LEADING_DROP_SCALE: f64 = 0.04;

/// Notch appended to roughly a third of the highlight closing edges.
const NOTCH: [Vec2; 3] = [Vec2::new(-10.0, 0.0), Vec2::new(-8.0, -10.0), Vec2::new(-0.5, -5.0)];
const NOTCH_CHANCE: f64 = 0.33;

// ── Types ─────────────────────────────────────────────────────────────────────

/// One mountain spike: an ascent followed by a descent, both relative.
/// `up.y` is negative (upward), `down.y` non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Peak {
    pub up: Vec2,
    pub down: Vec2,
}

impl Peak {
    /// Horizontal footprint of the whole spike.
    pub fn width(&self) -> f64 {
        self.up.x + self.down.x
    }

    pub fn height(&self) -> f64 {
        -self.up.y
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MountainShape {
    pub path: PathData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillRule {
    EvenOdd,
}

impl FillRule {
    pub fn as_str(self) -> &'static str {
        match self {
            FillRule::EvenOdd => "evenodd",
        }
    }
}

/// Sliver overlaid near a peak apex. Its colour comes from the scene theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightShape {
    pub path: PathData,
    pub fill_rule: FillRule,
}

// ── Separation ────────────────────────────────────────────────────────────────

/// Split `total` into `parts` random widths that sum to `total`.
///
/// Each value is `draw * (total - min * parts) / sum(draws) + min`. Every width
/// is at least `min` only while `min * parts <= total`; past that (six or seven
/// peaks) the remainder is negative and larger draws give narrower legs, but
/// the widths still sum to `total`.
pub fn generate_separation(rng: &mut ParkMiller, total: f64, parts: usize, min: f64) -> Result<Vec<f64>> {
    if parts == 0 {
        return Err(LogoError::DegenerateDistribution { parts });
    }
    let remainder = total - min * parts as f64;
    if remainder < 0.0 {
        debug!(parts, min, remainder, "separation floor exceeds total");
    }

    let draws: Vec<f64> = (0..parts).map(|_| rng.next_f64()).collect();
    let sum: f64 = draws.iter().sum();
    if sum == 0.0 || !sum.is_finite() {
        return Err(LogoError::DegenerateDistribution { parts });
    }

    let scale = remainder / sum;
    Ok(draws.into_iter().map(|d| d * scale + min).collect())
}

// ── Peaks ─────────────────────────────────────────────────────────────────────

/// Peak count in `[MIN_PEAKS, MAX_PEAKS]`.
pub fn peak_count(rng: &mut ParkMiller) -> u32 {
    rng.random_int(MAX_PEAKS - MIN_PEAKS + 1) + MIN_PEAKS
}

/// Consumes the two draws the frequency factor used to depend on.
fn vestigial_frequency_factor(rng: &mut ParkMiller) -> f64 {
    rng.next_f64();
    rng.next_f64();
    FREQUENCY_FACTOR
}

/// Build one ridge worth of peaks.
///
/// Leading peaks (`i < n/3`) are shrunk by [`FREQUENCY_FACTOR`] and barely
/// descend; trailing peaks (`i > n/3`) are flattened; the middle peak
/// (`i == n/2`) is always a small spike of height 8 to 14.
pub fn build_peaks(rng: &mut ParkMiller) -> Result<Vec<Peak>> {
    let n = peak_count(rng);
    let seps = generate_separation(rng, RIDGE_WIDTH, n as usize * 2, MIN_SEPARATION)?;

    let mid = n / 2;
    let third = f64::from(n) / 3.0;
    let amp = if n < 6 { 0.15 } else { 0.05 };

    let peaks: Vec<Peak> = seps
        .chunks_exact(2)
        .zip(0..n)
        .map(|(legs, i)| {
            let base = rng.random_int(5) + 35;
            let mut height = f64::from(base);
            let mut descent = f64::from(rng.random_int(base));
            let f = vestigial_frequency_factor(rng);

            let fi = f64::from(i);
            if fi < third {
                height /= f;
                descent *= LEADING_DROP_SCALE;
            } else if fi > third {
                height *= amp;
            }
            if i == mid {
                height = f64::from(rng.random_int(7) + 8);
            }

            Peak {
                up: Vec2::new(legs[0], -height),
                down: Vec2::new(legs[1], descent),
            }
        })
        .collect();
    Ok(peaks)
}

// ── Shapes ────────────────────────────────────────────────────────────────────

/// Pen state threaded through the peaks while building highlights: the moves
/// that reposition the pen at the current peak, and the absolute x reached so
/// far.
#[derive(Debug, Default)]
struct PenOffset {
    moves: Vec<PathCommand>,
    left: f64,
}

impl PenOffset {
    fn advance(&mut self, peak: &Peak) {
        self.moves.push(PathCommand::MoveBy(peak.up));
        self.moves.push(PathCommand::MoveBy(peak.down));
        self.left += peak.width();
    }
}

fn base_path(distance: f64) -> PathData {
    let mut path = PathData::new();
    path.push(PathCommand::MoveTo(Vec2::new(0.0, FLOOR_Y)))
        .push(PathCommand::VerticalBy(-distance));
    path
}

/// Closing x of a highlight: the peak's end shifted left by 30–39 or right by
/// 10–19 units.
fn ragged_close(rng: &mut ParkMiller, left: f64) -> f64 {
    if rng.chance(0.5) {
        left - f64::from(30 + rng.random_int(10))
    } else {
        left + f64::from(10 + rng.random_int(10))
    }
}

fn highlight(rng: &mut ParkMiller, pen: &PenOffset, peak: &Peak, distance: f64) -> HighlightShape {
    let notched = rng.chance(NOTCH_CHANCE);
    let close_x = ragged_close(rng, pen.left + peak.width());

    let mut path = base_path(distance);
    path.extend(pen.moves.iter().copied())
        .push(PathCommand::MoveBy(peak.up))
        .push(PathCommand::LineBy(peak.down))
        .push(PathCommand::LineTo(Vec2::new(close_x, FLOOR_Y)));
    if notched {
        path.extend(NOTCH.iter().copied().map(PathCommand::LineBy));
    }
    path.push(PathCommand::Close);

    HighlightShape { path, fill_rule: FillRule::EvenOdd }
}

/// Ridge outline plus one highlight per peak, in peak order.
///
/// The ridge starts `distance` units above the floor at x = 0 and closes back
/// down to the floor.
pub fn build_shapes(rng: &mut ParkMiller, peaks: &[Peak], distance: f64) -> (MountainShape, Vec<HighlightShape>) {
    let mut outline = base_path(distance);
    let mut highlights = Vec::with_capacity(peaks.len());

    let mut pen = PenOffset::default();
    for peak in peaks {
        outline
            .push(PathCommand::LineBy(peak.up))
            .push(PathCommand::LineBy(peak.down));
        highlights.push(highlight(rng, &pen, peak, distance));
        pen.advance(peak);
    }
    outline.push(PathCommand::VerticalTo(FLOOR_Y)).push(PathCommand::Close);

    (MountainShape { path: outline }, highlights)
}
