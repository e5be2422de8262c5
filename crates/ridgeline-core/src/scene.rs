//! Scene composer: one full generation run from a seeded stream.

use serde::Serialize;
use tracing::debug;

use crate::error::{LogoError, Result};
use crate::geometry::{build_peaks, build_shapes, HighlightShape, MountainShape, Peak};
use crate::palette::{self, GradientStop, Theme};
use crate::rng::ParkMiller;
use crate::svg;

/// Vertical offset of the ridge base above the floor.
pub const DEFAULT_DISTANCE: f64 = 10.0;

pub const FONT_FAMILY: &str = "Roboto";

/// Fixed, non-random caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub content: &'static str,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub bold: bool,
    pub font_family: &'static str,
}

fn caption() -> Vec<TextLabel> {
    vec![
        TextLabel { content: "WESTERN", x: 5.0, y: 70.0, font_size: 20.0, bold: false, font_family: FONT_FAMILY },
        TextLabel { content: "SIBERIA", x: 15.0, y: 90.0, font_size: 20.0, bold: true, font_family: FONT_FAMILY },
    ]
}

/// Everything needed to serialise the logo at any size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub peaks: Vec<Peak>,
    pub mountains: Vec<MountainShape>,
    pub highlights: Vec<HighlightShape>,
    pub labels: Vec<TextLabel>,
    pub theme: Theme,
    /// Index into [`palette::BACKGROUNDS`].
    pub background: usize,
    pub stops: &'static [GradientStop],
}

impl Scene {
    /// Draw a fresh scene from `rng`.
    ///
    /// Draw order: ridge geometry, then theme, then background.
    pub fn generate(rng: &mut ParkMiller, distance: f64) -> Result<Scene> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(LogoError::InvalidDistance(distance));
        }

        let peaks = build_peaks(rng)?;
        let (mountain, highlights) = build_shapes(rng, &peaks, distance);

        let theme = Theme::pick(rng);
        let background = palette::pick_background(rng);
        let stops = palette::background(background)?;

        debug!(peaks = peaks.len(), %theme, background, "scene generated");
        Ok(Scene {
            peaks,
            mountains: vec![mountain],
            highlights,
            labels: caption(),
            theme,
            background,
            stops,
        })
    }
}

/// Owns the random stream and the most recently built scene.
///
/// ```ignore
/// let mut logo = LogoBuilder::new(seed);
/// logo.build()?;
/// let big = logo.to_svg(Some(512), 512)?;
/// ```
#[derive(Debug, Clone)]
pub struct LogoBuilder {
    rng: ParkMiller,
    distance: f64,
    scene: Option<Scene>,
}

impl LogoBuilder {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ParkMiller::new(seed))
    }

    pub fn with_rng(rng: ParkMiller) -> Self {
        Self { rng, distance: DEFAULT_DISTANCE, scene: None }
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Generate a scene, replacing any previous one.
    ///
    /// The stream is not rewound, so a second call yields a different logo.
    pub fn build(&mut self) -> Result<&Scene> {
        let scene = Scene::generate(&mut self.rng, self.distance)?;
        Ok(&*self.scene.insert(scene))
    }

    pub fn scene(&self) -> Result<&Scene> {
        self.scene.as_ref().ok_or(LogoError::NotGenerated)
    }

    pub fn into_scene(self) -> Result<Scene> {
        self.scene.ok_or(LogoError::NotGenerated)
    }

    /// Serialise the built scene. `width` falls back to
    /// [`svg::DEFAULT_WIDTH`]; `height` has no default and must be given.
    pub fn to_svg(&self, width: Option<u32>, height: u32) -> Result<String> {
        svg::render(self.scene()?, width.unwrap_or(svg::DEFAULT_WIDTH), height)
    }
}
