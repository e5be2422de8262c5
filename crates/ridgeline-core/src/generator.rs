//! Entry point: build one scene, then serialise it at every requested size.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LogoError, Result};
use crate::rng::DEFAULT_SEED;
use crate::scene::{LogoBuilder, Scene, DEFAULT_DISTANCE};
use crate::svg;

// ── Sizes ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderSize {
    pub width: u32,
    pub height: u32,
}

impl RenderSize {
    pub const fn square(side: u32) -> Self {
        Self { width: side, height: side }
    }

    /// Id of the display region this size is written into, e.g. `img_256x256`.
    pub fn region_id(&self) -> String {
        format!("img_{}x{}", self.width, self.height)
    }
}

/// Sizes rendered by default: 512, 256 and 128 pixel squares.
pub const STANDARD_SIZES: [RenderSize; 3] =
    [RenderSize::square(512), RenderSize::square(256), RenderSize::square(128)];

// ── Params ────────────────────────────────────────────────────────────────────

/// Generation parameters; every field may be omitted in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoParams {
    pub seed: u64,
    /// Ridge base offset above the floor, in viewport units.
    pub distance: f64,
    pub sizes: Vec<RenderSize>,
}

impl Default for LogoParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            distance: DEFAULT_DISTANCE,
            sizes: STANDARD_SIZES.to_vec(),
        }
    }
}

impl LogoParams {
    pub fn validate(&self) -> Result<()> {
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(LogoError::InvalidDistance(self.distance));
        }
        if let Some(bad) = self.sizes.iter().find(|s| s.width == 0 || s.height == 0) {
            return Err(LogoError::InvalidSize { width: bad.width, height: bad.height });
        }
        Ok(())
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedLogo {
    pub region_id: String,
    pub size: RenderSize,
    pub svg: String,
}

#[derive(Debug)]
pub struct LogoResult {
    pub seed: u64,
    pub scene: Scene,
    pub renders: Vec<RenderedLogo>,
}

fn render_one(scene: &Scene, size: RenderSize) -> Result<RenderedLogo> {
    Ok(RenderedLogo {
        region_id: size.region_id(),
        size,
        svg: svg::render(scene, size.width, size.height)?,
    })
}

/// Serialise one scene at each size, in order. Renders only read the scene, so
/// with the `threading` feature they run in parallel.
#[cfg(feature = "threading")]
pub fn render_all(scene: &Scene, sizes: &[RenderSize]) -> Result<Vec<RenderedLogo>> {
    use rayon::prelude::*;
    sizes.par_iter().map(|&size| render_one(scene, size)).collect()
}

#[cfg(not(feature = "threading"))]
pub fn render_all(scene: &Scene, sizes: &[RenderSize]) -> Result<Vec<RenderedLogo>> {
    sizes.iter().map(|&size| render_one(scene, size)).collect()
}

/// Build a logo from `params` and render every requested size.
pub fn generate(params: &LogoParams) -> Result<LogoResult> {
    params.validate()?;

    let mut builder = LogoBuilder::new(params.seed).distance(params.distance);
    builder.build()?;
    let scene = builder.into_scene()?;
    debug!(seed = params.seed, theme = %scene.theme, "logo built");

    let renders = render_all(&scene, &params.sizes)?;
    info!(seed = params.seed, renders = renders.len(), "logo rendered");

    Ok(LogoResult { seed: params.seed, scene, renders })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_render_three_regions() {
        let result = generate(&LogoParams::default()).unwrap();
        let ids: Vec<_> = result.renders.iter().map(|r| r.region_id.as_str()).collect();
        assert_eq!(ids, ["img_512x512", "img_256x256", "img_128x128"]);
        assert_eq!(result.seed, DEFAULT_SEED);
    }

    #[test]
    fn params_from_partial_json() {
        let params: LogoParams = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(params.seed, 42);
        assert_eq!(params.distance, DEFAULT_DISTANCE);
        assert_eq!(params.sizes, STANDARD_SIZES.to_vec());

        let params: LogoParams =
            serde_json::from_str(r#"{"sizes": [{"width": 64, "height": 32}]}"#).unwrap();
        assert_eq!(params.sizes, vec![RenderSize { width: 64, height: 32 }]);
        assert_eq!(params.sizes[0].region_id(), "img_64x32");
    }

    #[test]
    fn invalid_params_fail_before_generation() {
        let params = LogoParams { sizes: vec![RenderSize::square(0)], ..LogoParams::default() };
        assert!(matches!(generate(&params), Err(LogoError::InvalidSize { .. })));

        let params = LogoParams { distance: f64::INFINITY, ..LogoParams::default() };
        assert!(matches!(generate(&params), Err(LogoError::InvalidDistance(_))));
    }

    #[test]
    fn scene_exports_as_json() {
        let result = generate(&LogoParams::default()).unwrap();
        let json = serde_json::to_value(&result.scene).unwrap();
        assert_eq!(json["theme"], "desert");
        assert_eq!(json["mountains"][0]["path"][0]["cmd"], "move_to");
        assert_eq!(json["mountains"][0]["path"][0]["args"]["y"], 100.0);
        assert_eq!(json["highlights"][0]["fill_rule"], "evenodd");
    }

    #[test]
    fn no_sizes_renders_nothing() {
        let params = LogoParams { sizes: Vec::new(), ..LogoParams::default() };
        assert!(generate(&params).unwrap().renders.is_empty());
    }
}
