//! Procedural "Western Siberia" landscape logo.
//!
//! A seeded Park–Miller stream drives a ridge of 2–7 peaks, their highlight
//! slivers, a colour theme and a sky gradient. The resulting [`Scene`] is
//! serialised to SVG at any number of sizes without re-running the random
//! geometry.
//!
//! ```ignore
//! let result = ridgeline_core::generate(&LogoParams { seed: 42, ..Default::default() })?;
//! for r in &result.renders {
//!     println!("{}: {} bytes", r.region_id, r.svg.len());
//! }
//! ```

pub mod error;
pub mod generator;
pub mod geometry;
pub mod palette;
pub mod rng;
pub mod scene;
pub mod svg;

pub use error::{LogoError, Result};
pub use generator::{generate, render_all, LogoParams, LogoResult, RenderSize, RenderedLogo, STANDARD_SIZES};
pub use palette::Theme;
pub use rng::{ParkMiller, DEFAULT_SEED};
pub use scene::{LogoBuilder, Scene};
