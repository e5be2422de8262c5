//! Error taxonomy for logo generation.
//!
//! Every failure is local to the call that raised it: there are no retries and
//! no partial output.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LogoError {
    #[error("seed {0} cannot be normalised into the generator range")]
    InvalidSeed(f64),

    /// The random draws feeding a separation summed to zero (or `parts` was 0),
    /// so scaling them would produce NaN coordinates.
    #[error("degenerate separation distribution over {parts} parts")]
    DegenerateDistribution { parts: usize },

    #[error("logo not yet generated: call build() before serialising")]
    NotGenerated,

    #[error("invalid output size {width}x{height}: both dimensions must be non-zero")]
    InvalidSize { width: u32, height: u32 },

    #[error("ridge offset {0} must be finite and non-negative")]
    InvalidDistance(f64),

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("background preset {0} does not exist")]
    UnknownBackground(usize),
}

pub type Result<T> = std::result::Result<T, LogoError>;
