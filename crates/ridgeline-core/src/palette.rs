//! Static colour tables: mountain themes and "time of day" sky gradients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LogoError, Result};
use crate::rng::ParkMiller;

// ── Themes ────────────────────────────────────────────────────────────────────

/// Named three-colour palette. Declaration order is the pick order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Rocky,
    Desert,
    Jungle,
    Icy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub mountain: &'static str,
    pub highlight: &'static str,
    pub text: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Rocky, Theme::Desert, Theme::Jungle, Theme::Icy];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Rocky  => "rocky",
            Theme::Desert => "desert",
            Theme::Jungle => "jungle",
            Theme::Icy    => "icy",
        }
    }

    pub fn colors(self) -> ThemeColors {
        let (mountain, highlight, text) = match self {
            Theme::Rocky  => ("#7e949c", "#cad7db", "#333"),
            Theme::Desert => ("#ab9457", "#ccb372", "#333"),
            Theme::Jungle => ("#405438", "#587d48", "#222"),
            Theme::Icy    => ("#4c7b8c", "#91c7db", "#333"),
        };
        ThemeColors { mountain, highlight, text }
    }

    /// Uniform pick: `floor(next * 4)`.
    pub fn pick(rng: &mut ParkMiller) -> Theme {
        let i = (rng.next_f64() * Self::ALL.len() as f64).floor() as usize;
        Self::ALL[i.min(Self::ALL.len() - 1)]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self> {
        Theme::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| LogoError::UnknownTheme(s.to_string()))
    }
}

// ── Backgrounds ───────────────────────────────────────────────────────────────

/// One stop of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradientStop {
    pub color: &'static str,
    /// Offset along the gradient, in percent.
    pub offset: u8,
}

const fn stop(color: &'static str, offset: u8) -> GradientStop {
    GradientStop { color, offset }
}

/// Sky presets, dawn through dusk.
pub const BACKGROUNDS: [&[GradientStop]; 8] = [
    &[stop("#4a4969", 0), stop("#7072ab", 50), stop("#cd82a0", 100)],
    &[stop("#757abf", 0), stop("#8583be", 60), stop("#eab0d1", 100)],
    &[stop("#82addb", 0), stop("#ebb2b1", 100)],
    &[stop("#94c5f8", 1), stop("#a6e6ff", 70), stop("#b1b5ea", 100)],
    &[stop("#1e528e", 0), stop("#265889", 50), stop("#9da671", 100)],
    &[stop("#1e528e", 0), stop("#728a7c", 50), stop("#e9ce5d", 100)],
    &[stop("#154277", 0), stop("#576e71", 30), stop("#e1c45e", 70), stop("#b26339", 100)],
    &[
        stop("#163c52", 0),
        stop("#4f4f47", 30),
        stop("#c5752d", 60),
        stop("#b7490f", 80),
        stop("#2f1107", 100),
    ],
];

/// Clear daytime sky, deliberately over-represented by [`pick_background`].
pub const FAVOURED_BACKGROUND: usize = 3;

pub fn background(index: usize) -> Result<&'static [GradientStop]> {
    BACKGROUNDS.get(index).copied().ok_or(LogoError::UnknownBackground(index))
}

/// Uniform pick over [`BACKGROUNDS`], then a fair coin replaces the result with
/// [`FAVOURED_BACKGROUND`]. Preset 3 therefore lands about 9/16 of the time.
pub fn pick_background(rng: &mut ParkMiller) -> usize {
    let picked = ((rng.next_f64() * BACKGROUNDS.len() as f64).floor() as usize)
        .min(BACKGROUNDS.len() - 1);
    if rng.chance(0.5) { FAVOURED_BACKGROUND } else { picked }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_lookup_by_name() {
        let t: Theme = "desert".parse().unwrap();
        assert_eq!(t, Theme::Desert);
        assert_eq!(t.colors().highlight, "#ccb372");
        assert_eq!("jungle".parse::<Theme>().unwrap().colors().text, "#222");
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert_eq!("volcanic".parse::<Theme>(), Err(LogoError::UnknownTheme("volcanic".into())));
    }

    #[test]
    fn every_preset_spans_the_full_gradient() {
        for (i, stops) in BACKGROUNDS.iter().enumerate() {
            assert!(stops.len() >= 2, "preset {i} needs at least two stops");
            assert_eq!(stops.last().unwrap().offset, 100, "preset {i} must end at 100%");
            assert!(
                stops.windows(2).all(|w| w[0].offset < w[1].offset),
                "preset {i} offsets must increase"
            );
        }
    }

    #[test]
    fn favoured_preset_is_the_clear_sky() {
        let stops = background(FAVOURED_BACKGROUND).unwrap();
        let colors: Vec<_> = stops.iter().map(|s| s.color).collect();
        assert_eq!(colors, ["#94c5f8", "#a6e6ff", "#b1b5ea"]);
        assert_eq!(background(8), Err(LogoError::UnknownBackground(8)));
    }

    /// Every theme shows up for some seed; picks are roughly uniform.
    #[test]
    fn theme_pick_covers_all_names() {
        let mut counts = [0usize; 4];
        let mut rng = ParkMiller::new(2024);
        for _ in 0..4_000 {
            let t = Theme::pick(&mut rng);
            counts[Theme::ALL.iter().position(|&x| x == t).unwrap()] += 1;
        }
        for (i, &c) in counts.iter().enumerate() {
            assert!((800..1200).contains(&c), "theme {i} picked {c}/4000 times");
        }
    }

    #[test]
    fn background_bias_toward_clear_sky() {
        let mut rng = ParkMiller::new(77);
        let n = 8_000;
        let hits = (0..n).filter(|_| pick_background(&mut rng) == FAVOURED_BACKGROUND).count();
        let share = hits as f64 / n as f64;
        assert!(share > 0.45, "clear sky share {share:.3} should be near 9/16");
    }
}
