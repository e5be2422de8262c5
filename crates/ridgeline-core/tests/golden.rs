//! Fixture for the documented default seed 123456. If this breaks, either the
//! generator or the random draw order changed and every published logo moves.

use ridgeline_core::geometry::Vec2;
use ridgeline_core::{LogoBuilder, Theme, DEFAULT_SEED};

#[test]
fn default_seed_scene() {
    let mut logo = LogoBuilder::new(DEFAULT_SEED);
    let scene = logo.build().unwrap();

    assert_eq!(scene.theme, Theme::Desert);
    assert_eq!(scene.background, 1);
    assert_eq!(scene.peaks.len(), 7);
    assert_eq!(scene.peaks[0].up, Vec2::new(9.071653358653846, -21.714285714285715));
    assert_eq!(scene.peaks[0].down, Vec2::new(9.92341041842879, 0.6));
    // Middle peak override.
    assert_eq!(scene.peaks[3].up.y, -14.0);
}

#[test]
fn default_seed_paths() {
    let mut logo = LogoBuilder::new(DEFAULT_SEED);
    let scene = logo.build().unwrap();

    assert_eq!(
        scene.mountains[0].path.to_d(),
        "M 0 100 v -10 \
         l 9.071653358653846 -21.714285714285715 l 9.92341041842879 0.6 \
         l 9.204511296139122 -20 l 7.757258374901085 0.2 \
         l 4.068642321550793 -22.285714285714285 l 3.243361879089858 0.56 \
         l 3.3702361843465667 -14 l 8.439886633392584 22 \
         l 6.793507083044884 -1.8 l 5.45447297620924 28 \
         l 9.513953367297981 -1.75 l 5.272709989387833 14 \
         l 9.033532340298432 -1.85 l 8.852863777258987 26 \
         V 100 z"
    );
    assert_eq!(
        scene.highlights[0].path.to_d(),
        "M 0 100 v -10 m 9.071653358653846 -21.714285714285715 \
         l 9.92341041842879 0.6 L 28.995063777082635 100 z"
    );
    assert!(scene.highlights[5]
        .path
        .to_d()
        .ends_with("l 5.272709989387833 14 L 95.11360388244259 100 l -10 0 l -8 -10 l -0.5 -5 z"));
    assert!(scene.highlights[6].path.to_d().ends_with("l 8.852863777258987 26 L 118 100 z"));
}

#[test]
fn default_seed_document_colours() {
    let mut logo = LogoBuilder::new(DEFAULT_SEED);
    logo.build().unwrap();
    let svg = logo.to_svg(Some(512), 512).unwrap();

    assert!(svg.contains(r##"<g fill="#ab9457"><path d="M 0 100 v -10 l 9.071653358653846"##));
    assert!(svg.contains(r##"<g fill="#ccb372"><path "##));
    assert!(svg.contains(r##"<g fill="#333"><text"##));
    assert!(svg.contains(r##"<stop stop-color="#757abf" offset="0%" />"##));
    assert!(svg.contains(r##"<stop stop-color="#8583be" offset="60%" />"##));
    assert!(svg.contains(r##"<stop stop-color="#eab0d1" offset="100%" />"##));
}
