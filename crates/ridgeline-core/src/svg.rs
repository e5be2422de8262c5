//! SVG serializer.
//!
//! Pure function of `(scene, width, height)`: the viewBox is always 100×100, so
//! the size only touches the root `width`/`height` attributes and never the
//! geometry or colours.

use std::fmt::Write;

use tracing::debug;

use crate::error::{LogoError, Result};
use crate::scene::{Scene, TextLabel};

pub const DEFAULT_WIDTH: u32 = 512;
/// Side of the internal coordinate system.
pub const VIEWBOX: u32 = 100;
pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css?family=Roboto:400,100,300,500,700,900";

fn write_text(out: &mut String, label: &TextLabel) {
    let mut fmt = ryu_js::Buffer::new();
    let _ = write!(out, r#"<text x="{}""#, fmt.format(label.x));
    let _ = write!(out, r#" y="{}""#, fmt.format(label.y));
    let _ = write!(out, r#" font-size="{}""#, fmt.format(label.font_size));
    if label.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    let _ = write!(
        out,
        r#" style="font-family: '{}';">{}</text>"#,
        label.font_family, label.content
    );
}

/// Serialise `scene` at `width` × `height` pixels.
pub fn render(scene: &Scene, width: u32, height: u32) -> Result<String> {
    if width == 0 || height == 0 {
        return Err(LogoError::InvalidSize { width, height });
    }
    let colors = scene.theme.colors();
    let mut out = String::with_capacity(2048);

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {VIEWBOX} {VIEWBOX}">"#
    );

    // Defs: web font and the sky gradient.
    out.push_str("<defs>\n");
    let _ = writeln!(out, r#"  <style type="text/css">@import url('{FONT_STYLESHEET}');</style>"#);
    out.push_str(r#"  <linearGradient id="background" x1="0" x2="0" y1="0" y2="1">"#);
    out.push('\n');
    for stop in scene.stops {
        let _ = writeln!(out, r#"    <stop stop-color="{}" offset="{}%" />"#, stop.color, stop.offset);
    }
    out.push_str("  </linearGradient>\n</defs>\n");
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{VIEWBOX}" height="{VIEWBOX}" fill="url(#background)"/>"#
    );

    let _ = write!(out, r#"<g fill="{}">"#, colors.mountain);
    for m in &scene.mountains {
        let _ = write!(out, r#"<path d="{}"></path>"#, m.path.to_d());
    }
    out.push_str("</g>\n");

    let _ = write!(out, r#"<g fill="{}">"#, colors.highlight);
    for h in &scene.highlights {
        let _ = write!(
            out,
            r#"<path d="{}" fill="{}" fill-rule="{}"></path>"#,
            h.path.to_d(),
            colors.highlight,
            h.fill_rule.as_str()
        );
    }
    out.push_str("</g>\n");

    let _ = write!(out, r#"<g fill="{}">"#, colors.text);
    for label in &scene.labels {
        write_text(&mut out, label);
    }
    out.push_str("</g>\n</svg>\n");

    debug!(width, height, bytes = out.len(), "svg serialised");
    Ok(out)
}
