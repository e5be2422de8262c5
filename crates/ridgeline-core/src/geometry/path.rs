//! Typed SVG path commands.
//!
//! Geometry is assembled from these and only turned into the `d` mini-language
//! by [`PathData::to_d`], which the serializer calls.

use serde::Serialize;

/// 2D displacement or position in the 100×100 logo viewport (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "cmd", content = "args", rename_all = "snake_case")]
pub enum PathCommand {
    /// `M x y`
    MoveTo(Vec2),
    /// `m dx dy`: moves the pen without drawing.
    MoveBy(Vec2),
    /// `L x y`
    LineTo(Vec2),
    /// `l dx dy`
    LineBy(Vec2),
    /// `V y`
    VerticalTo(f64),
    /// `v dy`
    VerticalBy(f64),
    /// `z`
    Close,
}

impl PathCommand {
    fn write(&self, out: &mut String, fmt: &mut ryu_js::Buffer) {
        let mut push = |letter: &str, args: &[f64]| {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(letter);
            for &a in args {
                out.push(' ');
                out.push_str(fmt.format(a));
            }
        };
        match *self {
            PathCommand::MoveTo(p)     => push("M", &[p.x, p.y]),
            PathCommand::MoveBy(d)     => push("m", &[d.x, d.y]),
            PathCommand::LineTo(p)     => push("L", &[p.x, p.y]),
            PathCommand::LineBy(d)     => push("l", &[d.x, d.y]),
            PathCommand::VerticalTo(y) => push("V", &[y]),
            PathCommand::VerticalBy(d) => push("v", &[d]),
            PathCommand::Close         => push("z", &[]),
        }
    }
}

/// An ordered list of drawing commands forming one `<path>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PathData(pub Vec<PathCommand>);

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: PathCommand) -> &mut Self {
        self.0.push(cmd);
        self
    }

    pub fn extend<I: IntoIterator<Item = PathCommand>>(&mut self, cmds: I) -> &mut Self {
        self.0.extend(cmds);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.0
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.0.last(), Some(PathCommand::Close))
    }

    /// Render as an SVG `d` attribute value.
    ///
    /// Numbers use the shortest ECMAScript representation (`35`, `0.12`, `-0.5`).
    pub fn to_d(&self) -> String {
        let mut out = String::with_capacity(self.0.len() * 16);
        let mut fmt = ryu_js::Buffer::new();
        for cmd in &self.0 {
            cmd.write(&mut out, &mut fmt);
        }
        out
    }
}
