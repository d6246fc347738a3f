use crate::builder::LogoSource;
use crate::common::Color;

// Geometry
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub const fn square(x: f64, y: f64, side: f64) -> Self {
        Self::new(x, y, side, side)
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Closed-interval point test: edges count as inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// True when the two rectangles share a region of positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0.0
            && self.h > 0.0
            && other.w > 0.0
            && other.h > 0.0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl Circle {
    pub const fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self { cx, cy, r }
    }
}

// Primitives
//------------------------------------------------------------------------------

/// A single round data module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub color: Color,
}

/// Round replacement for a finder pattern: three concentric filled circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeMarker {
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
    pub foreground: Color,
    pub background: Color,
}

impl EyeMarker {
    pub const RING_RATIO: f64 = 0.8;
    pub const PUPIL_RATIO: f64 = 0.5;

    /// Outer disc, background ring, pupil. Later circles cover earlier ones.
    pub fn circles(&self) -> [(Circle, Color); 3] {
        let Self { cx, cy, outer_radius: r, foreground, background } = *self;
        [
            (Circle::new(cx, cy, r), foreground),
            (Circle::new(cx, cy, r * Self::RING_RATIO), background),
            (Circle::new(cx, cy, r * Self::PUPIL_RATIO), foreground),
        ]
    }
}

/// Filled circle with a centred stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub circle: Circle,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

/// Clears the logo zone and draws the decorative ring around the logo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoMask {
    pub rect: Rect,
    pub color: Color,
    pub ring: Ring,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogoImage {
    pub rect: Rect,
    pub source: LogoSource,
}

/// One drawing instruction. A rendered code is an ordered list of these,
/// composited front to back in list order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Background { rect: Rect, color: Color },
    Dot(Dot),
    EyeMarker(EyeMarker),
    LogoMask(LogoMask),
    LogoImage(LogoImage),
}

impl Primitive {
    /// Painting order of the primitive kinds, lowest first.
    pub fn layer(&self) -> u8 {
        match self {
            Self::Background { .. } => 0,
            Self::Dot(_) => 1,
            Self::EyeMarker(_) => 2,
            Self::LogoMask(_) => 3,
            Self::LogoImage(_) => 4,
        }
    }
}
