mod raster;
mod svg;

pub use raster::RasterSurface;
pub use svg::SvgSurface;

use tracing::debug;

use crate::builder::LogoSource;
use crate::common::{Color, QRResult};
use crate::render::{Circle, Primitive, Rect};

/// Drawing backend that primitives are composited onto.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_circle(&mut self, circle: Circle, color: Color);

    /// Stroke centred on the circle's edge, `width` wide.
    fn stroke_circle(&mut self, circle: Circle, width: f64, color: Color);

    fn draw_image(&mut self, rect: Rect, source: &LogoSource) -> QRResult<()>;
}

/// Composites `primitives` onto `surface` in list order.
pub fn paint<S: Surface + ?Sized>(primitives: &[Primitive], surface: &mut S) -> QRResult<()> {
    debug!(count = primitives.len(), "Painting primitives...");
    for p in primitives {
        match p {
            Primitive::Background { rect, color } => surface.fill_rect(*rect, *color),
            Primitive::Dot(d) => surface.fill_circle(Circle::new(d.cx, d.cy, d.r), d.color),
            Primitive::EyeMarker(eye) => {
                for (circle, color) in eye.circles() {
                    surface.fill_circle(circle, color);
                }
            }
            Primitive::LogoMask(mask) => {
                surface.fill_rect(mask.rect, mask.color);
                surface.fill_circle(mask.ring.circle, mask.ring.fill);
                if mask.ring.stroke_width > 0.0 {
                    surface.stroke_circle(mask.ring.circle, mask.ring.stroke_width, mask.ring.stroke);
                }
            }
            Primitive::LogoImage(img) => surface.draw_image(img.rect, &img.source)?,
        }
    }
    Ok(())
}
