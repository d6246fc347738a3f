use image::imageops::{self, FilterType};
use image::RgbaImage;
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use tracing::trace;

use super::Surface;
use crate::builder::LogoSource;
use crate::common::{Color, QRError, QRResult};
use crate::render::{Circle, Rect};

/// In-memory RGBA canvas backed by `imageproc` drawing routines.
pub struct RasterSurface {
    img: RgbaImage,
    scale: f64,
}

impl RasterSurface {
    /// Largest canvas side, in pixels.
    pub const MAX_SIDE: u32 = 16_384;

    /// Canvas for a code `size` units wide at `scale` pixels per unit.
    ///
    /// Fails with `InvalidConfig` for a zero scale or a canvas wider than
    /// [`Self::MAX_SIDE`] pixels.
    pub fn new(size: f64, scale: u32) -> QRResult<Self> {
        if scale == 0 {
            return Err(QRError::InvalidConfig("scale must be at least 1"));
        }
        let scale = scale as f64;
        let side = (size * scale).round();
        if !side.is_finite() || side > Self::MAX_SIDE as f64 {
            return Err(QRError::InvalidConfig("raster canvas exceeds the maximum side"));
        }
        let px = (side as u32).max(1);
        Ok(Self { img: RgbaImage::new(px, px), scale })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    fn px(&self, v: f64) -> i32 {
        (v * self.scale).round() as i32
    }

    fn pixel_rect(&self, rect: Rect) -> Option<imageproc::rect::Rect> {
        let (x0, y0) = (self.px(rect.x), self.px(rect.y));
        let (x1, y1) = (self.px(rect.right()), self.px(rect.bottom()));
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(imageproc::rect::Rect::at(x0, y0).of_size((x1 - x0) as u32, (y1 - y0) as u32))
    }
}

impl Surface for RasterSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(r) = self.pixel_rect(rect) {
            draw_filled_rect_mut(&mut self.img, r, color.to_rgba());
        }
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        let r = self.px(circle.r);
        if r <= 0 {
            return;
        }
        let center = (self.px(circle.cx), self.px(circle.cy));
        draw_filled_circle_mut(&mut self.img, center, r, color.to_rgba());
    }

    fn stroke_circle(&mut self, circle: Circle, width: f64, color: Color) {
        let (cx, cy) = (circle.cx * self.scale, circle.cy * self.scale);
        let half = width * self.scale / 2.0;
        let outer = circle.r * self.scale + half;
        let inner = (circle.r * self.scale - half).max(0.0);

        let (w, h) = self.img.dimensions();
        let x0 = ((cx - outer).floor().max(0.0) as u32).min(w);
        let y0 = ((cy - outer).floor().max(0.0) as u32).min(h);
        let x1 = ((cx + outer).ceil().max(0.0) as u32).min(w);
        let y1 = ((cy + outer).ceil().max(0.0) as u32).min(h);

        // Pixel centres inside the annulus
        let pixel = color.to_rgba();
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                let d2 = dx * dx + dy * dy;
                if d2 >= inner * inner && d2 <= outer * outer {
                    self.img.put_pixel(x, y, pixel);
                }
            }
        }
    }

    fn draw_image(&mut self, rect: Rect, source: &LogoSource) -> QRResult<()> {
        let path = match source {
            LogoSource::Path(p) => p,
            LogoSource::Uri(u) => return Err(QRError::UnsupportedLogoSource(u.clone())),
        };
        let Some(target) = self.pixel_rect(rect) else {
            return Ok(());
        };

        trace!(path = %path.display(), "Loading logo...");
        let logo = image::open(path)?.to_rgba8();
        let logo = imageops::resize(&logo, target.width(), target.height(), FilterType::Lanczos3);
        imageops::overlay(&mut self.img, &logo, target.left() as i64, target.top() as i64);
        Ok(())
    }
}
