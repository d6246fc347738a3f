use std::fmt::Write;

use super::Surface;
use crate::builder::LogoSource;
use crate::common::{Color, QRResult};
use crate::render::{Circle, Rect};

/// Accumulates an SVG document. Call [`SvgSurface::finish`] to close it.
pub struct SvgSurface {
    buf: String,
}

impl SvgSurface {
    pub fn new(size: f64) -> Self {
        let mut buf = String::new();
        buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        buf.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
             width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n"
        ));
        Self { buf }
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>\n");
        self.buf
    }
}

impl Surface for SvgSurface {
    fn fill_rect(&mut self, r: Rect, color: Color) {
        if r.w <= 0.0 || r.h <= 0.0 {
            return;
        }
        let _ = writeln!(
            self.buf,
            "\t<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{color}\"/>",
            r.x, r.y, r.w, r.h
        );
    }

    fn fill_circle(&mut self, c: Circle, color: Color) {
        if c.r <= 0.0 {
            return;
        }
        let _ = writeln!(
            self.buf,
            "\t<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{color}\"/>",
            c.cx, c.cy, c.r
        );
    }

    fn stroke_circle(&mut self, c: Circle, width: f64, color: Color) {
        let _ = writeln!(
            self.buf,
            "\t<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{width}\"/>",
            c.cx, c.cy, c.r
        );
    }

    fn draw_image(&mut self, r: Rect, source: &LogoSource) -> QRResult<()> {
        if r.w <= 0.0 || r.h <= 0.0 {
            return Ok(());
        }
        let href = escape_attr(&source.to_string());
        let _ = writeln!(
            self.buf,
            "\t<image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" href=\"{href}\" xlink:href=\"{href}\"/>",
            r.x, r.y, r.w, r.h
        );
        Ok(())
    }
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
