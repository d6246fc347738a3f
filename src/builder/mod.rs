mod config;

pub use config::{LogoHitTest, LogoSource, RenderConfig};

use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::common::{Color, ECLevel, ModuleMatrix, ModuleSource, QRResult};
use crate::render::{render_matrix, Primitive};
use crate::surface::{paint, RasterSurface, SvgSurface};

// Builder
//------------------------------------------------------------------------------

pub struct QRBuilder<'a> {
    data: &'a str,
    config: RenderConfig,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, config: RenderConfig::default() }
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = data;
        self
    }

    pub fn config(&mut self, config: RenderConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn size(&mut self, size: f64) -> &mut Self {
        self.config.size = size;
        self
    }

    pub fn logo_size(&mut self, logo_size: f64) -> &mut Self {
        self.config.logo_size = logo_size;
        self
    }

    pub fn logo_padding(&mut self, logo_padding: f64) -> &mut Self {
        self.config.logo_padding = logo_padding;
        self
    }

    pub fn logo_border_width(&mut self, logo_border_width: f64) -> &mut Self {
        self.config.logo_border_width = logo_border_width;
        self
    }

    pub fn foreground(&mut self, color: Color) -> &mut Self {
        self.config.foreground = color;
        self
    }

    pub fn background(&mut self, color: Color) -> &mut Self {
        self.config.background = color;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.config.ec_level = ec_level;
        self
    }

    pub fn logo(&mut self, source: LogoSource) -> &mut Self {
        self.config.logo = Some(source);
        self
    }

    pub fn unset_logo(&mut self) -> &mut Self {
        self.config.logo = None;
        self
    }

    pub fn logo_hit_test(&mut self, hit_test: LogoHitTest) -> &mut Self {
        self.config.logo_hit_test = hit_test;
        self
    }

    pub fn build(&self) -> QRResult<RenderedQR> {
        self.config.validate()?;
        let matrix = ModuleMatrix::encode(self.data, self.config.ec_level)?;
        let primitives = render_matrix(&matrix, &self.config)?;
        info!(
            module_count = matrix.module_count(),
            primitives = primitives.len(),
            "QR rendered successfully"
        );
        Ok(RenderedQR { matrix, config: self.config.clone(), primitives })
    }
}

// Rendered QR
//------------------------------------------------------------------------------

/// Result of one build: the encoded matrix plus its drawing instructions.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQR {
    matrix: ModuleMatrix,
    config: RenderConfig,
    primitives: Vec<Primitive>,
}

impl RenderedQR {
    pub fn matrix(&self) -> &ModuleMatrix {
        &self.matrix
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }

    /// Rasterizes at `scale` pixels per unit of `size`.
    pub fn to_image(&self, scale: u32) -> QRResult<RgbaImage> {
        let mut surface = RasterSurface::new(self.config.size, scale)?;
        paint(&self.primitives, &mut surface)?;
        Ok(surface.into_image())
    }

    pub fn to_svg(&self) -> QRResult<String> {
        let mut surface = SvgSurface::new(self.config.size);
        paint(&self.primitives, &mut surface)?;
        Ok(surface.finish())
    }

    /// Writes SVG for `.svg` paths and a raster image for anything else.
    pub fn save(&self, path: impl AsRef<Path>, scale: u32) -> QRResult<()> {
        let path = path.as_ref();
        let is_svg = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("svg"));
        if is_svg {
            std::fs::write(path, self.to_svg()?)?;
        } else {
            self.to_image(scale)?.save(path)?;
        }
        info!(path = %path.display(), "Saved QR");
        Ok(())
    }
}

#[cfg(test)]
mod builder_tests {
    use super::{LogoHitTest, QRBuilder, RenderConfig};
    use crate::common::{Color, ECLevel, ModuleSource, QRError};
    use crate::render::render_qr_code;

    #[test]
    fn test_builder_matches_free_function() {
        let qr = QRBuilder::new("https://example.com").size(240.0).logo_size(40.0).build().unwrap();
        let config = RenderConfig { size: 240.0, logo_size: 40.0, ..Default::default() };
        let prims = render_qr_code("https://example.com", &config).unwrap();
        assert_eq!(qr.primitives(), &prims[..]);
        assert_eq!(qr.config(), &config);
    }

    #[test]
    fn test_builder_setters() {
        let mut builder = QRBuilder::new("first");
        builder
            .data("second")
            .ec_level(ECLevel::L)
            .foreground(Color::rgb(1, 2, 3))
            .background(Color::rgb(4, 5, 6))
            .logo_padding(0.0)
            .logo_border_width(0.0)
            .logo_hit_test(LogoHitTest::CellOverlap);
        let qr = builder.build().unwrap();
        assert_eq!(qr.matrix().module_count(), 21);
        assert_eq!(qr.config().ec_level, ECLevel::L);
        assert_eq!(qr.config().foreground, Color::rgb(1, 2, 3));
        assert_eq!(qr.config().logo_hit_test, LogoHitTest::CellOverlap);
    }

    #[test]
    fn test_builder_invalid_size() {
        let err = QRBuilder::new("data").size(0.0).build().unwrap_err();
        assert!(matches!(err, QRError::InvalidConfig(_)));
    }

    #[test]
    fn test_builder_to_svg() {
        let qr = QRBuilder::new("svg").build().unwrap();
        let svg = qr.to_svg().unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_builder_to_image() {
        let qr = QRBuilder::new("png").size(100.0).build().unwrap();
        let img = qr.to_image(2).unwrap();
        assert_eq!(img.dimensions(), (200, 200));
    }

    #[test]
    fn test_builder_to_image_oversized() {
        let qr = QRBuilder::new("png").size(1.0e9).build().unwrap();
        assert!(matches!(qr.to_image(10).unwrap_err(), QRError::InvalidConfig(_)));
        assert!(matches!(qr.to_image(0).unwrap_err(), QRError::InvalidConfig(_)));
    }
}
