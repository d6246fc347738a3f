//! # qrdeco
//!
//! Renders QR codes as round dots with circular "eye" markers over the finder
//! patterns and a masked, ringed area in the centre for a logo.
//!
//! Encoding is done by the [`qrcode`] crate. This crate takes the module
//! matrix it produces and turns it into an ordered list of [`Primitive`]s
//! that any drawing backend can composite. Raster (PNG, via `image` and
//! `imageproc`) and SVG backends are included.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrdeco::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("https://example.com")
//!     .size(200.0)
//!     .logo_size(44.0)
//!     .logo_padding(10.0)
//!     .build()?;
//!
//! let svg = qr.to_svg()?;
//! let img = qr.to_image(4)?; // 800x800 pixels
//! # let _ = (svg, img);
//! # Ok(())
//! # }
//! ```
//!
//! ## Primitives only
//!
//! ```rust
//! use qrdeco::{render_qr_code, Primitive, RenderConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let prims = render_qr_code("Hello, World!", &RenderConfig::default())?;
//! let eyes = prims.iter().filter(|p| matches!(p, Primitive::EyeMarker(_))).count();
//! assert_eq!(eyes, 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Layers
//!
//! Primitives come out in painting order:
//! background, data dots, the three eye markers, the logo mask and ring, the logo image.
//! Cells under an eye or the logo mask never get a dot of their own.

pub mod builder;
pub mod common;
pub mod render;
pub mod surface;

pub use builder::{LogoHitTest, LogoSource, QRBuilder, RenderConfig, RenderedQR};
pub use common::{Color, ECLevel, ModuleMatrix, ModuleSource, QRError, QRResult};
pub use render::{render_matrix, render_qr_code, Primitive};
pub use surface::{paint, RasterSurface, Surface, SvgSurface};
