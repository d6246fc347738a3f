use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Color, ECLevel, QRError, QRResult};

// Logo source
//------------------------------------------------------------------------------

/// Where the logo drawn in the centre of the code comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoSource {
    /// Image file on disk, decoded by raster surfaces and linked by SVG.
    Path(PathBuf),
    /// URI only SVG output can reference.
    Uri(String),
}

impl Display for LogoSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(p) => write!(f, "{}", p.display()),
            Self::Uri(u) => f.write_str(u),
        }
    }
}

// Logo hit test
//------------------------------------------------------------------------------

/// How a cell is tested against the masked logo square.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoHitTest {
    /// Only the cell's top-left corner is tested. Cells straddling the left and
    /// top edges of the square can stay as data while the mask paints over them.
    #[default]
    CornerPoint,
    /// Any cell whose rectangle overlaps the square with positive area is masked.
    CellOverlap,
}

impl FromStr for LogoHitTest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corner-point" => Ok(Self::CornerPoint),
            "cell-overlap" => Ok(Self::CellOverlap),
            _ => Err(format!("unknown hit test {s:?}, expected corner-point or cell-overlap")),
        }
    }
}

// Render config
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Side length of the square output in pixels.
    pub size: f64,
    pub logo_size: f64,
    /// Gap between the logo and the edge of its mask.
    pub logo_padding: f64,
    /// Stroke width of the ring around the logo.
    pub logo_border_width: f64,
    pub foreground: Color,
    pub background: Color,
    pub ec_level: ECLevel,
    pub logo: Option<LogoSource>,
    pub logo_hit_test: LogoHitTest,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            logo_size: 50.0,
            logo_padding: 5.0,
            logo_border_width: 2.0,
            foreground: Color::BLACK,
            background: Color::WHITE,
            ec_level: ECLevel::H,
            logo: None,
            logo_hit_test: LogoHitTest::CornerPoint,
        }
    }
}

impl RenderConfig {
    /// Parses a TOML document. Keys left out keep their defaults.
    pub fn from_toml_str(s: &str) -> QRResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> QRResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(QRError::InvalidConfig("size must be a positive number"));
        }
        if !self.logo_size.is_finite() || self.logo_size < 0.0 {
            return Err(QRError::InvalidConfig("logo_size must be a non-negative number"));
        }
        if !self.logo_padding.is_finite() || self.logo_padding < 0.0 {
            return Err(QRError::InvalidConfig("logo_padding must be a non-negative number"));
        }
        if !self.logo_border_width.is_finite() || self.logo_border_width < 0.0 {
            return Err(QRError::InvalidConfig("logo_border_width must be a non-negative number"));
        }
        if self.logo_size > self.size {
            return Err(QRError::InvalidConfig("logo_size must not exceed size"));
        }
        Ok(())
    }

    /// Padding plus border: how far the mask reaches past the logo on each side.
    pub fn logo_margin(&self) -> f64 {
        self.logo_padding + self.logo_border_width
    }
}
