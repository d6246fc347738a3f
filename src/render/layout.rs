use crate::builder::{LogoHitTest, RenderConfig};
use crate::common::{QRError, QRResult, FINDER_SIZE, MIN_MODULE_COUNT};

use super::primitive::Rect;

/// Pixel geometry of one render: cell grid, eye boxes and the logo zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    size: f64,
    module_count: usize,
    cell_size: f64,
    logo: Rect,
    mask: Rect,
    bounds: (f64, f64),
    hit_test: LogoHitTest,
}

impl Layout {
    pub fn new(module_count: usize, config: &RenderConfig) -> QRResult<Self> {
        config.validate()?;
        if module_count < MIN_MODULE_COUNT {
            return Err(QRError::MatrixTooSmall { module_count });
        }

        let size = config.size;
        let cell_size = size / module_count as f64;
        let logo_xy = (size - config.logo_size) / 2.0;
        let margin = config.logo_margin();
        let logo = Rect::square(logo_xy, logo_xy, config.logo_size);
        let mask = Rect::square(logo_xy - margin, logo_xy - margin, config.logo_size + 2.0 * margin);

        // Summed left to right so boundary cells match the classic corner test bit for bit
        let lo = logo_xy - config.logo_padding - config.logo_border_width;
        let hi = logo_xy + config.logo_size + config.logo_padding + config.logo_border_width;

        Ok(Self {
            size,
            module_count,
            cell_size,
            logo,
            mask,
            bounds: (lo, hi),
            hit_test: config.logo_hit_test,
        })
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn module_count(&self) -> usize {
        self.module_count
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::square(col as f64 * self.cell_size, row as f64 * self.cell_size, self.cell_size)
    }

    /// Logo square, before padding and border.
    pub fn logo_rect(&self) -> Rect {
        self.logo
    }

    /// Logo square grown by padding and border on every side.
    pub fn mask_rect(&self) -> Rect {
        self.mask
    }

    /// Closed `[lo, hi]` interval of the logo hit test, same on both axes.
    pub fn logo_bounds(&self) -> (f64, f64) {
        self.bounds
    }

    pub fn is_eye(&self, row: usize, col: usize) -> bool {
        let far = self.module_count - FINDER_SIZE;
        let top_left = row < FINDER_SIZE && col < FINDER_SIZE;
        let top_right = row < FINDER_SIZE && col >= far;
        let bottom_left = row >= far && col < FINDER_SIZE;
        top_left || top_right || bottom_left
    }

    pub fn is_logo_area(&self, row: usize, col: usize) -> bool {
        let cell = self.cell_rect(row, col);
        let (lo, hi) = self.bounds;
        match self.hit_test {
            LogoHitTest::CornerPoint => {
                cell.x >= lo && cell.x <= hi && cell.y >= lo && cell.y <= hi
            }
            LogoHitTest::CellOverlap => {
                hi > lo
                    && cell.x < hi
                    && cell.right() > lo
                    && cell.y < hi
                    && cell.bottom() > lo
            }
        }
    }

    pub fn eye_radius(&self) -> f64 {
        FINDER_SIZE as f64 * self.cell_size / 2.0
    }

    /// Eye centres: top-left, top-right, bottom-left.
    pub fn eye_centers(&self) -> [(f64, f64); 3] {
        let r = self.eye_radius();
        [(r, r), (self.size - r, r), (r, self.size - r)]
    }

    /// Pixel boxes of the three finder patterns, same order as the centres.
    pub fn eye_boxes(&self) -> [Rect; 3] {
        let d = 2.0 * self.eye_radius();
        self.eye_centers().map(|(cx, cy)| Rect::square(cx - d / 2.0, cy - d / 2.0, d))
    }
}
