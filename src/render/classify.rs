use tracing::trace;

use crate::common::{ModuleSource, QRError, QRResult};

use super::layout::Layout;

/// What a single cell turns into when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Part of a finder pattern, drawn by an eye marker.
    Eye,
    /// Under the logo mask.
    LogoArea,
    /// Dark module drawn as a dot.
    Data,
    /// Light module, nothing drawn.
    Light,
}

impl Zone {
    /// Eye and logo cells are never drawn individually, whatever their color.
    pub fn is_masked(self) -> bool {
        matches!(self, Zone::Eye | Zone::LogoArea)
    }
}

/// Eye takes precedence over the logo area.
pub fn classify<M: ModuleSource + ?Sized>(source: &M, layout: &Layout, row: usize, col: usize) -> Zone {
    if layout.is_eye(row, col) {
        Zone::Eye
    } else if layout.is_logo_area(row, col) {
        Zone::LogoArea
    } else if source.is_dark(row, col) {
        Zone::Data
    } else {
        Zone::Light
    }
}

/// Row-major zone of every cell in the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneGrid {
    w: usize,
    zones: Vec<Zone>,
}

impl ZoneGrid {
    /// Fails with `InvalidMatrix` when `layout` was built for a different module count.
    pub fn classify<M: ModuleSource + ?Sized>(source: &M, layout: &Layout) -> QRResult<Self> {
        let w = layout.module_count();
        if w != source.module_count() {
            return Err(QRError::InvalidMatrix { expected: w, found: source.module_count() });
        }

        let zones = (0..w * w).map(|i| classify(source, layout, i / w, i % w)).collect::<Vec<_>>();
        let grid = Self { w, zones };
        trace!(
            eye = grid.count(Zone::Eye),
            logo = grid.count(Zone::LogoArea),
            data = grid.count(Zone::Data),
            "Classified cells"
        );
        Ok(grid)
    }

    pub fn get(&self, row: usize, col: usize) -> Zone {
        self.zones[row * self.w + col]
    }

    pub fn count(&self, zone: Zone) -> usize {
        self.zones.iter().filter(|&&z| z == zone).count()
    }

    pub fn count_masked(&self) -> usize {
        self.zones.iter().filter(|z| z.is_masked()).count()
    }

    /// Yields `(row, col, zone)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Zone)> + '_ {
        self.zones.iter().enumerate().map(|(i, &z)| (i / self.w, i % self.w, z))
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w + 1) + 1);
        res.push('\n');
        for r in 0..self.w {
            for c in 0..self.w {
                res.push(match self.get(r, c) {
                    Zone::Eye => 'e',
                    Zone::LogoArea => 'l',
                    Zone::Data => 'd',
                    Zone::Light => '.',
                });
            }
            res.push('\n');
        }
        res
    }
}
