use qrcode::QrCode;
use tracing::debug;

use super::error::{QRError, QRResult};
use super::metadata::ECLevel;

/// Side length of a finder pattern in modules.
pub const FINDER_SIZE: usize = 7;

/// Smallest grid that fits two finder patterns side by side without overlap.
pub const MIN_MODULE_COUNT: usize = 2 * FINDER_SIZE;

// Module source
//------------------------------------------------------------------------------

/// Read-only view of a square QR module grid.
pub trait ModuleSource {
    fn module_count(&self) -> usize;

    /// `row` and `col` must be below [`ModuleSource::module_count`].
    fn is_dark(&self, row: usize, col: usize) -> bool;
}

impl<T: ModuleSource + ?Sized> ModuleSource for &T {
    fn module_count(&self) -> usize {
        (**self).module_count()
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        (**self).is_dark(row, col)
    }
}

// Module matrix
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleMatrix {
    w: usize,
    grid: Box<[bool]>,
}

impl ModuleMatrix {
    /// Encodes `text` with the given error correction level.
    pub fn encode(text: &str, ecl: ECLevel) -> QRResult<Self> {
        if text.is_empty() {
            return Err(QRError::EmptyData);
        }

        debug!(len = text.len(), %ecl, "Encoding data...");
        let code = QrCode::with_error_correction_level(text.as_bytes(), ecl.into())?;
        let w = code.width();
        let grid = code.to_colors().into_iter().map(|c| c == qrcode::Color::Dark).collect();
        debug!(version = ?code.version(), width = w, "Encoded");

        Ok(Self { w, grid })
    }

    /// Builds a matrix from explicit rows, for grids produced elsewhere.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> QRResult<Self> {
        let w = rows.len();
        let mut grid = Vec::with_capacity(w * w);
        for row in rows {
            let row = row.as_ref();
            if row.len() != w {
                return Err(QRError::InvalidMatrix { expected: w, found: row.len() });
            }
            grid.extend_from_slice(row);
        }
        Ok(Self { w, grid: grid.into_boxed_slice() })
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&d| d).count()
    }

    /// Text preview with two characters per module and a 2-module quiet zone.
    pub fn to_str(&self) -> String {
        const QZ: usize = 2;
        let total = self.w + 2 * QZ;
        let mut canvas = String::with_capacity(total * (2 * total + 1) * 3);
        for i in 0..total {
            for j in 0..total {
                let inside = (QZ..QZ + self.w).contains(&i) && (QZ..QZ + self.w).contains(&j);
                let dark = inside && self.is_dark(i - QZ, j - QZ);
                canvas.push_str(if dark { "  " } else { "██" });
            }
            canvas.push('\n');
        }
        canvas
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w + 1) + 1);
        res.push('\n');
        for r in 0..self.w {
            for c in 0..self.w {
                res.push(if self.is_dark(r, c) { 'd' } else { '.' });
            }
            res.push('\n');
        }
        res
    }
}

impl ModuleSource for ModuleMatrix {
    fn module_count(&self) -> usize {
        self.w
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.w, "row {row} out of bounds for width {}", self.w);
        debug_assert!(col < self.w, "column {col} out of bounds for width {}", self.w);
        self.grid[row * self.w + col]
    }
}
