use log::warn;
use qrcode::{types::QrError, Color as QrColor, QrCode};

use super::metadata::{is_standard_width, ECLevel, Metadata};
use super::utils::{QRError, QRResult};

// Matrix of raw modules, true = dark
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    grid: Vec<bool>,
    w: usize,
}

impl Matrix {
    pub fn new(rows: Vec<Vec<bool>>) -> QRResult<Self> {
        let w = rows.len();
        if w == 0 {
            return Err(QRError::EmptyMatrix);
        }
        if rows.iter().any(|r| r.len() != w) {
            return Err(QRError::NonSquareMatrix);
        }
        Self::from_flat(w, rows.into_iter().flatten().collect())
    }

    /// Builds a matrix from row-major module values.
    pub fn from_flat(w: usize, grid: Vec<bool>) -> QRResult<Self> {
        if w == 0 || grid.is_empty() {
            return Err(QRError::EmptyMatrix);
        }
        if w.checked_mul(w) != Some(grid.len()) {
            return Err(QRError::NonSquareMatrix);
        }
        if !is_standard_width(w) {
            warn!("Matrix width {w} is not 21 + 4k, alignment protection may be meaningless");
        }
        Ok(Self { grid, w })
    }

    pub fn from_qrcode(code: &QrCode) -> QRResult<Self> {
        let grid = code.to_colors().into_iter().map(|c| c == QrColor::Dark).collect();
        Self::from_flat(code.width(), grid)
    }

    /// Encodes `data` with the highest error correction level, leaving the most
    /// room for modules hidden by a shape.
    pub fn from_data(data: &[u8]) -> QRResult<Self> {
        Self::generate(data, ECLevel::H)
    }

    pub fn generate(data: &[u8], ecl: ECLevel) -> QRResult<Self> {
        if data.is_empty() {
            return Err(QRError::EmptyData);
        }
        let code = QrCode::with_error_correction_level(data, ecl.into()).map_err(|e| match e {
            QrError::DataTooLong => QRError::DataTooLong,
            _ => QRError::EncodingFailed,
        })?;
        Self::from_qrcode(&code)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn metadata(&self) -> Metadata {
        Metadata::new(self.w)
    }

    pub fn grid(&self) -> &[bool] {
        &self.grid
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&m| m).count()
    }

    /// Module at row `r`, column `c`, or None outside the matrix.
    pub fn get(&self, r: usize, c: usize) -> Option<bool> {
        if r >= self.w || c >= self.w {
            return None;
        }
        self.grid.get(r * self.w + c).copied()
    }

    /// Iterates `(row, col, dark)` in row-major order.
    pub fn modules(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.grid.iter().enumerate().map(move |(i, &m)| (i / self.w, i % self.w, m))
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w + 1) + 1);
        res.push('\n');
        for row in self.grid.chunks(self.w) {
            row.iter().for_each(|&m| res.push(if m { '#' } else { '.' }));
            res.push('\n');
        }
        res
    }
}
