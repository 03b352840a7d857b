//! Brightness thresholding of reference frames into binary masks

use crate::io::configuration::BRIGHTNESS_THRESHOLD;
use image::{DynamicImage, Rgba};
use ndarray::Array2;

/// Grid of 0/1 cells, indexed `(row, col)`, marking where tiles are stamped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    cells: Array2<u8>,
}

impl BinaryMask {
    /// Create an all-zero mask of the given shape
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            cells: Array2::zeros((height, width)),
        }
    }

    /// Build a mask from explicit rows
    ///
    /// Short rows are padded with zeros up to the longest row and any
    /// non-zero value is stored as 1.
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut mask = Self::zeros(rows.len(), width);
        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, &value) in row.iter().enumerate() {
                if let Some(cell) = mask.cells.get_mut((row_index, col_index)) {
                    *cell = u8::from(value != 0);
                }
            }
        }
        mask
    }

    /// Mask shape as (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Cell value, or `None` outside the mask
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get((row, col)).copied()
    }

    /// Count cells set to 1
    pub fn count_on(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    /// Iterate over `(row, col)` of every cell set to 1 in row-major order
    pub fn on_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &cell)| cell == 1)
            .map(|(position, _)| position)
    }

    /// Copy the mask out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

/// Test whether a 16-bit pixel counts as foreground
///
/// Channels are premultiplied by alpha first; alpha is not otherwise consulted.
pub fn is_foreground(pixel: Rgba<u16>) -> bool {
    let [r, g, b, a] = pixel.0.map(u32::from);
    let premultiply = |channel: u32| channel * a / u32::from(u16::MAX);
    let average = (premultiply(r) + premultiply(g) + premultiply(b)) / 3;
    average >= BRIGHTNESS_THRESHOLD
}

/// Threshold the top-left `width × height` region of an image into a mask
///
/// The mask always has exactly `height` rows and `width` columns. Coordinates
/// beyond the image extent read as transparent black and map to 0.
pub fn threshold_bitmap(image: &DynamicImage, width: u32, height: u32) -> BinaryMask {
    let wide = image.to_rgba16();
    let mut mask = BinaryMask::zeros(height as usize, width as usize);

    for ((row, col), cell) in mask.cells.indexed_iter_mut() {
        let on = wide
            .get_pixel_checked(col as u32, row as u32)
            .is_some_and(|pixel| is_foreground(*pixel));
        *cell = u8::from(on);
    }

    mask
}
