//! Stamps a tile image into every on cell of a binary mask

use crate::frame::canvas::Raster;
use crate::frame::threshold::BinaryMask;
use crate::io::configuration::OUT_OF_TILE_COLOR;
use image::{GenericImageView, Rgba};

/// Canvas origin of the tile stamped for mask cell `(row, col)`
///
/// Columns advance along X by the tile width, rows along Y by the tile height.
pub const fn tile_origin(
    row: usize,
    col: usize,
    tile_width: usize,
    tile_height: usize,
) -> (usize, usize) {
    (col * tile_width, row * tile_height)
}

/// Composite `tile` into `canvas` at every on cell of `mask`
///
/// The stamp size is `tile_width × tile_height` as given, not the tile's own
/// extent, so a batch can keep the size fixed by its first frame. For
/// tile-local `(i, j)` with `i < tile_height` and `j < tile_width`, the
/// tile is sampled at `x = i, y = j` and written to canvas `(x0 + j, y0 + i)`.
/// The transposed read is kept for output compatibility; samples outside the
/// tile, including any beyond a tile smaller than the stamp, read as
/// transparent black. Writes are not clipped to the canvas bounds.
///
/// Returns the number of pixel writes performed.
pub fn composite<I, R>(
    mask: &BinaryMask,
    tile: &I,
    tile_width: u32,
    tile_height: u32,
    canvas: &mut R,
) -> usize
where
    I: GenericImageView<Pixel = Rgba<u8>>,
    R: Raster + ?Sized,
{
    let (tile_width, tile_height) = (tile_width as usize, tile_height as usize);
    let mut writes = 0;

    for (row, col) in mask.on_cells() {
        let (x0, y0) = tile_origin(row, col, tile_width, tile_height);
        for i in 0..tile_height {
            for j in 0..tile_width {
                canvas.set_pixel(x0 + j, y0 + i, sample(tile, i, j));
                writes += 1;
            }
        }
    }

    writes
}

fn sample<I>(tile: &I, x: usize, y: usize) -> Rgba<u8>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (x, y) = (x as u32, y as u32);
    if tile.in_bounds(x, y) {
        tile.get_pixel(x, y)
    } else {
        Rgba(OUT_OF_TILE_COLOR)
    }
}
