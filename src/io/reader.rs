use std::path::Path;

use image::DynamicImage;
use ndarray::Array2;
use tracing::debug;

use crate::core::params::CropParams;
use crate::core::processing::pipeline::{CenteredImage, crop_and_center};
use crate::error::{Error, Result};

/// A decoded single-channel image, at its native sample width.
#[derive(Debug, Clone, PartialEq)]
pub enum Grid {
    U8(Array2<u8>),
    U16(Array2<u16>),
}

impl Grid {
    /// (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        match self {
            Grid::U8(a) => a.dim(),
            Grid::U16(a) => a.dim(),
        }
    }

    pub fn crop_and_center(&self, params: &CropParams) -> Result<CenteredImage> {
        match self {
            Grid::U8(a) => crop_and_center(a.view(), params),
            Grid::U16(a) => crop_and_center(a.view(), params),
        }
    }
}

fn to_grid<T>(cols: u32, rows: u32, raw: Vec<T>) -> Result<Array2<T>> {
    Array2::from_shape_vec((rows as usize, cols as usize), raw)
        .map_err(|e| Error::Processing(format!("pixel buffer does not match {}x{}: {}", cols, rows, e)))
}

/// Decode a gray-scale image file into a `Grid`.
///
/// Multi-channel images (RGB, gray+alpha, ...) are rejected as 3D arrays.
pub fn read_gray_image(path: &Path) -> Result<Grid> {
    let decoded = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = match decoded {
        DynamicImage::ImageLuma8(img) => {
            let (cols, rows) = img.dimensions();
            Grid::U8(to_grid(cols, rows, img.into_raw())?)
        }
        DynamicImage::ImageLuma16(img) => {
            let (cols, rows) = img.dimensions();
            Grid::U16(to_grid(cols, rows, img.into_raw())?)
        }
        other => {
            debug!("read_gray_image: {:?} has color type {:?}", path, other.color());
            return Err(Error::InvalidRank { ndim: 3 });
        }
    };

    let (rows, cols) = grid.dim();
    debug!("read_gray_image: {:?} decoded as {}x{}", path, cols, rows);
    Ok(grid)
}
