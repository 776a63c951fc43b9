use std::path::Path;

use image::{GrayImage, ImageFormat};
use ndarray::Array2;

use crate::error::{Error, Result};

pub fn write_gray_png(output: &Path, canvas: &Array2<u8>) -> Result<()> {
    let (rows, cols) = canvas.dim();
    let data: Vec<u8> = canvas.iter().copied().collect();
    let img = GrayImage::from_raw(cols as u32, rows as u32, data).ok_or_else(|| {
        Error::Processing(format!("canvas buffer does not match {}x{}", cols, rows))
    })?;
    img.save_with_format(output, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })
}
