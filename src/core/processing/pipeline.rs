use ndarray::{Array2, ArrayView2};
use tracing::debug;

use crate::core::params::CropParams;
use crate::core::processing::bbox::{crop_to_box, find_zero_bounding_box};
use crate::core::processing::center::center_in_image;
use crate::core::processing::ops::invert_intensities;
use crate::error::Result;
use crate::types::{BoundingBox, Intensity};

/// Canvas produced for one image together with the crop box that fed it.
#[derive(Debug, Clone, PartialEq)]
pub struct CenteredImage {
    pub bounding_box: BoundingBox,
    pub canvas: Array2<u8>,
}

impl CenteredImage {
    pub fn width(&self) -> usize {
        self.canvas.ncols()
    }

    pub fn height(&self) -> usize {
        self.canvas.nrows()
    }
}

fn crop_and_center_prepared<T: Intensity>(
    image: ArrayView2<'_, T>,
    params: &CropParams,
) -> Result<CenteredImage> {
    let bounding_box = find_zero_bounding_box(&image, params.background_threshold)?;
    if bounding_box.is_empty() {
        debug!("crop_and_center: no pixel above {}", params.background_threshold);
    }
    let cropped = crop_to_box(image, &bounding_box);
    let canvas = center_in_image(&cropped, params.output_size())?;
    Ok(CenteredImage {
        bounding_box,
        canvas,
    })
}

/// Invert (if requested), crop to the non-background box, and center on the canvas.
pub fn crop_and_center<T: Intensity>(
    image: ArrayView2<'_, T>,
    params: &CropParams,
) -> Result<CenteredImage> {
    if params.invert_image {
        let inverted = invert_intensities(image);
        crop_and_center_prepared(inverted.view(), params)
    } else {
        crop_and_center_prepared(image, params)
    }
}
