use ndarray::{Array2, ArrayView2};

use crate::types::Intensity;

/// Element-wise inversion: MAX - v
pub fn invert_intensities<T: Intensity>(image: ArrayView2<'_, T>) -> Array2<T> {
    image.mapv(T::invert)
}
