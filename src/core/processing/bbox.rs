use ndarray::{ArrayBase, ArrayView1, ArrayView2, Axis, Data, Dimension, Ix2, s};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{BoundingBox, Intensity};

/// View any array as a 2D grid, rejecting every other rank.
pub fn as_grid<S, D>(image: &ArrayBase<S, D>) -> Result<ArrayView2<'_, S::Elem>>
where
    S: Data,
    D: Dimension,
{
    image
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| Error::InvalidRank { ndim: image.ndim() })
}

fn is_background<T: Intensity>(lane: &ArrayView1<'_, T>, threshold: u32) -> bool {
    lane.iter().all(|v| v.to_u32() <= threshold)
}

/// Count leading background lanes along `axis`, from the front or the back.
fn count_background<T: Intensity>(
    image: &ArrayView2<'_, T>,
    axis: Axis,
    threshold: u32,
    from_back: bool,
) -> usize {
    let lanes = image.axis_iter(axis);
    if from_back {
        lanes.rev().take_while(|l| is_background(l, threshold)).count()
    } else {
        lanes.take_while(|l| is_background(l, threshold)).count()
    }
}

/// Find the half-open box enclosing every pixel strictly above `threshold`.
///
/// Each edge is an independent scan over whole rows or columns. When no pixel is
/// above the threshold the result is the degenerate box `(H, 0, W, 0)`.
pub fn find_zero_bounding_box<S, D>(image: &ArrayBase<S, D>, threshold: u32) -> Result<BoundingBox>
where
    S: Data,
    S::Elem: Intensity,
    D: Dimension,
{
    let image = as_grid(image)?;
    let (rows, cols) = image.dim();

    let top = count_background(&image, Axis(0), threshold, false);
    let bottom = rows - count_background(&image, Axis(0), threshold, true);
    let left = count_background(&image, Axis(1), threshold, false);
    let right = cols - count_background(&image, Axis(1), threshold, true);

    let bbox = BoundingBox::new(top, bottom, left, right);
    debug!("find_zero_bounding_box: {}x{} grid -> {}", rows, cols, bbox);
    Ok(bbox)
}

/// Slice `image` by `bbox`. A degenerate box yields an empty view.
pub fn crop_to_box<'a, T>(image: ArrayView2<'a, T>, bbox: &BoundingBox) -> ArrayView2<'a, T> {
    let (rows, cols) = image.dim();
    let top = bbox.top.min(rows);
    let bottom = bbox.bottom.clamp(top, rows);
    let left = bbox.left.min(cols);
    let right = bbox.right.clamp(left, cols);
    image.slice_move(s![top..bottom, left..right])
}
