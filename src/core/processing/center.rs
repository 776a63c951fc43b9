use ndarray::{Array2, ArrayBase, ArrayView2, Data, Dimension, Zip, s};
use tracing::debug;

use crate::core::processing::bbox::as_grid;
use crate::error::{Error, Result};
use crate::types::{CenterOfMass, Intensity};

/// Intensity-weighted centroid. `None` when the grid carries no mass.
pub fn center_of_mass<T: Intensity>(image: &ArrayView2<'_, T>) -> Option<CenterOfMass> {
    let mut total = 0.0;
    let mut row_moment = 0.0;
    let mut col_moment = 0.0;
    for ((r, c), v) in image.indexed_iter() {
        let w = v.to_f64();
        total += w;
        row_moment += r as f64 * w;
        col_moment += c as f64 * w;
    }

    if total > 0.0 {
        Some(CenterOfMass {
            row: row_moment / total,
            col: col_moment / total,
        })
    } else {
        None
    }
}

/// Start index along one axis: aim the mass center at the canvas center, then keep
/// the block inside `[0, canvas_dim)`.
fn placement_offset(canvas_dim: usize, input_dim: usize, mass_center: isize) -> usize {
    let canvas_center = (canvas_dim / 2) as isize;
    let offset = (canvas_center - mass_center).max(0) as usize;
    let overflow = (offset + input_dim).saturating_sub(canvas_dim);
    offset - overflow
}

/// Place `image` on a zeroed `u8` canvas of `output_size` so that its center of mass
/// sits as close to the canvas center as the canvas bounds allow.
///
/// The canvas must be strictly larger than the input on both axes. Values are
/// narrowed to `u8` without rescaling. An empty input produces an all-zero canvas;
/// an input with no mass is placed as if it were uniform.
pub fn center_in_image<S, D>(image: &ArrayBase<S, D>, output_size: (usize, usize)) -> Result<Array2<u8>>
where
    S: Data,
    S::Elem: Intensity,
    D: Dimension,
{
    let image = as_grid(image)?;
    let (rows, cols) = image.dim();
    let (out_rows, out_cols) = output_size;

    if out_rows <= rows {
        return Err(Error::ShapeMismatch {
            axis: "height",
            input: rows,
            output: out_rows,
        });
    }
    if out_cols <= cols {
        return Err(Error::ShapeMismatch {
            axis: "width",
            input: cols,
            output: out_cols,
        });
    }

    let mut canvas = Array2::<u8>::zeros(output_size);
    if image.is_empty() {
        debug!("center_in_image: empty input, returning blank {}x{} canvas", out_rows, out_cols);
        return Ok(canvas);
    }

    let com = center_of_mass(&image).unwrap_or(CenterOfMass {
        row: (rows - 1) as f64 / 2.0,
        col: (cols - 1) as f64 / 2.0,
    });
    let (com_row, com_col) = com.floor();
    let top = placement_offset(out_rows, rows, com_row);
    let left = placement_offset(out_cols, cols, com_col);

    debug!(
        "center_in_image: {}x{} -> {}x{}, center of mass=({:.2}, {:.2}), offset=({}, {})",
        rows, cols, out_rows, out_cols, com.row, com.col, top, left
    );

    Zip::from(canvas.slice_mut(s![top..top + rows, left..left + cols]))
        .and(&image)
        .for_each(|dst, &src| *dst = src.narrow_to_u8());

    Ok(canvas)
}
