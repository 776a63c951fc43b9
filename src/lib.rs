#![doc = r#"
cropcenter — crop gray-scale images to their content and re-center it by center of mass.

This crate prepares images for downstream use (for example classifier training data):
every row and column whose pixels are all at or below a background threshold is
trimmed from the borders, and the remaining block is placed on a fixed-size, zero-filled
8-bit canvas so that its intensity-weighted centroid sits at the canvas center. It
powers the `cropcenter` CLI and can be embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
cropcenter = "0.1"
```

Quick start: process a directory
--------------------------------
```rust,no_run
use std::path::Path;
use cropcenter::{process_directory_to_path, CropParams};

fn main() -> cropcenter::Result<()> {
    let mut params = CropParams::new(28, 28);
    params.background_threshold = 10;

    let report = process_directory_to_path(
        Path::new("/data/digits"),
        Path::new("/out/digits_centered"),
        &params,
        true, // continue_on_error
    )?;

    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Working on arrays
-----------------
```rust
use ndarray::Array2;
use cropcenter::{center_in_image, crop_to_box, find_zero_bounding_box};

fn main() -> cropcenter::Result<()> {
    let mut grid = Array2::<u8>::zeros((10, 10));
    grid[[1, 7]] = 255;

    let bbox = find_zero_bounding_box(&grid, 0)?;
    assert_eq!((bbox.top, bbox.bottom, bbox.left, bbox.right), (1, 2, 7, 8));

    let cropped = crop_to_box(grid.view(), &bbox);
    let canvas = center_in_image(&cropped, (5, 5))?;
    assert_eq!(canvas[[2, 2]], 255);
    Ok(())
}
```

Error handling
--------------
All public functions return `cropcenter::Result<T>`; match on `cropcenter::Error` to
handle specific cases, or use `Error::kind()` for the coarse classification used in
batch reports.

```rust,no_run
use std::path::Path;
use cropcenter::{process_file_to_path, CropParams, Error};

fn main() {
    let params = CropParams::new(28, 28);
    match process_file_to_path(Path::new("in/7.png"), Path::new("out/7.png"), &params) {
        Ok(bbox) => println!("cropped to {bbox}"),
        Err(Error::ShapeMismatch { axis, input, output }) => {
            eprintln!("crop {axis} {input} does not fit canvas {axis} {output}")
        }
        Err(Error::Decode { path, source }) => eprintln!("cannot decode {}: {source}", path.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points and the batch report.
- [`core`](crate::core) — bounding-box detection, centering, inversion, and the pipeline.
- [`types`] — `BoundingBox`, `CenterOfMass`, and the `Intensity` sample trait.
- [`io`] — gray-scale image reader and PNG writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::CropParams;
pub use crate::core::processing::pipeline::CenteredImage;
pub use error::{Error, ErrorKind, Result};
pub use types::{BoundingBox, CenterOfMass, Intensity};

// Algorithms
pub use crate::core::processing::bbox::{crop_to_box, find_zero_bounding_box};
pub use crate::core::processing::center::{center_in_image, center_of_mass};
pub use crate::core::processing::ops::invert_intensities;
pub use crate::core::processing::pipeline::crop_and_center;

// Readers and writers
pub use io::{Grid, read_gray_image, write_gray_png};

// High-level API re-exports
pub use api::{
    BatchReport, InputListing, ItemOutcome, ItemReport, list_input_images,
    process_directory_to_path, process_file_to_buffer, process_file_to_path, write_batch_report,
};
