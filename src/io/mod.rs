//! I/O layer for reading gray-scale images into grids and writing canvases.
//! Provides the `reader` that decodes 8/16-bit gray PNGs and `writers` for
//! 8-bit gray PNG output.
pub mod reader;
pub use reader::{Grid, read_gray_image};

pub mod writers;
pub use writers::png::write_gray_png;
