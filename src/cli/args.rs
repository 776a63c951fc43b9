use clap::Parser;
use std::path::PathBuf;

use cropcenter::CropParams;

#[derive(Parser)]
#[command(
    name = "cropcenter",
    version,
    about = "Crop gray-scale PNGs to their content and center it by center of mass",
    after_help = "Example:\n  cropcenter --in-dir ./some_pngs --out-dir ./centered_pngs --out-height 28 --out-width 28"
)]
pub struct CliArgs {
    /// Directory with input images (.png)
    #[arg(short, long, visible_alias = "in_dir")]
    pub in_dir: PathBuf,

    /// Directory for output images (created if missing)
    #[arg(short, long, visible_alias = "out_dir")]
    pub out_dir: PathBuf,

    /// Height of the output images
    #[arg(long, visible_alias = "out_height")]
    pub out_height: usize,

    /// Width of the output images
    #[arg(long, visible_alias = "out_width")]
    pub out_width: usize,

    /// Pixels at or below this intensity are treated as background
    #[arg(long, visible_alias = "background_threshold", default_value_t = 0)]
    pub background_threshold: u32,

    /// Invert intensities (e.g. 255 - v) before cropping
    #[arg(long, visible_alias = "invert_image", default_value_t = false)]
    pub invert_image: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Abort on the first image that fails instead of skipping it
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Write a JSON batch report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl CliArgs {
    pub fn params(&self) -> CropParams {
        CropParams {
            out_height: self.out_height,
            out_width: self.out_width,
            background_threshold: self.background_threshold,
            invert_image: self.invert_image,
        }
    }
}
