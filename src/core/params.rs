use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Processing parameters suitable for config files and batch reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropParams {
    /// Canvas height in pixels; must exceed every cropped image's height
    pub out_height: usize,
    /// Canvas width in pixels; must exceed every cropped image's width
    pub out_width: usize,
    /// Pixels at or below this value count as background
    #[serde(default)]
    pub background_threshold: u32,
    /// If true, invert intensities (`MAX - v`) before cropping
    #[serde(default)]
    pub invert_image: bool,
}

impl CropParams {
    pub fn new(out_height: usize, out_width: usize) -> Self {
        Self {
            out_height,
            out_width,
            background_threshold: 0,
            invert_image: false,
        }
    }

    pub fn output_size(&self) -> (usize, usize) {
        (self.out_height, self.out_width)
    }

    pub fn validate(&self) -> Result<()> {
        if self.out_height == 0 {
            return Err(Error::InvalidArgument {
                arg: "out_height",
                value: self.out_height.to_string(),
            });
        }
        if self.out_width == 0 {
            return Err(Error::InvalidArgument {
                arg: "out_width",
                value: self.out_width.to_string(),
            });
        }
        Ok(())
    }
}
