//! High-level, ergonomic library API: process one image to a file or to an in-memory
//! canvas, batch helpers for directories, and the serializable batch report. Prefer
//! these entrypoints over the low-level processing modules when integrating cropcenter.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::params::CropParams;
use crate::core::processing::pipeline::CenteredImage;
use crate::error::{Error, ErrorKind, Result};
use crate::io::reader::read_gray_image;
use crate::io::writers::png::write_gray_png;
use crate::types::BoundingBox;

const INPUT_EXTENSION: &str = "png";

/// Input files found in a directory, in processing order
#[derive(Debug, Clone, Default)]
pub struct InputListing {
    pub files: Vec<PathBuf>,
    /// Entries that are not `.png` files
    pub skipped: usize,
}

/// Per-file result in a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    Processed { bounding_box: BoundingBox },
    Failed { kind: ErrorKind, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemReport {
    pub file_name: String,
    #[serde(flatten)]
    pub outcome: ItemOutcome,
}

/// Batch processing report
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub params: CropParams,
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub items: Vec<ItemReport>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl BatchReport {
    fn new(input_dir: &Path, output_dir: &Path, params: &CropParams, skipped: usize) -> Self {
        Self {
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            params: params.clone(),
            processed: 0,
            skipped,
            errors: 0,
            items: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    fn record(&mut self, file_name: String, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Processed { .. } => self.processed += 1,
            ItemOutcome::Failed { .. } => self.errors += 1,
        }
        self.items.push(ItemReport { file_name, outcome });
    }

    /// Items that failed, in processing order
    pub fn failures(&self) -> impl Iterator<Item = &ItemReport> {
        self.items
            .iter()
            .filter(|item| matches!(item.outcome, ItemOutcome::Failed { .. }))
    }
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == INPUT_EXTENSION)
}

/// List the `.png` files directly inside `input_dir`, sorted by file name.
/// Fails when there are none.
pub fn list_input_images(input_dir: &Path) -> Result<InputListing> {
    let read_dir = fs::read_dir(input_dir).map_err(|source| Error::InputDir {
        dir: input_dir.to_path_buf(),
        source,
    })?;

    let mut listing = InputListing::default();
    for entry in read_dir {
        let path = entry
            .map_err(|source| Error::InputDir {
                dir: input_dir.to_path_buf(),
                source,
            })?
            .path();
        if path.is_file() && has_input_extension(&path) {
            listing.files.push(path);
        } else {
            debug!("Skipping non-PNG entry: {:?}", path);
            listing.skipped += 1;
        }
    }

    if listing.files.is_empty() {
        return Err(Error::NoInputFiles {
            dir: input_dir.to_path_buf(),
        });
    }
    listing.files.sort();
    Ok(listing)
}

/// Read, crop, and center one image without touching the disk for output
pub fn process_file_to_buffer(input: &Path, params: &CropParams) -> Result<CenteredImage> {
    params.validate()?;
    let grid = read_gray_image(input)?;
    grid.crop_and_center(params)
}

/// Read, crop, and center one image and write the canvas as an 8-bit gray PNG
pub fn process_file_to_path(input: &Path, output: &Path, params: &CropParams) -> Result<BoundingBox> {
    let centered = process_file_to_buffer(input, params)?;
    write_gray_png(output, &centered.canvas)?;
    Ok(centered.bounding_box)
}

/// Process every `.png` in `input_dir` into `output_dir` under the same file name.
/// If `continue_on_error` is true, per-image errors are logged and recorded in the
/// report and processing continues; otherwise, the first error is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &CropParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    params.validate()?;
    fs::create_dir_all(output_dir).map_err(|source| Error::OutputDir {
        dir: output_dir.to_path_buf(),
        source,
    })?;
    let listing = list_input_images(input_dir)?;

    let mut report = BatchReport::new(input_dir, output_dir, params, listing.skipped);

    for path in &listing.files {
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let output_path = output_dir.join(file_name);
        let file_name = file_name.to_string_lossy().into_owned();

        info!("Processing: {:?} -> {:?}", path, output_path);

        match process_file_to_path(path, &output_path, params) {
            Ok(bounding_box) => {
                debug!("Cropped {} to {}", file_name, bounding_box);
                report.record(file_name, ItemOutcome::Processed { bounding_box });
            }
            Err(e) => {
                warn!("Error processing {:?}: {}", path, e);
                if !continue_on_error {
                    return Err(e);
                }
                report.record(
                    file_name,
                    ItemOutcome::Failed {
                        kind: e.kind(),
                        message: e.to_string(),
                    },
                );
            }
        }
    }

    report.finished_at = Some(Utc::now());
    Ok(report)
}

/// Write `report` as pretty-printed JSON
pub fn write_batch_report(report: &BatchReport, path: &Path) -> Result<()> {
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), report)?;
    Ok(())
}
