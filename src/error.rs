//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, and JSON errors, and provides semantic
//! variants for argument validation, array shape checks, and batch setup failures.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Only 2D arrays are supported. Got {ndim}D array")]
    InvalidRank { ndim: usize },

    #[error("Output {axis} must be greater than input {axis}. Got input {input} and output {output}")]
    ShapeMismatch {
        axis: &'static str,
        input: usize,
        output: usize,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Cannot read input directory {}: {source}", .dir.display())]
    InputDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No .png files found in {}", .dir.display())]
    NoInputFiles { dir: PathBuf },

    #[error("Cannot create output directory {}: {source}", .dir.display())]
    OutputDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

/// Coarse classification used to tag per-image failures in a batch report.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Configuration,
    Shape,
    Decode,
    Encode,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. }
            | Error::InputDir { .. }
            | Error::NoInputFiles { .. }
            | Error::OutputDir { .. } => ErrorKind::Configuration,
            Error::InvalidRank { .. } | Error::ShapeMismatch { .. } => ErrorKind::Shape,
            Error::Decode { .. } | Error::Processing(_) => ErrorKind::Decode,
            Error::Encode { .. } => ErrorKind::Encode,
            Error::Io(_) | Error::Json(_) => ErrorKind::Io,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Shape => "shape",
            ErrorKind::Decode => "decode",
            ErrorKind::Encode => "encode",
            ErrorKind::Io => "io",
        };
        write!(f, "{}", s)
    }
}
