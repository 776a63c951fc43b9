//! Command Line Interface (CLI) layer for cropcenter.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) for the batch flow. It wires user-provided options to the
//! underlying library functionality exposed via `cropcenter::api`.
//!
//! If you are embedding cropcenter into another application, prefer using
//! the high-level `cropcenter::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
