//! Error types for the postgen CLI application.
//!
//! Everything that can stop a command is wrapped here: failed interactive
//! prompts, reading stdin and serializing `--json` output. Invalid platform
//! names never reach this type; clap rejects them while parsing arguments,
//! using the library's `InvalidPlatform` message. Clipboard failures are absent
//! too; copying is best effort and only ever reported as a warning.

use thiserror::Error;

/// Errors that can occur during CLI operations.
///
/// The variants are `transparent` so the underlying message is what the user sees.
#[derive(Error, Debug)]
pub enum PostgenCliErrors {
  /// Errors from user interaction dialogs
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// Reading input or writing output failed
  #[error(transparent)]
  IO(#[from] std::io::Error),

  /// Serializing a post to JSON failed
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
