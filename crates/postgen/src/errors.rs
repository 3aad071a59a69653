//! Error types for the postgen library.
//!
//! Formatting itself is total: any message paired with a known [`Platform`]
//! produces a post, and blank messages simply produce an empty one. The only
//! failure mode is naming a platform that does not exist, which can happen
//! wherever a platform arrives as free-form text (command line flags, config
//! values, deserialized input).
//!
//! # Examples
//!
//! ```
//! use postgen::{errors::PostgenError, Platform};
//!
//! match "myspace".parse::<Platform>() {
//!   Err(PostgenError::InvalidPlatform(name)) => assert_eq!(name, "myspace"),
//!   Ok(platform) => panic!("unexpected platform {platform}"),
//! }
//! ```
//!
//! [`Platform`]: crate::Platform

use thiserror::Error;

/// Errors that can occur when working with the postgen library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostgenError {
  /// The provided platform name doesn't match any supported platform.
  ///
  /// Recognized names are `linkedin`, `twitter` and `instagram` (case-insensitive).
  /// The string parameter contains the rejected value as given.
  #[error("Invalid platform `{0}`, expected one of: linkedin, twitter, instagram")]
  InvalidPlatform(String),
}
