//! A library for turning a plain message into a post formatted for a specific
//! social media platform (LinkedIn, Twitter, Instagram).
//!
//! Formatting is a pure function of the message and the [`Platform`]: each
//! platform gets its own decoration and hashtag set, and Twitter messages are
//! shortened when they run long.
//!
//! # Example
//! ```rust
//! use postgen::{format_post, Platform};
//!
//! let post = format_post("New blog post is live", Platform::Instagram);
//! assert_eq!(
//!   post,
//!   "✨ New blog post is live ✨\n\n#instagram #social #lifestyle #inspiration #photooftheday"
//! );
//!
//! // Blank messages produce nothing for any platform
//! assert_eq!(format_post("   ", Platform::LinkedIn), "");
//! ```

#![warn(missing_docs, clippy::missing_docs_in_private_items)]
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
#[cfg(test)] use tracing_test::traced_test;

pub mod errors;
pub mod format;
pub mod platform;
pub mod post;

pub use errors::PostgenError;
pub use format::{format_post, format_post_str};
pub use platform::Platform;
pub use post::{FormattedPost, PostRequest};
