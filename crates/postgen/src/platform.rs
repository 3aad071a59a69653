//! The set of social media platforms posts can be formatted for.
//!
//! [`Platform`] is a closed enum: every formatting rule, display name and
//! character limit is keyed by one of its three variants. Free-form names are
//! only accepted through [`FromStr`], which rejects anything unknown with
//! [`PostgenError::InvalidPlatform`].
//!
//! # Examples
//!
//! ```
//! use postgen::Platform;
//!
//! let platform: Platform = "Twitter".parse().unwrap();
//! assert_eq!(platform, Platform::Twitter);
//! assert_eq!(platform.as_str(), "twitter");
//! assert_eq!(platform.character_limit(), Some(280));
//! ```

use super::*;

/// A social media platform with its own formatting rules.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
  /// LinkedIn: professional tone with career and networking hashtags
  LinkedIn,
  /// Twitter: short messages, truncated when they run long
  Twitter,
  /// Instagram: sparkle-wrapped text with lifestyle hashtags
  Instagram,
}

impl Platform {
  /// Every supported platform, in the order they are offered to users.
  pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Twitter, Platform::Instagram];

  /// The lowercase tag used to name this platform on the command line and in
  /// serialized output.
  pub fn as_str(&self) -> &'static str {
    match self {
      Platform::LinkedIn => "linkedin",
      Platform::Twitter => "twitter",
      Platform::Instagram => "instagram",
    }
  }

  /// Human-readable platform name.
  pub fn display_name(&self) -> &'static str {
    match self {
      Platform::LinkedIn => "LinkedIn",
      Platform::Twitter => "Twitter",
      Platform::Instagram => "Instagram",
    }
  }

  /// A short description of what reads well on this platform.
  pub fn guideline(&self) -> &'static str {
    match self {
      Platform::LinkedIn => "Professional tone, industry hashtags, networking focus",
      Platform::Twitter => "Concise, 280 character limit, trending hashtags",
      Platform::Instagram => "Visual appeal, lifestyle hashtags, engaging emojis",
    }
  }

  /// The platform's post length limit in characters, if it has one we warn about.
  ///
  /// This is independent of the truncation applied while formatting: see
  /// [`crate::format`] for the Twitter truncation threshold.
  pub fn character_limit(&self) -> Option<usize> {
    match self {
      Platform::Twitter => Some(280),
      Platform::LinkedIn | Platform::Instagram => None,
    }
  }

  /// Returns `true` when a post of `character_count` characters is over this
  /// platform's limit. Platforms without a limit never exceed it.
  pub fn exceeds_limit(&self, character_count: usize) -> bool {
    self.character_limit().is_some_and(|limit| character_count > limit)
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.display_name()) }
}

impl FromStr for Platform {
  type Err = PostgenError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match &s.trim().to_lowercase() as &str {
      "linkedin" => Ok(Platform::LinkedIn),
      "twitter" => Ok(Platform::Twitter),
      "instagram" => Ok(Platform::Instagram),
      _ => Err(PostgenError::InvalidPlatform(s.to_owned())),
    }
  }
}
