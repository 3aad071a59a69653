//! Request and result types for generating posts.
//!
//! A [`PostRequest`] pairs a raw message with the [`Platform`] it is meant for.
//! Generating it yields a [`FormattedPost`], which keeps the formatted text
//! together with the platform so callers can report the character count and
//! warn when the post runs over the platform's limit.
//!
//! # Examples
//!
//! ```
//! use postgen::{Platform, PostRequest};
//!
//! let post = PostRequest::new("Launch day!", Platform::Twitter).format();
//! assert_eq!(post.text(), "Launch day!\n\n#twitter #social");
//! assert_eq!(post.character_count(), 29);
//! assert!(!post.exceeds_limit());
//! ```

use serde::ser::SerializeStruct;

use super::*;

/// A message to format for a given platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
  /// The raw message as entered
  pub text:     String,
  /// The platform to format for
  pub platform: Platform,
}

impl PostRequest {
  /// Create a request for an already validated platform.
  pub fn new(text: impl Into<String>, platform: Platform) -> Self {
    Self { text: text.into(), platform }
  }

  /// Create a request from a platform name.
  ///
  /// # Errors
  ///
  /// Returns [`PostgenError::InvalidPlatform`] if `platform` isn't a known platform.
  pub fn parse(text: impl Into<String>, platform: &str) -> Result<Self, PostgenError> {
    Ok(Self::new(text, platform.parse()?))
  }

  /// Returns `true` if the message is empty or only whitespace, in which case
  /// there is nothing to generate. Uses the same rule as [`format::is_blank`].
  pub fn is_blank(&self) -> bool { format::is_blank(&self.text) }

  /// Format the message for its platform.
  pub fn format(&self) -> FormattedPost { FormattedPost::generate(self) }
}

/// A post formatted for a specific platform.
///
/// Each request produces a fresh value; it is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedPost {
  /// The platform the text was formatted for
  platform: Platform,
  /// The formatted text
  text:     String,
}

impl FormattedPost {
  /// Format `request` and wrap the result.
  pub fn generate(request: &PostRequest) -> Self {
    let text = format::format_post(&request.text, request.platform);
    debug!("Generated {} post with {} characters", request.platform, text.chars().count());
    Self { platform: request.platform, text }
  }

  /// The platform this post was formatted for.
  pub fn platform(&self) -> Platform { self.platform }

  /// The formatted text.
  pub fn text(&self) -> &str { &self.text }

  /// Consume the post and return the formatted text.
  pub fn into_text(self) -> String { self.text }

  /// Number of characters in the formatted text.
  pub fn character_count(&self) -> usize { self.text.chars().count() }

  /// Returns `true` if the formatted text is longer than the platform's limit.
  ///
  /// The check runs on the final text, hashtags included.
  pub fn exceeds_limit(&self) -> bool { self.platform.exceeds_limit(self.character_count()) }

  /// Returns `true` if formatting produced nothing, i.e. the message was blank.
  pub fn is_empty(&self) -> bool { self.text.is_empty() }
}

impl fmt::Display for FormattedPost {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.text) }
}

impl Serialize for FormattedPost {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("FormattedPost", 4)?;
    state.serialize_field("platform", &self.platform)?;
    state.serialize_field("text", &self.text)?;
    state.serialize_field("character_count", &self.character_count())?;
    state.serialize_field("exceeds_limit", &self.exceeds_limit())?;
    state.end()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_request_parse() {
    let request = PostRequest::parse("hello", "instagram").unwrap();
    assert_eq!(request, PostRequest::new("hello", Platform::Instagram));

    assert_eq!(
      PostRequest::parse("hello", "orkut"),
      Err(PostgenError::InvalidPlatform("orkut".to_owned()))
    );
  }

  #[test]
  fn test_blank_request() {
    let request = PostRequest::new(" \n ", Platform::Twitter);
    assert!(request.is_blank());

    let post = request.format();
    assert!(post.is_empty());
    assert_eq!(post.character_count(), 0);
    assert!(!post.exceeds_limit());

    let bom_only = PostRequest::new("\u{FEFF}", Platform::LinkedIn);
    assert!(bom_only.is_blank());
    assert!(bom_only.format().is_empty());

    let nel_only = PostRequest::new("\u{0085}", Platform::LinkedIn);
    assert!(!nel_only.is_blank());
    assert!(!nel_only.format().is_empty());
  }

  #[test]
  fn test_character_count_uses_chars() {
    let post = PostRequest::new("Hi", Platform::LinkedIn).format();
    // "🚀 Hi" + "\n\n" + 43 hashtag characters
    assert_eq!(post.character_count(), 4 + 2 + 43);
    assert!(post.text().len() > post.character_count());
  }

  #[test]
  fn test_twitter_posts_never_exceed_limit() {
    for length in [1, 100, 240, 241, 500, 10_000] {
      let post = PostRequest::new("x".repeat(length), Platform::Twitter).format();
      assert!(post.character_count() <= 258);
      assert!(!post.exceeds_limit());
    }
  }

  #[test]
  fn test_long_posts_on_unlimited_platforms() {
    let post = PostRequest::new("x".repeat(1_000), Platform::Instagram).format();
    assert!(post.character_count() > 1_000);
    assert!(!post.exceeds_limit());
  }

  #[test]
  fn test_serialize() -> anyhow::Result<()> {
    let post = PostRequest::new("Launch day!", Platform::Twitter).format();
    let value = serde_json::to_value(&post)?;
    assert_eq!(value["platform"], "twitter");
    assert_eq!(value["text"], "Launch day!\n\n#twitter #social");
    assert_eq!(value["character_count"], 29);
    assert_eq!(value["exceeds_limit"], false);
    Ok(())
  }
}
