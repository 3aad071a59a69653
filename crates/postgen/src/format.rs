//! Platform-specific post formatting.
//!
//! Each platform decorates the message differently and appends its own fixed
//! hashtag set:
//! - LinkedIn prefixes a rocket and appends career hashtags
//! - Twitter keeps the message as is, shortening it when it runs long
//! - Instagram wraps the message in sparkles and appends lifestyle hashtags
//!
//! Messages that are empty or whitespace-only format to the empty string on every
//! platform (see [`is_blank`] for what counts as whitespace). Otherwise the
//! message is used exactly as given, surrounding whitespace included.
//!
//! # Examples
//!
//! ```
//! use postgen::{format, Platform};
//!
//! assert_eq!(
//!   format::format_post("Check out our new product launch!", Platform::Twitter),
//!   "Check out our new product launch!\n\n#twitter #social"
//! );
//!
//! // Long tweets are cut down to 237 characters and an ellipsis
//! let long = "A".repeat(250);
//! let post = format::format_post(&long, Platform::Twitter);
//! assert_eq!(post, format!("{}...\n\n#twitter #social", "A".repeat(237)));
//! ```

use super::*;

/// Twitter messages longer than this many characters get truncated.
pub const TWITTER_TRUNCATION_THRESHOLD: usize = 240;

/// Number of characters kept from a Twitter message that gets truncated.
///
/// Not derived from [`TWITTER_TRUNCATION_THRESHOLD`]; the two are separate rules.
pub const TWITTER_TRUNCATED_LENGTH: usize = 237;

/// Marker appended to a truncated Twitter message.
pub const ELLIPSIS: &str = "...";

/// Prefix placed in front of LinkedIn posts.
const LINKEDIN_PREFIX: &str = "🚀 ";
/// Hashtags appended to LinkedIn posts.
const LINKEDIN_HASHTAGS: &str = "#professional #linkedin #networking #career";
/// Hashtags appended to Twitter posts.
const TWITTER_HASHTAGS: &str = "#twitter #social";
/// Decoration placed on both sides of Instagram posts.
const INSTAGRAM_SPARKLE: &str = "✨";
/// Hashtags appended to Instagram posts.
const INSTAGRAM_HASHTAGS: &str = "#instagram #social #lifestyle #inspiration #photooftheday";

/// Formats `text` as a post for `platform`.
///
/// # Arguments
///
/// * `text` - The raw message. It is not trimmed; only a message that is entirely whitespace is
///   treated specially.
/// * `platform` - The platform whose rules apply.
///
/// # Returns
///
/// The formatted post, or an empty `String` when `text` is blank.
///
/// # Examples
///
/// ```
/// use postgen::{format_post, Platform};
///
/// assert_eq!(
///   format_post("Hiring!", Platform::LinkedIn),
///   "🚀 Hiring!\n\n#professional #linkedin #networking #career"
/// );
/// assert_eq!(format_post("", Platform::LinkedIn), "");
/// ```
pub fn format_post(text: &str, platform: Platform) -> String {
  if is_blank(text) {
    trace!("Blank message, nothing to format for {platform}");
    return String::new();
  }

  match platform {
    Platform::LinkedIn => format!("{LINKEDIN_PREFIX}{text}\n\n{LINKEDIN_HASHTAGS}"),
    Platform::Twitter => format!("{}\n\n{TWITTER_HASHTAGS}", shorten_for_twitter(text)),
    Platform::Instagram =>
      format!("{INSTAGRAM_SPARKLE} {text} {INSTAGRAM_SPARKLE}\n\n{INSTAGRAM_HASHTAGS}"),
  }
}

/// Formats `text` for a platform given by name.
///
/// This is the entry point for callers holding a platform as free-form text.
///
/// # Errors
///
/// Returns [`PostgenError::InvalidPlatform`] if `platform` isn't a recognized
/// platform name. The message is checked only after the platform, so an unknown
/// platform is rejected even for a blank message.
///
/// # Examples
///
/// ```
/// use postgen::{format_post_str, PostgenError};
///
/// assert_eq!(format_post_str("Hi", "twitter").unwrap(), "Hi\n\n#twitter #social");
/// assert!(matches!(format_post_str("Hi", "tiktok"), Err(PostgenError::InvalidPlatform(_))));
/// ```
pub fn format_post_str(text: &str, platform: &str) -> Result<String, PostgenError> {
  let platform = platform.parse::<Platform>()?;
  Ok(format_post(text, platform))
}

/// Returns `true` if `text` has nothing to post: it is empty or made up only of
/// whitespace and line terminators.
///
/// The whitespace set is the one web form input is trimmed with (ECMAScript
/// `WhiteSpace` and `LineTerminator`), not [`char::is_whitespace`]: a byte order
/// mark (U+FEFF) counts as blank, while NEL (U+0085) is content.
///
/// # Examples
///
/// ```
/// use postgen::format::is_blank;
///
/// assert!(is_blank(" \t\n"));
/// assert!(is_blank("\u{FEFF}"));
/// assert!(!is_blank("\u{0085}"));
/// assert!(!is_blank(" a "));
/// ```
pub fn is_blank(text: &str) -> bool { text.chars().all(is_form_whitespace) }

/// ECMAScript whitespace: `WhiteSpace` (including every `Zs` space separator)
/// plus `LineTerminator`.
fn is_form_whitespace(c: char) -> bool {
  matches!(
    c,
    '\u{0009}'
      | '\u{000A}'
      | '\u{000B}'
      | '\u{000C}'
      | '\u{000D}'
      | '\u{0020}'
      | '\u{00A0}'
      | '\u{1680}'
      | '\u{2000}'..='\u{200A}'
      | '\u{2028}'
      | '\u{2029}'
      | '\u{202F}'
      | '\u{205F}'
      | '\u{3000}'
      | '\u{FEFF}'
  )
}

/// Applies the Twitter length rule, borrowing `text` when it is short enough.
fn shorten_for_twitter(text: &str) -> std::borrow::Cow<'_, str> {
  // Only the first THRESHOLD + 1 chars matter for the length check.
  if text.chars().nth(TWITTER_TRUNCATION_THRESHOLD).is_none() {
    return text.into();
  }

  let cut = text.char_indices().nth(TWITTER_TRUNCATED_LENGTH).map_or(text.len(), |(i, _)| i);
  debug!(
    "Truncating twitter message from {} to {TWITTER_TRUNCATED_LENGTH} characters",
    text.chars().count()
  );
  format!("{}{ELLIPSIS}", &text[..cut]).into()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_linkedin() {
    assert_eq!(
      format_post("We are hiring", Platform::LinkedIn),
      "🚀 We are hiring\n\n#professional #linkedin #networking #career"
    );
  }

  #[test]
  fn test_format_instagram() {
    assert_eq!(
      format_post("New blog post is live", Platform::Instagram),
      "✨ New blog post is live ✨\n\n#instagram #social #lifestyle #inspiration #photooftheday"
    );
  }

  #[test]
  fn test_format_twitter_short() {
    assert_eq!(
      format_post("Check out our new product launch!", Platform::Twitter),
      "Check out our new product launch!\n\n#twitter #social"
    );
  }

  #[test]
  fn test_format_twitter_truncation_boundary() {
    let at_threshold = "a".repeat(240);
    assert_eq!(
      format_post(&at_threshold, Platform::Twitter),
      format!("{at_threshold}\n\n#twitter #social")
    );

    let over_threshold = "b".repeat(241);
    assert_eq!(
      format_post(&over_threshold, Platform::Twitter),
      format!("{}...\n\n#twitter #social", "b".repeat(237))
    );
  }

  #[test]
  fn test_format_twitter_counts_characters_not_bytes() {
    // 240 two-byte characters is 480 bytes but still at the threshold
    let accented = "é".repeat(240);
    assert_eq!(
      format_post(&accented, Platform::Twitter),
      format!("{accented}\n\n#twitter #social")
    );

    let emoji = "🦀".repeat(245);
    assert_eq!(
      format_post(&emoji, Platform::Twitter),
      format!("{}...\n\n#twitter #social", "🦀".repeat(237))
    );
  }

  #[test]
  fn test_blank_text_is_empty_for_every_platform() {
    for platform in Platform::ALL {
      assert_eq!(format_post("", platform), "");
      assert_eq!(format_post("  \n\t ", platform), "");
    }
  }

  #[test]
  fn test_blank_uses_form_whitespace() {
    for blank in ["\u{FEFF}", "\u{00A0}\u{3000}", "\u{2028}\u{2029}", "\u{000B}\u{000C}"] {
      for platform in Platform::ALL {
        assert_eq!(format_post(blank, platform), "", "{blank:?} on {platform}");
      }
    }

    // NEL is not whitespace for form input, so it is posted as is
    assert_eq!(
      format_post("\u{0085}", Platform::LinkedIn),
      "🚀 \u{0085}\n\n#professional #linkedin #networking #career"
    );
    assert_eq!(format_post("\u{0085}", Platform::Twitter), "\u{0085}\n\n#twitter #social");
  }

  #[test]
  fn test_text_is_not_trimmed() {
    assert_eq!(
      format_post("  spaced  ", Platform::LinkedIn),
      "🚀   spaced  \n\n#professional #linkedin #networking #career"
    );
    assert_eq!(format_post(" hi", Platform::Twitter), " hi\n\n#twitter #social");
  }

  #[test]
  fn test_format_post_str() {
    assert_eq!(format_post_str("Hi", "Instagram"), Ok(format_post("Hi", Platform::Instagram)));
    assert_eq!(
      format_post_str("", "friendster"),
      Err(PostgenError::InvalidPlatform("friendster".to_owned()))
    );
    assert_eq!(format_post_str("", "linkedin"), Ok(String::new()));
  }
}
