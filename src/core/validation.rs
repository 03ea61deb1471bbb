//! URL validation and identifier extraction
//!
//! Gatekeeper for every lookup: checks that the submitted text looks like
//! a YouTube URL and pulls the video identifier out of it. The shape check
//! accepts scheme-less input (`youtube.com/watch?v=…`), so this is a
//! pattern match on the raw string rather than a full URL parse.

use lazy_regex::{regex, Lazy, Regex};
use thiserror::Error;

/// Accepted URL shape: optional scheme, optional `www.`, one of the two
/// known hosts, then a slash and at least one further character.
/// Anchored, so leading or trailing junk fails the match.
static YOUTUBE_URL_SHAPE: &Lazy<Regex> = regex!(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+$");

/// Validation errors for user-submitted URLs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was empty (or whitespace only)
    #[error("empty URL input")]
    EmptyInput,

    /// The input did not match either recognized YouTube URL shape
    #[error("unrecognized URL shape: {0}")]
    UnrecognizedUrlShape(String),
}

impl ValidationError {
    /// User-facing message for this error, suitable for a notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "Please enter a YouTube URL",
            ValidationError::UnrecognizedUrlShape(_) => "Please enter a valid YouTube URL",
        }
    }
}

/// A validated lookup request: the raw URL as submitted plus the video
/// identifier extracted from it. The identifier may be empty, since
/// extraction never fails once the shape check passes (see
/// [`extract_video_id`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRequest {
    /// The submitted URL, unmodified
    pub url: String,
    /// Extracted video identifier; empty when no identifier was present
    pub video_id: String,
}

/// Validates a free-text URL and extracts the video identifier
///
/// The emptiness check runs on the trimmed input, but the shape check and
/// extraction run on the raw string; a URL with leading whitespace fails
/// the anchored shape pattern.
///
/// # Arguments
/// * `input` - Free-text URL as submitted by the user
///
/// # Returns
/// * `Ok(MediaRequest)` - The input matched a recognized YouTube URL shape
/// * `Err(ValidationError)` - Empty input or unrecognized shape
pub fn parse_media_url(input: &str) -> Result<MediaRequest, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if !YOUTUBE_URL_SHAPE.is_match(input) {
        return Err(ValidationError::UnrecognizedUrlShape(input.to_string()));
    }

    Ok(MediaRequest {
        url: input.to_string(),
        video_id: extract_video_id(input),
    })
}

/// Extracts the video identifier from a URL that passed the shape check
///
/// Watch-page URLs take the text between the first `v=` and the next `&`;
/// short links take the text between the first `youtu.be/` and the next
/// `?`. A URL matching neither convention (e.g. a playlist link on a
/// recognized host) yields the empty string, as does a bare `v=` with no
/// value. Empty identifiers are accepted downstream; the mock backend
/// resolves them like any other.
///
/// # Arguments
/// * `url` - The raw URL string
///
/// # Returns
/// * The extracted identifier, possibly empty
pub fn extract_video_id(url: &str) -> String {
    if url.contains("youtube.com/watch?v=") {
        url.split("v=")
            .nth(1)
            .unwrap_or("")
            .split('&')
            .next()
            .unwrap_or("")
            .to_string()
    } else if url.contains("youtu.be/") {
        url.split("youtu.be/")
            .nth(1)
            .unwrap_or("")
            .split('?')
            .next()
            .unwrap_or("")
            .to_string()
    } else {
        String::new()
    }
}
