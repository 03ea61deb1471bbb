//! Resolved media records

use serde::Serialize;

use crate::media::catalog::FormatOption;

/// Descriptive record for one resolved lookup. Immutable once built;
/// created only by a resolver and replaced wholesale on the next lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaReference {
    /// Opaque video identifier extracted from the URL; may be empty
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    /// Display duration, e.g. "10:30"
    pub duration: String,
    pub author: String,
}

impl MediaReference {
    /// Lower-resolution thumbnail for the same identifier, used when the
    /// max-resolution image does not exist for a video.
    pub fn fallback_thumbnail(&self) -> String {
        fallback_thumbnail(&self.id)
    }
}

/// A resolved item together with its downloadable variants. The format
/// list is regenerated for every resolution, so selections made against a
/// previous item never alias into a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaDetails {
    #[serde(flatten)]
    pub reference: MediaReference,
    pub formats: Vec<FormatOption>,
}

/// Max-resolution thumbnail URL for a video identifier.
pub fn max_res_thumbnail(video_id: &str) -> String {
    format!("https://i.ytimg.com/vi/{}/maxresdefault.jpg", video_id)
}

/// Fallback thumbnail URL for a video identifier.
pub fn fallback_thumbnail(video_id: &str) -> String {
    format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", video_id)
}
