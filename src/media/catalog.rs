//! Format families and the fixed download catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format family of a downloadable variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    /// Video container
    #[default]
    Mp4,
    /// Audio container
    Mp3,
}

impl MediaFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFormat::Mp4 => "mp4",
            MediaFormat::Mp3 => "mp3",
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaFormat::Mp4)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MediaFormat::Mp4 => "MP4",
            MediaFormat::Mp3 => "MP3",
        }
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mp4" => Ok(MediaFormat::Mp4),
            "mp3" => Ok(MediaFormat::Mp3),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// One downloadable variant: format family, quality label, display size.
/// Immutable; the catalog is fixed and identical for every resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatOption {
    pub format: MediaFormat,
    pub quality: &'static str,
    pub size: &'static str,
}

/// The fixed catalog attached to every resolved item: three video
/// qualities followed by three audio bitrates, in presentation order.
pub const FORMAT_CATALOG: [FormatOption; 6] = [
    FormatOption { format: MediaFormat::Mp4, quality: "360p", size: "20 MB" },
    FormatOption { format: MediaFormat::Mp4, quality: "720p", size: "45 MB" },
    FormatOption { format: MediaFormat::Mp4, quality: "1080p", size: "90 MB" },
    FormatOption { format: MediaFormat::Mp3, quality: "128kbps", size: "10 MB" },
    FormatOption { format: MediaFormat::Mp3, quality: "256kbps", size: "18 MB" },
    FormatOption { format: MediaFormat::Mp3, quality: "320kbps", size: "25 MB" },
];
