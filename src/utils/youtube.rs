//! YouTube URL helpers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::LazyLock};

/// Watch, short-link, embed, `/v/` and `/u/<c>/` URL shapes. Group 7 is the id.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*((youtu.be/)|(v/)|(/u/[A-Za-z0-9_]/)|(embed/)|(watch\?))\??v?=?([^#&?]*).*")
        .expect("video id pattern is valid")
});

/// YouTube video ids are always 11 characters.
const VIDEO_ID_LEN: usize = 11;

/// Extract the video id from a YouTube URL.
pub fn extract_video_id(url: &str) -> Option<String> {
    let id = VIDEO_ID_RE.captures(url)?.get(7)?.as_str();
    (id.chars().count() == VIDEO_ID_LEN).then(|| id.to_owned())
}

/// Thumbnail size published by YouTube for every video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    /// 120x90
    Default,
    /// 320x180
    Medium,
    /// 480x360
    #[default]
    High,
    /// 1280x720, missing for some older uploads
    Maxres,
}

impl ThumbnailQuality {
    pub const ALL: &'static [Self] = &[Self::Default, Self::Medium, Self::High, Self::Maxres];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Maxres => "maxres",
        }
    }

    /// Image file name on `img.youtube.com`.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "mqdefault",
            Self::High => "hqdefault",
            Self::Maxres => "maxresdefault",
        }
    }
}

impl fmt::Display for ThumbnailQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThumbnailQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|q| q.as_str() == s)
            .ok_or_else(|| format!("unknown quality `{s}`, expected default, medium, high or maxres"))
    }
}

pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!("https://img.youtube.com/vi/{video_id}/{}.jpg", quality.file_name())
}

/// Privacy-friendly embed URL for the video player.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube-nocookie.com/embed/{video_id}")
}
