//! # Source Items
//!
//! Raw tweets and YouTube comments as handed over by a fetch collaborator.

use crate::defaults;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform an item was fetched from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    /// Twitter/X posts
    Twitter,
    /// YouTube video comments
    YouTube,
}

impl Platform {
    /// Get platform display name
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::YouTube => "YouTube",
        }
    }

    /// All supported platforms, in report order
    pub fn all() -> [Platform; 2] {
        [Platform::Twitter, Platform::YouTube]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tweet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterItem {
    /// Tweet text
    pub text: String,
}

/// A top-level YouTube comment with its video metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubeItem {
    /// Comment text
    pub text: String,
    /// Video the comment belongs to
    #[serde(default, alias = "videoId")]
    pub video_id: Option<String>,
    /// Title of that video
    #[serde(default, alias = "videoTitle")]
    pub video_title: Option<String>,
    /// View count of that video
    #[serde(default, alias = "viewCount", alias = "views")]
    pub view_count: Option<u64>,
}

impl YouTubeItem {
    /// Create a comment without video metadata
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            video_id: None,
            video_title: None,
            view_count: None,
        }
    }

    /// Set video id
    pub fn with_video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = Some(video_id.into());
        self
    }

    /// Set video title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.video_title = Some(title.into());
        self
    }

    /// Set view count
    pub fn with_view_count(mut self, views: u64) -> Self {
        self.view_count = Some(views);
        self
    }
}

/// Raw input unit, tagged by platform
///
/// In JSON the tag lives in a `platform` field:
/// `{"platform": "youtube", "text": "...", "viewCount": 1000}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum Item {
    Twitter(TwitterItem),
    YouTube(YouTubeItem),
}

impl Item {
    /// Create a tweet item
    pub fn tweet(text: impl Into<String>) -> Self {
        Item::Twitter(TwitterItem { text: text.into() })
    }

    /// Create a YouTube comment item without metadata
    pub fn comment(text: impl Into<String>) -> Self {
        Item::YouTube(YouTubeItem::new(text))
    }

    /// Original, source-native text
    pub fn raw_text(&self) -> &str {
        match self {
            Item::Twitter(tweet) => &tweet.text,
            Item::YouTube(comment) => &comment.text,
        }
    }

    /// Platform the item came from
    pub fn platform(&self) -> Platform {
        match self {
            Item::Twitter(_) => Platform::Twitter,
            Item::YouTube(_) => Platform::YouTube,
        }
    }

    /// Engagement contributed to platform totals
    ///
    /// One mention per tweet; the video's view count (0 when unknown) per comment.
    pub fn engagement(&self) -> u64 {
        match self {
            Item::Twitter(_) => defaults::TWITTER_ENGAGEMENT,
            Item::YouTube(comment) => comment.view_count.unwrap_or(0),
        }
    }

    /// Video title for YouTube comments
    pub fn origin_title(&self) -> Option<&str> {
        match self {
            Item::Twitter(_) => None,
            Item::YouTube(comment) => comment.video_title.as_deref(),
        }
    }
}

impl From<TwitterItem> for Item {
    fn from(tweet: TwitterItem) -> Self {
        Item::Twitter(tweet)
    }
}

impl From<YouTubeItem> for Item {
    fn from(comment: YouTubeItem) -> Self {
        Item::YouTube(comment)
    }
}
