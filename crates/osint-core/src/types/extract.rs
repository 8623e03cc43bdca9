use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Social platforms the page scanner recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// facebook.com
    Facebook,
    /// twitter.com
    Twitter,
    /// linkedin.com
    Linkedin,
    /// instagram.com
    Instagram,
}

impl Platform {
    /// All platforms in scan order
    pub const ALL: [Self; 4] = [Self::Facebook, Self::Twitter, Self::Linkedin, Self::Instagram];

    /// Lowercase platform key as used in responses
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social profile links grouped by platform; only platforms with matches appear
pub type SocialLinks = BTreeMap<Platform, Vec<String>>;

/// Contact data scraped from page text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Unique email addresses
    pub emails: BTreeSet<String>,

    /// Profile URLs per platform, in page order, duplicates kept
    pub social_links: SocialLinks,
}
