//! Email and social-profile extraction from page text.

use osint_core::{ExtractionResult, Platform, SocialLinks};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

const EMAIL_PATTERN: &str = r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b";

const FACEBOOK_PATTERN: &str = r"(?:https?://)?(?:www\.)?facebook\.com/[A-Za-z0-9.]+";
const TWITTER_PATTERN: &str = r"(?:https?://)?(?:www\.)?twitter\.com/[A-Za-z0-9_]+";
const LINKEDIN_PATTERN: &str = r"(?:https?://)?(?:www\.)?linkedin\.com/[A-Za-z0-9/\-]+";
const INSTAGRAM_PATTERN: &str = r"(?:https?://)?(?:www\.)?instagram\.com/[A-Za-z0-9_.]+";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| compile(EMAIL_PATTERN));
static FACEBOOK_RE: LazyLock<Regex> = LazyLock::new(|| compile(FACEBOOK_PATTERN));
static TWITTER_RE: LazyLock<Regex> = LazyLock::new(|| compile(TWITTER_PATTERN));
static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| compile(LINKEDIN_PATTERN));
static INSTAGRAM_RE: LazyLock<Regex> = LazyLock::new(|| compile(INSTAGRAM_PATTERN));

fn platform_regex(platform: Platform) -> &'static Regex {
    match platform {
        Platform::Facebook => &FACEBOOK_RE,
        Platform::Twitter => &TWITTER_RE,
        Platform::Linkedin => &LINKEDIN_RE,
        Platform::Instagram => &INSTAGRAM_RE,
    }
}

/// Collect the unique email addresses in `text`.
pub fn extract_emails(text: &str) -> BTreeSet<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Collect profile URLs per platform.
///
/// Matches keep page order and are not deduplicated. A platform appears in
/// the map only when it matched at least once.
pub fn extract_social_links(text: &str) -> SocialLinks {
    let mut links = SocialLinks::new();

    for platform in Platform::ALL {
        let matches: Vec<String> = platform_regex(platform)
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();

        if !matches.is_empty() {
            links.insert(platform, matches);
        }
    }

    links
}

/// Run both extractors over `text`.
pub fn extract_all(text: &str) -> ExtractionResult {
    ExtractionResult {
        emails: extract_emails(text),
        social_links: extract_social_links(text),
    }
}
