//! Social profile page field extraction.
//!
//! Reads the display fields of a Twitter profile page from their fixed positions
//! in the legacy profile layout. Every field is optional: a field whose element
//! or attribute is absent (private, suspended or deactivated accounts, other
//! networks' pages) is left empty and listed in `missing_fields`, so a partial
//! page still yields a partial profile.

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use std::sync::LazyLock;
use strum_macros::{AsRefStr, EnumIter};

use crate::error_handling::{ExtractionStats, WarningType};
use crate::utils::parse_selector_unsafe;

const PHOTO_SELECTOR_STR: &str = ".ProfileAvatar-image";
const BIO_SELECTOR_STR: &str = ".ProfileHeaderCard-bio";
const NAME_SELECTOR_STR: &str = ".ProfileHeaderCard-nameLink";
const USERNAME_SELECTOR_STR: &str = ".ProfileHeaderCard-screennameLink";
const LOCATION_SELECTOR_STR: &str = ".ProfileHeaderCard-locationText";
const WEBSITE_SELECTOR_STR: &str = ".ProfileHeaderCard-url";
const JOIN_DATE_SELECTOR_STR: &str = ".ProfileHeaderCard-joinDateText";
const TWEET_COUNT_SELECTOR_STR: &str = ".ProfileNav-item--tweets .ProfileNav-value";
const FOLLOWING_COUNT_SELECTOR_STR: &str = ".ProfileNav-item--following .ProfileNav-value";
const FOLLOWER_COUNT_SELECTOR_STR: &str = ".ProfileNav-item--followers .ProfileNav-value";
const LIKES_COUNT_SELECTOR_STR: &str = ".ProfileNav-item--favorites .ProfileNav-value";

const COUNT_ATTRIBUTE: &str = "data-count";

static PHOTO_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(PHOTO_SELECTOR_STR, "PHOTO_SELECTOR"));
static BIO_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(BIO_SELECTOR_STR, "BIO_SELECTOR"));
static NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(NAME_SELECTOR_STR, "NAME_SELECTOR"));
static USERNAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(USERNAME_SELECTOR_STR, "USERNAME_SELECTOR"));
static LOCATION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(LOCATION_SELECTOR_STR, "LOCATION_SELECTOR"));
static WEBSITE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(WEBSITE_SELECTOR_STR, "WEBSITE_SELECTOR"));
static JOIN_DATE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(JOIN_DATE_SELECTOR_STR, "JOIN_DATE_SELECTOR"));
static TWEET_COUNT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TWEET_COUNT_SELECTOR_STR, "TWEET_COUNT_SELECTOR"));
static FOLLOWING_COUNT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(FOLLOWING_COUNT_SELECTOR_STR, "FOLLOWING_COUNT_SELECTOR")
});
static FOLLOWER_COUNT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(FOLLOWER_COUNT_SELECTOR_STR, "FOLLOWER_COUNT_SELECTOR")
});
static LIKES_COUNT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(LIKES_COUNT_SELECTOR_STR, "LIKES_COUNT_SELECTOR"));

/// Profile fields, named as they appear in the result JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, EnumIter)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ProfileField {
    Photo,
    Bio,
    Name,
    Username,
    Location,
    Website,
    JoinedDate,
    TweetCount,
    FollowingCount,
    FollowerCount,
    LikesCount,
}

/// Fields of a social profile page.
///
/// Text fields are trimmed and empty when unavailable; counters are `None` when
/// the count attribute is absent or not a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    pub photo: String,
    pub bio: String,
    pub name: String,
    pub username: String,
    pub location: String,
    pub website: String,
    pub joined_date: String,
    pub tweet_count: Option<u64>,
    pub following_count: Option<u64>,
    pub follower_count: Option<u64>,
    pub likes_count: Option<u64>,
    /// Fields that could not be read from the page, in field order
    pub missing_fields: Vec<ProfileField>,
}

/// Accumulates field lookups, remembering which ones came up empty-handed.
struct FieldReader<'a> {
    document: &'a Html,
    missing: Vec<ProfileField>,
}

impl<'a> FieldReader<'a> {
    fn first(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.document.select(selector).next()
    }

    fn text(&mut self, field: ProfileField, selector: &Selector) -> String {
        match self.first(selector) {
            Some(element) => element.text().collect::<String>().trim().to_string(),
            None => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    fn attr(&mut self, field: ProfileField, selector: &Selector, attr: &str) -> String {
        match self.first(selector).and_then(|e| e.value().attr(attr)) {
            Some(value) => value.trim().to_string(),
            None => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    fn count(&mut self, field: ProfileField, selector: &Selector) -> Option<u64> {
        let count = self
            .first(selector)
            .and_then(|e| e.value().attr(COUNT_ATTRIBUTE))
            .and_then(|raw| raw.trim().parse::<u64>().ok());
        if count.is_none() {
            self.missing.push(field);
        }
        count
    }
}

/// Extracts the profile fields of a social profile page.
///
/// Never fails: each field that cannot be found is recorded in
/// `missing_fields` and counted as a `MissingProfileField` warning.
pub fn extract_social_profile(document: &Html, stats: &ExtractionStats) -> SocialProfile {
    let mut reader = FieldReader {
        document,
        missing: Vec::new(),
    };

    let mut profile = SocialProfile {
        photo: reader.attr(ProfileField::Photo, &PHOTO_SELECTOR, "src"),
        bio: reader.text(ProfileField::Bio, &BIO_SELECTOR),
        name: reader.text(ProfileField::Name, &NAME_SELECTOR),
        username: reader.text(ProfileField::Username, &USERNAME_SELECTOR),
        location: reader.text(ProfileField::Location, &LOCATION_SELECTOR),
        website: reader.text(ProfileField::Website, &WEBSITE_SELECTOR),
        joined_date: reader.text(ProfileField::JoinedDate, &JOIN_DATE_SELECTOR),
        tweet_count: reader.count(ProfileField::TweetCount, &TWEET_COUNT_SELECTOR),
        following_count: reader.count(ProfileField::FollowingCount, &FOLLOWING_COUNT_SELECTOR),
        follower_count: reader.count(ProfileField::FollowerCount, &FOLLOWER_COUNT_SELECTOR),
        likes_count: reader.count(ProfileField::LikesCount, &LIKES_COUNT_SELECTOR),
        missing_fields: Vec::new(),
    };

    for _ in &reader.missing {
        stats.increment_warning(WarningType::MissingProfileField);
    }
    if !reader.missing.is_empty() {
        log::debug!(
            "Profile page is missing {} field(s): {:?}",
            reader.missing.len(),
            reader.missing
        );
    }
    profile.missing_fields = reader.missing;
    profile
}
