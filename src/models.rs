//! Response models of the REST API.
//!
//! Only the commonly used fields are modelled. The raw body is always available through
//! `TwitterResponse::body` for anything else.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Serialize};

use crate::date::TwitterDateTime;
use crate::util::time;

#[derive(Clone, Debug, Serialize)]
pub struct Tweet {
    pub id: u64,
    pub text: Box<str>,
    pub created_at: TwitterDateTime,
    pub user: Option<User>,
    pub in_reply_to_status_id: Option<u64>,
    pub in_reply_to_user_id: Option<u64>,
    pub in_reply_to_screen_name: Option<Box<str>>,
    pub retweet_count: u64,
    pub favorite_count: u64,
    pub favorited: bool,
    pub retweeted: bool,
    pub lang: Option<Box<str>>,
    pub source: Option<Box<str>>,
    pub entities: Option<Entities>,
    pub retweeted_status: Option<Box<Tweet>>,
    pub quoted_status: Option<Box<Tweet>>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    pub name: Box<str>,
    pub screen_name: Box<str>,
    #[serde(default)]
    pub location: Option<Box<str>>,
    #[serde(default)]
    pub description: Option<Box<str>>,
    #[serde(default)]
    pub url: Option<Box<str>>,
    #[serde(default)]
    pub protected: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub friends_count: u64,
    #[serde(default)]
    pub statuses_count: u64,
    #[serde(default)]
    pub created_at: Option<TwitterDateTime>,
    #[serde(default)]
    pub profile_image_url_https: Option<Box<str>>,
    #[serde(default)]
    pub status: Option<Box<Tweet>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Entities {
    #[serde(default)]
    pub hashtags: Vec<Hashtag>,
    #[serde(default)]
    pub urls: Vec<UrlEntity>,
    #[serde(default)]
    pub user_mentions: Vec<Mention>,
    #[serde(default)]
    pub media: Vec<Media>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Hashtag {
    pub text: Box<str>,
    pub indices: [usize; 2],
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UrlEntity {
    pub url: Box<str>,
    #[serde(default)]
    pub expanded_url: Option<Box<str>>,
    #[serde(default)]
    pub display_url: Option<Box<str>>,
    pub indices: [usize; 2],
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Mention {
    pub id: u64,
    pub screen_name: Box<str>,
    #[serde(default)]
    pub name: Option<Box<str>>,
    pub indices: [usize; 2],
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Media {
    pub id: u64,
    pub media_url: Box<str>,
    pub media_url_https: Box<str>,
    pub url: Box<str>,
    pub display_url: Box<str>,
    pub expanded_url: Box<str>,
    #[serde(rename = "type")]
    pub media_type: Box<str>,
    pub indices: [usize; 2],
    #[serde(default)]
    pub sizes: HashMap<String, MediaSize>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MediaSize {
    pub w: u32,
    pub h: u32,
    pub resize: Box<str>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DirectMessage {
    pub id: u64,
    pub text: Box<str>,
    pub created_at: TwitterDateTime,
    pub sender_id: u64,
    pub recipient_id: u64,
    #[serde(default)]
    pub sender: Option<User>,
    #[serde(default)]
    pub recipient: Option<User>,
    #[serde(default)]
    pub entities: Option<Entities>,
}

/// A page of a cursored collection.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CursorList<T> {
    #[serde(alias = "ids", alias = "users", alias = "lists")]
    pub items: Vec<T>,
    pub next_cursor: i64,
    pub previous_cursor: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchResult {
    pub statuses: Vec<Tweet>,
    pub search_metadata: SearchMetadata,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchMetadata {
    pub max_id: u64,
    pub since_id: u64,
    pub count: u32,
    pub query: Box<str>,
    #[serde(default)]
    pub next_results: Option<Box<str>>,
    #[serde(default)]
    pub refresh_url: Option<Box<str>>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SavedSearch {
    pub id: u64,
    pub name: Box<str>,
    pub query: Box<str>,
    pub created_at: TwitterDateTime,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct List {
    pub id: u64,
    pub name: Box<str>,
    pub slug: Box<str>,
    pub full_name: Box<str>,
    #[serde(default)]
    pub description: Box<str>,
    pub mode: Box<str>,
    #[serde(default)]
    pub member_count: u64,
    #[serde(default)]
    pub subscriber_count: u64,
    #[serde(default)]
    pub created_at: Option<TwitterDateTime>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Friendship {
    pub relationship: Relationship,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Relationship {
    pub source: RelationshipSource,
    pub target: RelationshipTarget,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RelationshipSource {
    pub id: u64,
    pub screen_name: Box<str>,
    pub following: bool,
    pub followed_by: bool,
    #[serde(default)]
    pub blocking: Option<bool>,
    #[serde(default)]
    pub muting: Option<bool>,
    #[serde(default)]
    pub notifications_enabled: Option<bool>,
    #[serde(default)]
    pub want_retweets: Option<bool>,
    #[serde(default)]
    pub can_dm: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RelationshipTarget {
    pub id: u64,
    pub screen_name: Box<str>,
    pub following: bool,
    pub followed_by: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FriendshipLookup {
    pub id: u64,
    pub name: Box<str>,
    pub screen_name: Box<str>,
    pub connections: Vec<Box<str>>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Account {
    pub screen_name: Box<str>,
    #[serde(default)]
    pub language: Option<Box<str>>,
    #[serde(default)]
    pub protected: bool,
    #[serde(default)]
    pub geo_enabled: bool,
    #[serde(default)]
    pub discoverable_by_email: bool,
    #[serde(default)]
    pub time_zone: Option<TimeZone>,
    #[serde(default)]
    pub sleep_time: Option<SleepTime>,
    #[serde(default)]
    pub trend_location: Vec<WhereOnEarthLocation>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TimeZone {
    pub name: Box<str>,
    pub tzinfo_name: Box<str>,
    pub utc_offset: i32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SleepTime {
    pub enabled: bool,
    pub start_time: Option<u8>,
    pub end_time: Option<u8>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserSuggestions {
    pub name: Box<str>,
    pub slug: Box<str>,
    pub size: u32,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Place {
    pub id: Box<str>,
    pub name: Box<str>,
    pub full_name: Box<str>,
    pub country: Box<str>,
    pub country_code: Box<str>,
    pub place_type: Box<str>,
    #[serde(default)]
    pub url: Option<Box<str>>,
    #[serde(default)]
    pub contained_within: Vec<Place>,
}

/// The body of `geo/search` and `geo/reverse_geocode`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlaceSearch {
    pub result: PlaceSearchResult,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlaceSearchResult {
    pub places: Vec<Place>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Trends {
    pub trends: Vec<Trend>,
    #[serde(default)]
    pub as_of: Option<Box<str>>,
    #[serde(default)]
    pub created_at: Option<Box<str>>,
    #[serde(default)]
    pub locations: Vec<TrendLocation>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Trend {
    pub name: Box<str>,
    pub url: Box<str>,
    pub query: Box<str>,
    #[serde(default)]
    pub promoted_content: Option<Box<str>>,
    #[serde(default)]
    pub tweet_volume: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TrendLocation {
    pub name: Box<str>,
    pub woeid: u64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhereOnEarthLocation {
    pub woeid: u64,
    pub name: Box<str>,
    #[serde(default)]
    pub country: Option<Box<str>>,
    #[serde(default)]
    pub country_code: Option<Box<str>>,
    #[serde(default)]
    pub parentid: Option<u64>,
    #[serde(default)]
    pub place_type: Option<WhereOnEarthPlaceType>,
    #[serde(default)]
    pub url: Option<Box<str>>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WhereOnEarthPlaceType {
    pub code: u32,
    pub name: Box<str>,
}

/// The body of `application/rate_limit_status`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RateLimitStatusSummary {
    #[serde(default)]
    pub rate_limit_context: HashMap<String, Box<str>>,
    pub resources: HashMap<String, HashMap<String, ResourceRateLimit>>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ResourceRateLimit {
    pub limit: i32,
    pub remaining: i32,
    pub reset: i64,
}

impl ResourceRateLimit {
    pub fn reset_time(&self) -> Option<DateTime<Utc>> {
        time::datetime_from_unix(self.reset)
    }
}

impl<'de> Deserialize<'de> for Tweet {
    fn deserialize<D: de::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Prototype {
            id: u64,
            #[serde(default)]
            text: Option<Box<str>>,
            #[serde(default)]
            full_text: Option<Box<str>>,
            created_at: TwitterDateTime,
            #[serde(default)]
            user: Option<User>,
            #[serde(default)]
            in_reply_to_status_id: Option<u64>,
            #[serde(default)]
            in_reply_to_user_id: Option<u64>,
            #[serde(default)]
            in_reply_to_screen_name: Option<Box<str>>,
            #[serde(default)]
            retweet_count: u64,
            #[serde(default)]
            favorite_count: u64,
            #[serde(default)]
            favorited: Option<bool>,
            #[serde(default)]
            retweeted: bool,
            #[serde(default)]
            lang: Option<Box<str>>,
            #[serde(default)]
            source: Option<Box<str>>,
            #[serde(default)]
            entities: Option<Entities>,
            #[serde(default)]
            extended_tweet: Option<ExtendedTweet>,
            #[serde(default)]
            retweeted_status: Option<Box<Tweet>>,
            #[serde(default)]
            quoted_status: Option<Box<Tweet>>,
        }

        #[derive(Deserialize)]
        struct ExtendedTweet {
            full_text: Box<str>,
        }

        let p = Prototype::deserialize(d)?;
        // Extended (280-character) Tweets carry the untruncated text in a different field.
        let text = p
            .extended_tweet
            .map(|e| e.full_text)
            .or(p.full_text)
            .or(p.text)
            .ok_or_else(|| de::Error::missing_field("text"))?;

        Ok(Tweet {
            id: p.id,
            text,
            created_at: p.created_at,
            user: p.user,
            in_reply_to_status_id: p.in_reply_to_status_id,
            in_reply_to_user_id: p.in_reply_to_user_id,
            in_reply_to_screen_name: p.in_reply_to_screen_name,
            retweet_count: p.retweet_count,
            favorite_count: p.favorite_count,
            favorited: p.favorited.unwrap_or(false),
            retweeted: p.retweeted,
            lang: p.lang,
            source: p.source,
            entities: p.entities,
            retweeted_status: p.retweeted_status,
            quoted_status: p.quoted_status,
        })
    }
}
