use http::Method;

use super::{Align, Request};
use crate::models::{CursorList, Tweet};
use crate::multipart::MediaFile;
use crate::segment::Segments;

api_requests! {
    GET "statuses/mentions_timeline" => Vec<Tweet>;
    pub struct MentionsTimeline {
        ;
        count: u32,
        since_id: u64,
        max_id: u64,
        trim_user: bool,
        contributor_details: bool,
        include_entities: bool,
    }

    GET "statuses/user_timeline" => Vec<Tweet>;
    pub struct UserTimeline {
        ;
        user_id: u64,
        screen_name: String,
        since_id: u64,
        count: u32,
        max_id: u64,
        trim_user: bool,
        exclude_replies: bool,
        contributor_details: bool,
        include_rts: bool,
    }

    GET "statuses/home_timeline" => Vec<Tweet>;
    pub struct HomeTimeline {
        ;
        count: u32,
        since_id: u64,
        max_id: u64,
        trim_user: bool,
        exclude_replies: bool,
        contributor_details: bool,
        include_entities: bool,
    }

    GET "statuses/retweets_of_me" => Vec<Tweet>;
    pub struct RetweetsOfMe {
        ;
        count: u32,
        since_id: u64,
        max_id: u64,
        trim_user: bool,
        include_entities: bool,
        include_user_entities: bool,
    }

    GET "statuses/retweets/{id}" => Vec<Tweet>;
    pub struct Retweets {
        id: u64;
        count: u32,
        trim_user: bool,
    }

    GET "statuses/show/{id}" => Tweet;
    pub struct Show {
        id: u64;
        trim_user: bool,
        include_my_retweet: bool,
        include_entities: bool,
    }

    POST "statuses/destroy/{id}" => Tweet;
    pub struct Destroy {
        id: u64;
        trim_user: bool,
    }

    POST "statuses/update" => Tweet;
    pub struct Update {
        status: String;
        in_reply_to_status_id: u64,
        possibly_sensitive: bool,
        lat: f64,
        long: f64,
        place_id: String,
        display_coordinates: bool,
        trim_user: bool,
    }

    POST "statuses/retweet/{id}" => Tweet;
    pub struct Retweet {
        id: u64;
        trim_user: bool,
    }

    GET "statuses/oembed" => json::Value;
    /// Either `id` or `url` must be set.
    pub struct OEmbed {
        ;
        id: u64,
        url: String,
        maxwidth: u32,
        hide_media: bool,
        hide_thread: bool,
        omit_script: bool,
        align: Align,
        related: Vec<String>,
        lang: String,
    }

    GET "statuses/retweeters/ids" => CursorList<u64>;
    pub struct RetweetersIds {
        id: u64;
        cursor: i64,
        stringify_ids: bool,
    }

    GET "statuses/lookup" => Vec<Tweet>;
    pub struct Lookup {
        id: Vec<u64>;
        include_entities: bool,
        trim_user: bool,
    }
}

/// `POST statuses/update_with_media`
///
/// The files are sent as `multipart/form-data` and the other parameters in the query string.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateWithMedia {
    status: String,
    media: Vec<MediaFile>,
    in_reply_to_status_id: Option<u64>,
    possibly_sensitive: Option<bool>,
    lat: Option<f64>,
    long: Option<f64>,
    place_id: Option<String>,
    display_coordinates: Option<bool>,
}

impl UpdateWithMedia {
    pub fn new(status: String, media: Vec<MediaFile>) -> Self {
        UpdateWithMedia {
            status,
            media,
            in_reply_to_status_id: None,
            possibly_sensitive: None,
            lat: None,
            long: None,
            place_id: None,
            display_coordinates: None,
        }
    }

    pub fn in_reply_to_status_id(&mut self, in_reply_to_status_id: u64) -> &mut Self {
        self.in_reply_to_status_id = Some(in_reply_to_status_id);
        self
    }

    pub fn possibly_sensitive(&mut self, possibly_sensitive: bool) -> &mut Self {
        self.possibly_sensitive = Some(possibly_sensitive);
        self
    }

    pub fn lat(&mut self, lat: f64) -> &mut Self {
        self.lat = Some(lat);
        self
    }

    pub fn long(&mut self, long: f64) -> &mut Self {
        self.long = Some(long);
        self
    }

    pub fn place_id(&mut self, place_id: String) -> &mut Self {
        self.place_id = Some(place_id);
        self
    }

    pub fn display_coordinates(&mut self, display_coordinates: bool) -> &mut Self {
        self.display_coordinates = Some(display_coordinates);
        self
    }
}

impl Request for UpdateWithMedia {
    type Data = Tweet;

    const METHOD: Method = Method::POST;
    const PATH: &'static str = "statuses/update_with_media";

    fn segments(&self) -> Segments {
        Segments::default()
            .with("?status=", &*self.status)
            .with("&in_reply_to_status_id=", self.in_reply_to_status_id)
            .with("&possibly_sensitive=", self.possibly_sensitive)
            .with("&lat=", self.lat)
            .with("&long=", self.long)
            .with("&place_id=", self.place_id.clone())
            .with("&display_coordinates=", self.display_coordinates)
    }

    fn files(&self) -> Option<&[MediaFile]> {
        Some(&self.media)
    }
}
