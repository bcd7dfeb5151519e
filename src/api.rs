//! Request types of the REST API endpoints.
//!
//! Each request type is built with `new`, which takes the required parameters, and optional
//! parameters are set through the setter method of the same name:
//!
//! ```no_run
//! # async fn run(service: twitter_rest::TwitterService<hyper::Client<hyper::client::HttpConnector>>) {
//! use twitter_rest::api::{statuses, Request};
//!
//! let res = statuses::HomeTimeline::new().count(20).send(&service).await.unwrap();
//! for tweet in res.content().into_iter().flatten() {
//!     println!("{}", tweet.text);
//! }
//! # }
//! ```

macro_rules! api_requests {
    (
        $method:ident $path:expr => $Data:ty;
        $(#[$attr:meta])*
        pub struct $Name:ident {
            $($(#[$req_attr:meta])* $required:ident: $req_ty:ty),*;
            $($(#[$opt_attr:meta])* $optional:ident: $opt_ty:ty),* $(,)?
        }
        $($rest:tt)*
    ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $Name {
            $($(#[$req_attr])* $required: $req_ty,)*
            $($(#[$opt_attr])* $optional: Option<$opt_ty>,)*
        }

        impl $Name {
            #[allow(clippy::new_without_default)]
            pub fn new($($required: $req_ty),*) -> Self {
                $Name {
                    $($required,)*
                    $($optional: None,)*
                }
            }

            $(
                #[allow(clippy::wrong_self_convention)]
                pub fn $optional(&mut self, $optional: $opt_ty) -> &mut Self {
                    self.$optional = Some($optional);
                    self
                }
            )*
        }

        impl $crate::api::Request for $Name {
            type Data = $Data;

            const METHOD: http::Method = http::Method::$method;
            const PATH: &'static str = $path;

            fn segments(&self) -> $crate::segment::Segments {
                #[allow(unused_mut)]
                let mut ret = $crate::segment::Segments::default();
                $(ret.push(concat!("&", stringify!($required), "="), self.$required.clone());)*
                $(ret.push(concat!("&", stringify!($optional), "="), self.$optional.clone());)*
                ret
            }
        }

        api_requests! { $($rest)* }
    };
    () => ();
}

pub mod account;
pub mod application;
pub mod blocks;
pub mod direct_messages;
pub mod favorites;
pub mod friendships;
pub mod geo;
pub mod lists;
pub mod saved_searches;
pub mod search;
pub mod spam;
pub mod statuses;
pub mod trends;
pub mod users;

use std::fmt::{self, Display, Formatter};
use std::future::Future;

use http::Method;
use http_body::Body;
use serde::de;

use crate::error::Result;
use crate::multipart::MediaFile;
use crate::response::TwitterResponse;
use crate::segment::{Segments, Value};
use crate::service::TwitterService;
use crate::util::{BoxError, HttpService};

/// A request to a REST API endpoint.
pub trait Request {
    /// The type the response body is deserialized into.
    type Data: de::DeserializeOwned;

    const METHOD: Method;
    /// The endpoint path relative to the API root, without the format suffix. May contain
    /// `{name}` placeholders.
    const PATH: &'static str;

    fn segments(&self) -> Segments;

    /// Files to upload as `multipart/form-data`.
    fn files(&self) -> Option<&[MediaFile]> {
        None
    }

    fn send<'a, S, B>(
        &'a self,
        service: &'a TwitterService<S>,
    ) -> impl Future<Output = Result<TwitterResponse<Self::Data>>>
    where
        Self: Sized,
        S: HttpService<B> + Clone,
        B: Default + From<Vec<u8>>,
        <S::ResponseBody as Body>::Error: Into<BoxError>,
    {
        service.send(self)
    }
}

macro_rules! string_enums {
    ($(
        $(#[$attr:meta])*
        pub enum $Name:ident {
            $($Variant:ident = $value:expr),* $(,)?
        }
    )*) => {$(
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $Name {
            $($Variant,)*
        }

        impl $Name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($Name::$Variant => $value,)*
                }
            }
        }

        impl Display for $Name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$Name> for Value {
            fn from(v: $Name) -> Self {
                Value::Str(v.as_str().to_owned())
            }
        }
    )*};
}

string_enums! {
    /// `result_type` of `search/tweets`.
    pub enum SearchResultType {
        Mixed = "mixed",
        Recent = "recent",
        Popular = "popular",
    }

    pub enum ListMode {
        Public = "public",
        Private = "private",
    }

    /// `granularity` of the `geo` endpoints.
    pub enum Granularity {
        Poi = "poi",
        Neighborhood = "neighborhood",
        City = "city",
        Admin = "admin",
        Country = "country",
    }

    /// `device` of `account/update_delivery_device` and `friendships/update`.
    pub enum Device {
        Sms = "sms",
        Off = "none",
    }

    /// `align` of `statuses/oembed`.
    pub enum Align {
        Left = "left",
        Right = "right",
        Center = "center",
        Unset = "none",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums() {
        assert_eq!(SearchResultType::Recent.to_string(), "recent");
        assert_eq!(Value::from(ListMode::Private), Value::Str("private".to_owned()));
        assert_eq!(Granularity::Neighborhood.as_str(), "neighborhood");
    }

    #[test]
    fn generated_segments() {
        let mut req = statuses::UserTimeline::new();
        req.screen_name("jack".to_owned()).count(5).exclude_replies(true);

        let url = crate::resolve::Resolver::default()
            .resolve(<statuses::UserTimeline as Request>::PATH, req.segments());
        assert_eq!(
            url,
            "statuses/user_timeline.json?screen_name=jack&count=5&exclude_replies=1\
             &include_entities=1&include_rts=1",
        );
    }

    #[test]
    fn required_parameters_fill_templates() {
        let req = statuses::Show::new(210_462_857_140_252_672);
        let url = crate::resolve::Resolver::default()
            .resolve(statuses::Show::PATH, req.segments());
        assert_eq!(
            url,
            "statuses/show/210462857140252672.json?include_entities=1&include_rts=1",
        );
    }
}
