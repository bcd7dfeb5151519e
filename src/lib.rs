//! Typed bindings to the Twitter REST API v1.1.
//!
//! Requests are built from the types in [`api`] and sent through a [`TwitterService`], which
//! wraps any HTTP client implementing `tower_service::Service` (`hyper::Client` in particular):
//!
//! ```no_run
//! # async fn run() -> twitter_rest::Result<()> {
//! use twitter_rest::api::{statuses, Request};
//! use twitter_rest::{Config, TwitterService};
//!
//! let config = Config::open("twitter-rest.toml")?;
//! let service = TwitterService::from_config(&config, hyper::Client::new());
//!
//! let res = statuses::Show::new(20).send(&service).await?;
//! if let Some(tweet) = res.content() {
//!     println!("{}: {}", tweet.created_at, tweet.text);
//! }
//! println!("{} requests left", res.rate_limit_status().remaining);
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate log;

#[macro_use]
mod util;

pub mod api;
pub mod config;
pub mod date;
pub mod models;
pub mod multipart;
pub mod oauth;
pub mod resolve;
pub mod response;
pub mod segment;
pub mod service;

mod error;

pub use config::Config;
pub use date::{DateFormat, TwitterDateTime};
pub use error::{Error, Result};
pub use multipart::MediaFile;
pub use resolve::Resolver;
pub use response::{ErrorCode, RateLimitStatus, TwitterError, TwitterResponse};
pub use segment::{Segments, Value};
pub use service::{Auth, ClientInfo, TwitterService};
pub use util::{BoxError, HttpService};
