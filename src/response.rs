use std::error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use chrono::{DateTime, Utc};
use http::{HeaderMap, Method, StatusCode, Uri};
use serde::{de, Deserialize, Serialize};

use crate::util::time;

/// The outcome of one API call.
///
/// Exactly one of `content` and `error` is set after a call, unless the response body could not
/// be deserialized, in which case neither is.
#[derive(Debug)]
pub struct TwitterResponse<T> {
    method: Method,
    uri: Uri,
    status: StatusCode,
    headers: HeaderMap,
    body: String,
    rate_limit: OnceLock<RateLimitStatus>,
    content: Option<T>,
    error: Option<TwitterError>,
}

/// A snapshot of the `X-Rate-Limit-*` headers of a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitStatus {
    /// `X-Rate-Limit-Limit`, or `-1` if absent.
    pub limit: i32,
    /// `X-Rate-Limit-Remaining`, or `-1` if absent.
    pub remaining: i32,
    /// `X-Rate-Limit-Reset` in seconds since the Unix epoch, or `0` if absent.
    pub reset_time_in_seconds: i64,
    pub reset_time: Option<DateTime<Utc>>,
}

/// An error payload returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TwitterError {
    pub errors: Vec<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorCode {
    #[serde(default)]
    pub code: u32,
    pub message: String,
}

const RATE_LIMIT_LIMIT: &str = "x-rate-limit-limit";
const RATE_LIMIT_REMAINING: &str = "x-rate-limit-remaining";
const RATE_LIMIT_RESET: &str = "x-rate-limit-reset";

impl<T: de::DeserializeOwned> TwitterResponse<T> {
    pub(crate) fn new(
        method: Method,
        uri: Uri,
        status: StatusCode,
        headers: HeaderMap,
        body: String,
    ) -> Self {
        let (content, error) = if status.is_success() {
            match json::from_str::<T>(&body) {
                Ok(content) => (Some(content), None),
                Err(e) => {
                    warn!("failed to deserialize the response to {} {}: {}", method, uri, e);
                    (None, None)
                }
            }
        } else {
            match json::from_str::<TwitterError>(&body) {
                Ok(error) => (None, Some(error)),
                Err(e) => {
                    warn!(
                        "failed to deserialize the error response ({}) to {} {}: {}",
                        status, method, uri, e
                    );
                    (None, None)
                }
            }
        };

        TwitterResponse {
            method,
            uri,
            status,
            headers,
            body,
            rate_limit: OnceLock::new(),
            content,
            error,
        }
    }
}

impl<T> TwitterResponse<T> {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers. Lookups are case-insensitive.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    pub fn into_content(self) -> Option<T> {
        self.content
    }

    pub fn error(&self) -> Option<&TwitterError> {
        self.error.as_ref()
    }

    pub fn request_method(&self) -> &Method {
        &self.method
    }

    pub fn request_uri(&self) -> &Uri {
        &self.uri
    }

    /// The rate limit status, computed from the headers on first access.
    pub fn rate_limit_status(&self) -> &RateLimitStatus {
        self.rate_limit
            .get_or_init(|| RateLimitStatus::from_headers(&self.headers))
    }

    /// Returns `true` if the status is successful and the body was deserialized.
    pub fn request_succeeded(&self) -> bool {
        self.status.is_success() && self.content.is_some()
    }

    pub fn skipped_due_to_rate_limiting_rule(&self) -> bool {
        self.rate_limit_status().remaining <= 0
    }
}

impl RateLimitStatus {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let reset = header(headers, RATE_LIMIT_RESET).unwrap_or(0);
        RateLimitStatus {
            limit: header(headers, RATE_LIMIT_LIMIT).unwrap_or(-1),
            remaining: header(headers, RATE_LIMIT_REMAINING).unwrap_or(-1),
            reset_time_in_seconds: reset,
            reset_time: time::datetime_from_unix(reset),
        }
    }

    /// Returns the time left until the rate limit window resets.
    pub fn reset_in(&self) -> Duration {
        u64::try_from(self.reset_time_in_seconds)
            .map(|secs| time::until_unix(Duration::from_secs(secs)))
            .unwrap_or_default()
    }
}

fn header<N: FromStr>(headers: &HeaderMap, name: &str) -> Option<N> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

impl TwitterError {
    pub fn codes(&self) -> impl Iterator<Item = u32> + '_ {
        self.errors.iter().map(|e| e.code)
    }
}

impl<'de> Deserialize<'de> for TwitterError {
    fn deserialize<D: de::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        // Most endpoints return `{"errors":[...]}`, but some older ones return
        // `{"error":"...","request":"..."}`.
        #[derive(Deserialize)]
        struct Prototype {
            #[serde(default)]
            errors: Option<Vec<ErrorCode>>,
            #[serde(default)]
            error: Option<String>,
            #[serde(default)]
            request: Option<String>,
        }

        let p = Prototype::deserialize(d)?;
        let errors = match (p.errors, p.error) {
            (Some(errors), _) => errors,
            (None, Some(message)) => vec![ErrorCode { code: 0, message }],
            (None, None) => return Err(de::Error::missing_field("errors")),
        };

        Ok(TwitterError {
            errors,
            request: p.request,
        })
    }
}

impl Display for TwitterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut errors = self.errors.iter();
        if let Some(e) = errors.next() {
            write!(f, "{}", e)?;
            for e in errors {
                write!(f, ", {}", e)?;
            }
        }
        if let Some(ref request) = self.request {
            write!(f, " (request: {})", request)?;
        }

        Ok(())
    }
}

impl error::Error for TwitterError {}

impl ErrorCode {
    pub const COULD_NOT_AUTHENTICATE_YOU: u32 = 32;
    pub const PAGE_DOES_NOT_EXIST: u32 = 34;
    pub const RATE_LIMIT_EXCEEDED: u32 = 88;
    pub const INVALID_OR_EXPIRED_TOKEN: u32 = 89;
    pub const OVER_CAPACITY: u32 = 130;
    pub const INTERNAL_ERROR: u32 = 131;
    pub const NO_STATUS_FOUND_WITH_THAT_ID: u32 = 144;
    pub const STATUS_IS_A_DUPLICATE: u32 = 187;
    pub const YOU_HAVE_ALREADY_RETWEETED_THIS_TWEET: u32 = 327;
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use http::header::{HeaderName, HeaderValue};

    use super::*;

    fn response<T: de::DeserializeOwned>(status: u16, body: &str) -> TwitterResponse<T> {
        TwitterResponse::new(
            Method::GET,
            Uri::from_static("https://api.twitter.com/1.1/statuses/show/1.json"),
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            body.to_owned(),
        )
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Status {
        id: u64,
    }

    #[test]
    fn success() {
        let res = response::<Status>(200, r#"{"id":1}"#);
        assert_eq!(res.content(), Some(&Status { id: 1 }));
        assert!(res.error().is_none());
        assert!(res.request_succeeded());
        assert_eq!(res.body(), r#"{"id":1}"#);
    }

    #[test]
    fn error_body() {
        let res = response::<Status>(
            503,
            r#"{"errors":[{"message":"Over capacity","code":130}]}"#,
        );
        assert!(res.content().is_none());
        let error = res.error().unwrap();
        assert_eq!(error.codes().collect::<Vec<_>>(), [ErrorCode::OVER_CAPACITY]);
        assert_eq!(error.to_string(), "130 Over capacity");
        assert!(!res.request_succeeded());
    }

    #[test]
    fn legacy_error_body() {
        let res = response::<Status>(
            401,
            r#"{"request":"/1.1/account/settings.json","error":"Not authorized."}"#,
        );
        let error = res.error().unwrap();
        assert_eq!(error.errors[0].message, "Not authorized.");
        assert_eq!(error.request.as_deref(), Some("/1.1/account/settings.json"));
    }

    #[test]
    fn malformed_body() {
        let res = response::<Status>(200, "<html>oops</html>");
        assert!(res.content().is_none());
        assert!(res.error().is_none());
        assert!(!res.request_succeeded());

        let res = response::<Status>(500, "{}");
        assert!(res.content().is_none());
        assert!(res.error().is_none());

        let res = response::<Status>(200, r#"{"errors":[]}"#);
        assert!(res.content().is_none());
        assert!(res.error().is_none());
    }

    #[test]
    fn rate_limit_status() {
        let mut headers = HeaderMap::new();
        for &(name, value) in &[
            ("X-Rate-Limit-Limit", "15"),
            ("x-rate-limit-remaining", " 14 "),
            ("X-RATE-LIMIT-RESET", "1360991702"),
        ] {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_static(value),
            );
        }

        let status = RateLimitStatus::from_headers(&headers);
        assert_eq!(status.limit, 15);
        assert_eq!(status.remaining, 14);
        assert_eq!(status.reset_time_in_seconds, 1_360_991_702);
        assert_eq!(status.reset_time.unwrap().timestamp(), 1_360_991_702);
        assert_eq!(status.reset_in(), Duration::from_secs(0));
    }

    #[test]
    fn rate_limit_defaults() {
        let mut headers = HeaderMap::new();
        headers.insert("x-rate-limit-limit", HeaderValue::from_static("lots"));

        let status = RateLimitStatus::from_headers(&headers);
        assert_eq!(status.limit, -1);
        assert_eq!(status.remaining, -1);
        assert_eq!(status.reset_time_in_seconds, 0);
        assert_eq!(status.reset_time.unwrap().timestamp(), 0);
    }

    #[test]
    fn rate_limit_is_cached() {
        let mut res = response::<Status>(200, r#"{"id":1}"#);
        let first = *res.rate_limit_status();
        assert!(res.skipped_due_to_rate_limiting_rule());

        res.headers
            .insert("x-rate-limit-remaining", HeaderValue::from_static("10"));
        assert_eq!(*res.rate_limit_status(), first);
    }
}
