use std::future::Future;

use futures::future;
use http::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{Method, Request, Uri};
use http_body::Body;
use oauth_credentials::{Credentials, Token};
use serde::{de, Deserialize};

use crate::api;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::multipart::{self, MediaFile};
use crate::oauth;
use crate::resolve::Resolver;
use crate::response::TwitterResponse;
use crate::segment::Segments;
use crate::util::{self, BoxError, HttpService, USER_AGENT_DEFAULT};

pub const BASE_URL: &str = "https://api.twitter.com/1.1/";

const X_TWITTER_NAME: &str = "x-twitter-name";
const X_TWITTER_VERSION: &str = "x-twitter-version";
const X_TWITTER_URL: &str = "x-twitter-url";

/// A Twitter REST API client on top of an HTTP service `S`.
///
/// Cloning a `TwitterService` clones the underlying HTTP service, which is cheap for
/// `hyper::Client`.
#[derive(Clone, Debug)]
pub struct TwitterService<S> {
    http: S,
    base_url: String,
    auth: Auth,
    info: Option<ClientInfo>,
    resolver: Resolver,
}

#[derive(Clone, Debug)]
pub enum Auth {
    Anonymous,
    /// Requests are signed with OAuth 1.0a (HMAC-SHA1).
    Authenticated(Token<Box<str>>),
}

/// Identifies the application to the API through the `X-Twitter-Name`, `X-Twitter-Version`
/// and `X-Twitter-URL` headers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ClientInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl<S> TwitterService<S> {
    pub fn new(http: S) -> Self {
        TwitterService {
            http,
            base_url: BASE_URL.to_owned(),
            auth: Auth::Anonymous,
            info: None,
            resolver: Resolver::default(),
        }
    }

    pub fn from_config(config: &Config, http: S) -> Self {
        let mut ret = TwitterService::new(http);
        ret.base_url(&config.base_url);
        ret.resolver = Resolver {
            include_entities: config.include_entities,
            include_retweets: config.include_retweets,
        };
        if let Some(ref token) = config.token {
            ret.authenticate_with(config.client.clone(), token.clone());
        }
        ret.info = config.info.clone();
        ret
    }

    /// Switches to signing every request with the given credentials.
    pub fn authenticate_with(
        &mut self,
        client: Credentials<Box<str>>,
        token: Credentials<Box<str>>,
    ) -> &mut Self {
        self.auth = Auth::Authenticated(Token::new(client, token));
        self
    }

    pub fn anonymous(&mut self) -> &mut Self {
        self.auth = Auth::Anonymous;
        self
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth, Auth::Authenticated(_))
    }

    pub fn base_url(&mut self, base_url: &str) -> &mut Self {
        self.base_url = base_url.to_owned();
        if !self.base_url.ends_with('/') {
            self.base_url.push('/');
        }
        self
    }

    pub fn client_info(&mut self, info: ClientInfo) -> &mut Self {
        self.info = Some(info);
        self
    }

    pub fn include_entities(&mut self, include_entities: bool) -> &mut Self {
        self.resolver.include_entities = include_entities;
        self
    }

    pub fn include_retweets(&mut self, include_retweets: bool) -> &mut Self {
        self.resolver.include_retweets = include_retweets;
        self
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn get_ref(&self) -> &S {
        &self.http
    }

    /// Joins a URL relative to the API root against the base URL. Absolute URLs are returned
    /// unchanged.
    pub fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("https://") || url.starts_with("http://") {
            return url.to_owned();
        }
        let mut ret = String::with_capacity(self.base_url.len() + url.len());
        ret.push_str(&self.base_url);
        ret.push_str(url.trim_start_matches('/'));
        ret
    }

    fn build_request<B>(
        &self,
        method: &Method,
        uri: &str,
        files: Option<&[MediaFile]>,
    ) -> Result<Request<B>>
    where
        B: Default + From<Vec<u8>>,
    {
        let mut req = Request::builder()
            .method(method.clone())
            .uri(uri.parse::<Uri>().map_err(http::Error::from)?);

        let info = self.info.as_ref();
        let name = info.and_then(|i| i.name.as_deref());
        if !util::is_blank(name) {
            let name = name.unwrap_or_default();
            req = req.header(X_TWITTER_NAME, name).header(USER_AGENT, name);
        } else {
            req = req.header(USER_AGENT, USER_AGENT_DEFAULT);
        }
        if let Some(version) = info.and_then(|i| i.version.as_deref()) {
            if !util::is_blank(Some(version)) {
                req = req.header(X_TWITTER_VERSION, version);
            }
        }
        if let Some(url) = info.and_then(|i| i.url.as_deref()) {
            if !util::is_blank(Some(url)) {
                req = req.header(X_TWITTER_URL, url);
            }
        }

        if let Auth::Authenticated(ref token) = self.auth {
            let authorization = oauth::authorize(method, uri, token);
            req = req.header(AUTHORIZATION, authorization);
        }

        match files {
            Some(files) if !files.is_empty() => {
                let (content_type, body) = multipart::encode(files);
                trace!("attaching {} file(s) ({} bytes)", files.len(), body.len());
                let content_type =
                    HeaderValue::from_str(&content_type).map_err(http::Error::from)?;
                req.header(CONTENT_TYPE, content_type)
                    .body(body.into())
                    .map_err(Error::from)
            }
            _ => req.body(B::default()).map_err(Error::from),
        }
    }
}

impl<S: Clone> TwitterService<S> {
    /// Sends a request to `url`, which is either absolute or relative to the base URL, and reads
    /// the whole response.
    ///
    /// Error responses from the API do not make this fail. Check
    /// [`TwitterResponse::error`] for them.
    pub async fn execute<T, B>(
        &self,
        method: Method,
        url: &str,
        files: Option<&[MediaFile]>,
    ) -> Result<TwitterResponse<T>>
    where
        T: de::DeserializeOwned,
        S: HttpService<B>,
        B: Default + From<Vec<u8>>,
        <S::ResponseBody as Body>::Error: Into<BoxError>,
    {
        let uri = self.absolute_url(url);
        let req = self.build_request::<B>(&method, &uri, files)?;
        let uri = req.uri().clone();
        debug!("{} {}", method, uri);

        let mut http = self.http.clone();
        future::poll_fn(|cx| <S as HttpService<B>>::poll_ready(&mut http, cx))
            .await
            .map_err(Error::transport)?;
        let res = <S as HttpService<B>>::call(&mut http, req)
            .await
            .map_err(Error::transport)?;

        let (parts, body) = res.into_parts();
        let body = hyper::body::to_bytes(body)
            .await
            .map_err(Error::transport)?;
        let body = String::from_utf8_lossy(&body).into_owned();

        let ret = TwitterResponse::new(method, uri, parts.status, parts.headers, body);
        trace!(
            "status={}, rate_limit={:?}",
            ret.status(),
            ret.rate_limit_status()
        );

        Ok(ret)
    }

    /// Like [`execute`](Self::execute), but gives up with [`Error::Cancelled`] as soon as
    /// `signal` completes.
    pub async fn execute_until<T, B, F>(
        &self,
        method: Method,
        url: &str,
        files: Option<&[MediaFile]>,
        signal: F,
    ) -> Result<TwitterResponse<T>>
    where
        T: de::DeserializeOwned,
        S: HttpService<B>,
        B: Default + From<Vec<u8>>,
        <S::ResponseBody as Body>::Error: Into<BoxError>,
        F: Future<Output = ()>,
    {
        tokio::select! {
            res = self.execute(method, url, files) => res,
            () = signal => {
                debug!("request to {} cancelled", url);
                Err(Error::Cancelled)
            }
        }
    }

    /// Resolves `path` and `segments` into a URL and executes a request to it.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        segments: Segments,
        files: Option<&[MediaFile]>,
    ) -> Result<TwitterResponse<T>>
    where
        T: de::DeserializeOwned,
        S: HttpService<B>,
        B: Default + From<Vec<u8>>,
        <S::ResponseBody as Body>::Error: Into<BoxError>,
    {
        let url = self.resolver.resolve(path, segments);
        self.execute(method, &url, files).await
    }

    /// Sends an endpoint request.
    pub async fn send<R, B>(&self, request: &R) -> Result<TwitterResponse<R::Data>>
    where
        R: api::Request,
        S: HttpService<B>,
        B: Default + From<Vec<u8>>,
        <S::ResponseBody as Body>::Error: Into<BoxError>,
    {
        self.request(R::METHOD, R::PATH, request.segments(), request.files())
            .await
    }
}
