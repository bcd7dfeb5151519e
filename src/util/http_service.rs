use std::future::Future;
use std::task::{Context, Poll};

use http::header::HeaderValue;
use http::{Request, Response};
use http_body::Body;

use super::BoxError;

#[allow(clippy::declare_interior_mutable_const)]
pub const USER_AGENT_DEFAULT: HeaderValue =
    HeaderValue::from_static(concat!("twitter-rest/", env!("CARGO_PKG_VERSION")));

/// An HTTP client that `TwitterService` can send requests through.
///
/// This is implemented for every `tower_service::Service` that takes an `http::Request<B>` and
/// resolves to an `http::Response`, so `hyper::Client` works out of the box.
pub trait HttpService<B> {
    type ResponseBody: Body;
    type Error: Into<BoxError>;
    type Future: Future<Output = Result<Response<Self::ResponseBody>, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>>;

    fn call(&mut self, request: Request<B>) -> Self::Future;
}

impl<S, B, ResB> HttpService<B> for S
where
    S: tower_service::Service<Request<B>, Response = Response<ResB>>,
    S::Error: Into<BoxError>,
    ResB: Body,
{
    type ResponseBody = ResB;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), S::Error>> {
        tower_service::Service::poll_ready(self, cx)
    }

    fn call(&mut self, request: Request<B>) -> S::Future {
        tower_service::Service::call(self, request)
    }
}
