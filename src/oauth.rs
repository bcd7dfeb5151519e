//! OAuth 1.0a authorization of resolved request URLs.

use http::Method;
use oauth1::serializer::{Serializer, SerializerExt};
use oauth_credentials::Token;

/// The query parameters of a resolved URL, sorted for signing.
///
/// Values are kept in their percent-encoded form. The URL resolver encodes values with the same
/// character set that OAuth 1.0a uses, so they can be fed to the signature base string as-is.
#[derive(Debug, PartialEq, Eq)]
struct QueryParameters<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> QueryParameters<'a> {
    fn parse(query: &'a str) -> Self {
        let mut pairs: Vec<_> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .collect();
        pairs.sort_unstable();
        QueryParameters { pairs }
    }
}

impl oauth1::Request for QueryParameters<'_> {
    fn serialize<S: Serializer>(&self, mut serializer: S) -> S::Output {
        let mut oauth_written = false;
        for &(key, value) in &self.pairs {
            if !oauth_written && key > "oauth_" {
                serializer.serialize_oauth_parameters();
                oauth_written = true;
            }
            serializer.serialize_parameter_encoded(key, value);
        }
        if !oauth_written {
            serializer.serialize_oauth_parameters();
        }
        serializer.end()
    }
}

/// Computes the value of the `Authorization` header for a request to `uri`.
///
/// `uri` is an absolute URL, possibly with a query string, whose parameter values are already
/// percent-encoded.
pub fn authorize(method: &Method, uri: &str, token: &Token<Box<str>>) -> String {
    let (base, query) = uri.split_once('?').unwrap_or((uri, ""));
    let params = QueryParameters::parse(query);
    trace!("signing {} {} with {:?}", method, base, params);
    oauth1::authorize(method.as_str(), base, &params, token, oauth1::HmacSha1)
}

#[cfg(test)]
mod tests {
    use oauth_credentials::Credentials;

    use super::*;

    fn token() -> Token<Box<str>> {
        Token::new(
            Credentials::new("consumer_key".into(), "consumer_secret".into()),
            Credentials::new("token".into(), "token_secret".into()),
        )
    }

    #[test]
    fn parse_sorts_parameters() {
        let params = QueryParameters::parse("trim_user=1&count=20&&include_rts=&count=10");
        assert_eq!(
            params.pairs,
            [
                ("count", "10"),
                ("count", "20"),
                ("include_rts", ""),
                ("trim_user", "1"),
            ],
        );
        assert!(QueryParameters::parse("").pairs.is_empty());
    }

    #[test]
    fn header() {
        let header = authorize(
            &Method::GET,
            "https://api.twitter.com/1.1/statuses/home_timeline.json?count=20&include_entities=1",
            &token(),
        );

        assert!(header.starts_with("OAuth "));
        assert!(header.contains("oauth_consumer_key=\"consumer_key\""));
        assert!(header.contains("oauth_token=\"token\""));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(header.contains("oauth_signature="));
        // Query parameters are signed but not repeated in the header.
        assert!(!header.contains("count"));
    }
}
