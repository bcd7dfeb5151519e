//! Resolution of an endpoint path template and a segment list into a request URL.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::segment::Segments;

/// Everything except the RFC 3986 unreserved characters.
const VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const INCLUDE_ENTITIES: &str = "include_entities";
const INCLUDE_RETWEETS: &str = "include_rts";

/// Builds request URLs from endpoint paths and segment lists.
///
/// The two switches control whether `include_entities=1` and `include_rts=1` are added to
/// requests that do not set those parameters themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolver {
    pub include_entities: bool,
    pub include_retweets: bool,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver {
            include_entities: true,
            include_retweets: true,
        }
    }
}

impl Resolver {
    pub fn new() -> Self {
        Default::default()
    }

    /// Resolves `path` and `segments` into a URL relative to the API root.
    ///
    /// `{name}` placeholders in `path` are filled with the value of the pair whose key is `name`,
    /// and that pair is not sent as a query parameter.
    pub fn resolve(&self, path: &str, segments: Segments) -> String {
        trace_fn!(Resolver::resolve, "path={:?}, segments={:?}", path, segments);

        let Segments { anchor, pairs } = segments;

        let mut pairs: Vec<(String, String)> = pairs
            .into_iter()
            .filter_map(|(key, value)| value.coerce().map(|value| (key, value)))
            .collect();
        lead_with_question_mark(&mut pairs);

        let path = substitute_templates(path, &mut pairs);
        // Substitution may have removed the pair that used to come first.
        lead_with_question_mark(&mut pairs);

        for (_, value) in &mut pairs {
            let escaped = escape(value).into_owned();
            *value = escaped;
        }

        if self.include_entities {
            append_default(&mut pairs, INCLUDE_ENTITIES);
        }
        if self.include_retweets {
            append_default(&mut pairs, INCLUDE_RETWEETS);
        }

        let len = pairs
            .iter()
            .fold(path.len() + anchor.len(), |n, (k, v)| n + k.len() + v.len());
        let mut ret = String::with_capacity(len);
        ret.push_str(&path);
        ret.push_str(&anchor);
        for (key, value) in &pairs {
            ret.push_str(key);
            ret.push_str(value);
        }

        ret
    }
}

/// Percent-encodes a parameter value.
pub fn escape(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, VALUE_ENCODE_SET).into()
}

/// Strips the separators off a key, e.g. `"&since_id="` -> `"since_id"`.
fn key_name(key: &str) -> &str {
    key.trim_matches(|c: char| c == '&' || c == '=' || c == '?' || c.is_whitespace())
}

fn lead_with_question_mark(pairs: &mut [(String, String)]) {
    if let Some((key, _)) = pairs.first_mut() {
        if key.starts_with('&') {
            key.replace_range(..1, "?");
        }
    }
}

fn substitute_templates(path: &str, pairs: &mut Vec<(String, String)>) -> String {
    let mut ret = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(start) = rest.find('{') {
        let end = match rest[start..].find('}') {
            Some(i) => start + i,
            None => break,
        };
        let name = &rest[(start + 1)..end];

        ret.push_str(&rest[..start]);
        match pairs.iter().position(|(key, _)| key_name(key) == name) {
            Some(i) => {
                let (_, value) = pairs.remove(i);
                ret.push_str(&escape(&value));
            }
            None => {
                warn!("no value for the placeholder {{{}}} in {:?}", name, path);
                ret.push_str(&rest[start..=end]);
            }
        }
        rest = &rest[(end + 1)..];
    }
    ret.push_str(rest);

    ret
}

fn append_default(pairs: &mut Vec<(String, String)>, name: &str) {
    if pairs.iter().any(|(key, _)| key_name(key).contains(name)) {
        return;
    }
    let sep = if pairs.is_empty() { '?' } else { '&' };
    pairs.push((format!("{}{}=", sep, name), "1".to_owned()));
}
