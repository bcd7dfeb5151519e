//! The key/value token list that request URLs are built from.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Error, Result};

/// The response format suffix appended to every endpoint path.
pub const FORMAT: &str = ".json";

/// A single parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// Rendered as `yyyy-MM-dd`.
    Date(NaiveDate),
    /// Rendered as a comma-separated list.
    List(Vec<String>),
    /// An absent value. The parameter is not sent at all.
    None,
}

/// An anchor token followed by `(key, value)` pairs.
///
/// Keys carry their own separators, e.g. `"?count="` or `"&since_id="`.
#[derive(Clone, Debug, PartialEq)]
pub struct Segments {
    pub(crate) anchor: String,
    pub(crate) pairs: Vec<(String, Value)>,
}

impl Segments {
    pub fn new(anchor: impl Into<String>) -> Self {
        Segments {
            anchor: anchor.into(),
            pairs: Vec::new(),
        }
    }

    /// Builds a segment list from a flat token list of the form
    /// `[anchor, key, value, key, value, ...]`.
    pub fn from_tokens<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut tokens = tokens.into_iter();

        let anchor = match tokens.next() {
            Some(Value::Str(anchor)) => anchor,
            Some(v) => {
                return Err(Error::Segments(format!(
                    "the leading token must be a string, found {:?}",
                    v
                )))
            }
            None => return Err(Error::Segments("the token list is empty".into())),
        };

        let mut ret = Segments::new(anchor);
        while let Some(key) = tokens.next() {
            let key = match key {
                Value::Str(key) => key,
                v => {
                    return Err(Error::Segments(format!(
                        "keys must be strings, found {:?}",
                        v
                    )))
                }
            };
            let value = tokens.next().ok_or_else(|| {
                Error::Segments(format!("the key {:?} has no value", key))
            })?;
            ret.pairs.push((key, value));
        }

        Ok(ret)
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(key, value);
        self
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn pairs(&self) -> &[(String, Value)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for Segments {
    fn default() -> Self {
        Segments::new(FORMAT)
    }
}

impl Value {
    pub fn is_none(&self) -> bool {
        matches!(*self, Value::None)
    }

    /// Renders the value the way the API expects it in a query string, before escaping.
    ///
    /// Returns `None` for `Value::None`.
    pub fn coerce(&self) -> Option<String> {
        let ret = match *self {
            Value::Str(ref s) => s.clone(),
            Value::Int(n) => n.to_string(),
            Value::UInt(n) => n.to_string(),
            // `Display` for floats is locale-independent and never uses exponent notation.
            Value::Float(n) => n.to_string(),
            Value::Bool(b) => (if b { "1" } else { "0" }).to_owned(),
            Value::Date(date) => date.format("%Y-%m-%d").to_string(),
            Value::List(ref items) => items.join(","),
            Value::None => return None,
        };
        Some(ret)
    }

    /// Collects any iterable of displayable items into a `Value::List`.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Value::List(items.into_iter().map(|item| item.to_string()).collect())
    }
}

macro_rules! impl_from {
    ($($Variant:ident($($T:ty),*);)*) => {$($(
        impl From<$T> for Value {
            fn from(v: $T) -> Self {
                Value::$Variant(v.into())
            }
        }
    )*)*};
}

impl_from! {
    Str(String, &str, Box<str>);
    Int(i64, i32, i16, i8);
    UInt(u64, u32, u16, u8);
    Float(f64, f32);
    Bool(bool);
    Date(NaiveDate);
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::UInt(n as u64)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date.date_naive())
    }
}

impl<T: Display> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

impl<T: Display> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce() {
        assert_eq!(Value::from(true).coerce().unwrap(), "1");
        assert_eq!(Value::from(false).coerce().unwrap(), "0");
        assert_eq!(Value::from(-122.419_416_f64).coerce().unwrap(), "-122.419416");
        assert_eq!(Value::from(0.5_f32).coerce().unwrap(), "0.5");
        assert_eq!(Value::from(1e21_f64).coerce().unwrap(), "1000000000000000000000");
        assert_eq!(
            Value::from(NaiveDate::from_ymd_opt(2013, 2, 6).unwrap())
                .coerce()
                .unwrap(),
            "2013-02-06",
        );
        assert_eq!(Value::from(vec![1_u64, 2, 3]).coerce().unwrap(), "1,2,3");
        assert_eq!(Value::from(vec!["a"]).coerce().unwrap(), "a");
        assert_eq!(Value::from(Vec::<u64>::new()).coerce().unwrap(), "");
        assert_eq!(Value::from("").coerce().unwrap(), "");
        assert_eq!(Value::from(None::<u64>).coerce(), None);
        assert_eq!(Value::from(Some(42_u64)), Value::UInt(42));
    }

    #[test]
    fn from_tokens() {
        let segments = Segments::from_tokens(vec![
            Value::from(FORMAT),
            Value::from("?id="),
            Value::from(42_u64),
        ])
        .unwrap();
        assert_eq!(segments, Segments::default().with("?id=", 42_u64));
    }

    #[test]
    fn from_tokens_rejects_malformed_lists() {
        assert!(matches!(
            Segments::from_tokens(Vec::new()),
            Err(Error::Segments(_)),
        ));
        assert!(matches!(
            Segments::from_tokens(vec![Value::from(FORMAT), Value::from("?id=")]),
            Err(Error::Segments(_)),
        ));
        assert!(matches!(
            Segments::from_tokens(vec![Value::from(FORMAT), Value::from(1_u64), Value::from(2_u64)]),
            Err(Error::Segments(_)),
        ));
        assert!(matches!(
            Segments::from_tokens(vec![Value::from(true)]),
            Err(Error::Segments(_)),
        ));
    }
}
