//! Normalization of the date formats found in Twitter API responses.

use std::fmt::{self, Display, Formatter};
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Serialize};

/// A date string layout used by some part of the Twitter API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `Wed Aug 27 13:08:45 +0000 2008`
    RestApi,
    /// `Wed, 27 Aug 2008 13:08:45 +0000`
    SearchApi,
    /// `2008-08-27T13:08:45Z`
    Atom,
    /// `2008-08-27 13:08:45`
    TrendsCurrent,
    /// `2008-08-27 13:08`
    TrendsDaily,
    /// `2008-08-27`
    TrendsWeekly,
}

/// A date-time from the Twitter API along with the layout it was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TwitterDateTime {
    pub date_time: DateTime<Utc>,
    pub format: DateFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub format: DateFormat,
    pub pattern: &'static str,
    kind: Kind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    /// The pattern carries a UTC offset.
    Zoned,
    /// The pattern has a time but no offset. The value is taken as UTC.
    Naive,
    DateOnly,
}

/// Placeholder for the UTC offset in the patterns below.
const ZONE: &str = "%z";
/// Twitter always writes the offset out as `+0000`.
const ZONE_UTC: &str = "+0000";

const PATTERNS: [Pattern; 6] = [
    Pattern {
        format: DateFormat::RestApi,
        pattern: "%a %b %d %H:%M:%S %z %Y",
        kind: Kind::Zoned,
    },
    Pattern {
        format: DateFormat::SearchApi,
        pattern: "%a, %d %b %Y %H:%M:%S %z",
        kind: Kind::Zoned,
    },
    Pattern {
        format: DateFormat::Atom,
        pattern: "%Y-%m-%dT%H:%M:%SZ",
        kind: Kind::Naive,
    },
    Pattern {
        format: DateFormat::TrendsCurrent,
        pattern: "%Y-%m-%d %H:%M:%S",
        kind: Kind::Naive,
    },
    Pattern {
        format: DateFormat::TrendsDaily,
        pattern: "%Y-%m-%d %H:%M",
        kind: Kind::Naive,
    },
    Pattern {
        format: DateFormat::TrendsWeekly,
        pattern: "%Y-%m-%d",
        kind: Kind::DateOnly,
    },
];

static FORMATS: OnceLock<Box<[Pattern]>> = OnceLock::new();

/// Returns the process-wide table of known date patterns, in the order they are tried by
/// [`TwitterDateTime::parse`].
pub fn formats() -> &'static [Pattern] {
    FORMATS.get_or_init(|| {
        debug!("populating the date format table");
        DateFormat::ALL.iter().map(|&f| PATTERNS[f as usize]).collect()
    })
}

impl DateFormat {
    pub const ALL: [DateFormat; 6] = [
        DateFormat::RestApi,
        DateFormat::SearchApi,
        DateFormat::Atom,
        DateFormat::TrendsCurrent,
        DateFormat::TrendsDaily,
        DateFormat::TrendsWeekly,
    ];

    pub fn pattern(self) -> &'static str {
        formats()[self as usize].pattern
    }
}

impl Pattern {
    /// chrono is lenient about whitespace and zero padding, so a match only counts if the
    /// parsed value renders back to `input` through the same pattern.
    fn parse(&self, input: &str) -> Option<DateTime<Utc>> {
        let exact = |rendered: String| rendered == input;
        match self.kind {
            Kind::Zoned => DateTime::parse_from_str(input, self.pattern)
                .ok()
                .filter(|date| exact(date.format(self.pattern).to_string()))
                .map(|date| date.with_timezone(&Utc)),
            Kind::Naive => NaiveDateTime::parse_from_str(input, self.pattern)
                .ok()
                .filter(|date| exact(date.format(self.pattern).to_string()))
                .map(|date| Utc.from_utc_datetime(&date)),
            Kind::DateOnly => NaiveDate::parse_from_str(input, self.pattern)
                .ok()
                .filter(|date| exact(date.format(self.pattern).to_string()))
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|date| Utc.from_utc_datetime(&date)),
        }
    }
}

impl TwitterDateTime {
    pub fn new(date_time: DateTime<Utc>, format: DateFormat) -> Self {
        TwitterDateTime { date_time, format }
    }

    /// Parses `input` with the first known pattern that matches it exactly.
    pub fn parse(input: &str) -> Option<Self> {
        let ret = formats().iter().find_map(|p| {
            p.parse(input)
                .map(|date_time| TwitterDateTime::new(date_time, p.format))
        });
        if ret.is_none() {
            trace!("no date format matches {:?}", input);
        }
        ret
    }

    /// Renders `date_time` in the given layout.
    pub fn format(date_time: DateTime<Utc>, format: DateFormat) -> String {
        let pattern = format.pattern().replace(ZONE, ZONE_UTC);
        date_time.format(&pattern).to_string()
    }
}

impl Display for TwitterDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&TwitterDateTime::format(self.date_time, self.format))
    }
}

impl From<TwitterDateTime> for DateTime<Utc> {
    fn from(date: TwitterDateTime) -> Self {
        date.date_time
    }
}

impl Serialize for TwitterDateTime {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TwitterDateTime {
    fn deserialize<D: de::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = TwitterDateTime;

            fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str("a date string in one of Twitter's formats")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TwitterDateTime, E> {
                TwitterDateTime::parse(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }

            serde_delegate!(visit_bytes visit_byte_buf);
        }

        d.deserialize_str(Visitor)
    }
}
