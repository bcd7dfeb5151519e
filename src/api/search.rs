use chrono::NaiveDate;

use super::SearchResultType;
use crate::models::SearchResult;

api_requests! {
    GET "search/tweets" => SearchResult;
    pub struct Tweets {
        q: String;
        geocode: String,
        lang: String,
        locale: String,
        result_type: SearchResultType,
        count: u32,
        until: NaiveDate,
        since_id: u64,
        max_id: u64,
        include_entities: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Request;
    use crate::resolve::Resolver;

    #[test]
    fn tweets() {
        let mut req = Tweets::new("#rust lang:ja".to_owned());
        req.result_type(SearchResultType::Recent)
            .until(NaiveDate::from_ymd_opt(2013, 2, 6).unwrap())
            .include_entities(false);

        let resolver = Resolver {
            include_entities: true,
            include_retweets: false,
        };
        assert_eq!(
            resolver.resolve(Tweets::PATH, req.segments()),
            "search/tweets.json?q=%23rust%20lang%3Aja&result_type=recent&until=2013-02-06\
             &include_entities=0",
        );
    }
}
