use crate::models::{Trends, WhereOnEarthLocation};

api_requests! {
    GET "trends/place" => Vec<Trends>;
    pub struct Place {
        id: u64;
        /// `"hashtags"` to leave hashtags out.
        exclude: String,
    }

    GET "trends/available" => Vec<WhereOnEarthLocation>;
    pub struct Available {
        ;
    }

    GET "trends/closest" => Vec<WhereOnEarthLocation>;
    pub struct Closest {
        lat: f64,
        long: f64;
    }
}
