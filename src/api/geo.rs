use super::Granularity;
use crate::models::{Place, PlaceSearch};

api_requests! {
    GET "geo/id/{place_id}" => Place;
    pub struct Id {
        place_id: String;
    }

    GET "geo/reverse_geocode" => PlaceSearch;
    pub struct ReverseGeocode {
        lat: f64,
        long: f64;
        accuracy: String,
        granularity: Granularity,
        max_results: u32,
    }

    GET "geo/search" => PlaceSearch;
    /// At least one of `lat` and `long`, `query` or `ip` must be set.
    pub struct Search {
        ;
        lat: f64,
        long: f64,
        query: String,
        ip: String,
        granularity: Granularity,
        accuracy: String,
        max_results: u32,
        contained_within: String,
    }

    GET "geo/similar_places" => PlaceSearch;
    pub struct SimilarPlaces {
        lat: f64,
        long: f64,
        name: String;
        contained_within: String,
    }

    POST "geo/place" => Place;
    /// `token` is the one returned by `geo/similar_places`.
    pub struct CreatePlace {
        name: String,
        contained_within: String,
        token: String,
        lat: f64,
        long: f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Request;
    use crate::resolve::Resolver;

    #[test]
    fn reverse_geocode() {
        let mut req = ReverseGeocode::new(37.781_157, -122.398_720);
        req.granularity(Granularity::Neighborhood);
        let resolver = Resolver {
            include_entities: false,
            include_retweets: false,
        };
        assert_eq!(
            resolver.resolve(ReverseGeocode::PATH, req.segments()),
            "geo/reverse_geocode.json?lat=37.781157&long=-122.39872&granularity=neighborhood",
        );
    }

    #[test]
    fn id() {
        let req = Id::new("df51dec6f4ee2b2c".to_owned());
        let resolver = Resolver {
            include_entities: false,
            include_retweets: false,
        };
        assert_eq!(
            resolver.resolve(Id::PATH, req.segments()),
            "geo/id/df51dec6f4ee2b2c.json",
        );
    }
}
