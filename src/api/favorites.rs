use crate::models::Tweet;

api_requests! {
    GET "favorites/list" => Vec<Tweet>;
    pub struct List {
        ;
        user_id: u64,
        screen_name: String,
        count: u32,
        since_id: u64,
        max_id: u64,
        include_entities: bool,
    }

    POST "favorites/destroy" => Tweet;
    pub struct Destroy {
        id: u64;
        include_entities: bool,
    }

    POST "favorites/create" => Tweet;
    pub struct Create {
        id: u64;
        include_entities: bool,
    }
}
