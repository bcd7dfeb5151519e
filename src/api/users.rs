use crate::models::{User, UserSuggestions};

api_requests! {
    GET "users/lookup" => Vec<User>;
    pub struct Lookup {
        ;
        screen_name: Vec<String>,
        user_id: Vec<u64>,
        include_entities: bool,
    }

    GET "users/show" => User;
    pub struct Show {
        ;
        user_id: u64,
        screen_name: String,
        include_entities: bool,
    }

    GET "users/search" => Vec<User>;
    pub struct Search {
        q: String;
        page: u32,
        count: u32,
        include_entities: bool,
    }

    GET "users/contributees" => Vec<User>;
    pub struct Contributees {
        ;
        user_id: u64,
        screen_name: String,
        include_entities: bool,
        skip_status: bool,
    }

    GET "users/contributors" => Vec<User>;
    pub struct Contributors {
        ;
        user_id: u64,
        screen_name: String,
        include_entities: bool,
        skip_status: bool,
    }

    GET "users/profile_banner" => json::Value;
    pub struct ProfileBanner {
        ;
        user_id: u64,
        screen_name: String,
    }

    GET "users/suggestions/{slug}" => UserSuggestions;
    pub struct SuggestionsBySlug {
        slug: String;
        lang: String,
    }

    GET "users/suggestions" => Vec<UserSuggestions>;
    pub struct Suggestions {
        ;
        lang: String,
    }

    GET "users/suggestions/{slug}/members" => Vec<User>;
    pub struct SuggestionMembers {
        slug: String;
    }
}
