//! `lists/*`
//!
//! Lists are identified either by `list_id`, or by `slug` together with `owner_screen_name` or
//! `owner_id`.

use super::ListMode;
use crate::models::{CursorList, List, Tweet, User};

api_requests! {
    GET "lists/list" => Vec<List>;
    pub struct Lists {
        ;
        user_id: u64,
        screen_name: String,
        reverse: bool,
    }

    GET "lists/statuses" => Vec<Tweet>;
    pub struct Statuses {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
        since_id: u64,
        max_id: u64,
        count: u32,
        include_entities: bool,
        include_rts: bool,
    }

    GET "lists/memberships" => CursorList<List>;
    pub struct Memberships {
        ;
        user_id: u64,
        screen_name: String,
        count: u32,
        cursor: i64,
        filter_to_owned_lists: bool,
    }

    GET "lists/subscribers" => CursorList<User>;
    pub struct Subscribers {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
        count: u32,
        cursor: i64,
        include_entities: bool,
        skip_status: bool,
    }

    POST "lists/subscribers/create" => List;
    pub struct Subscribe {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
    }

    GET "lists/subscribers/show" => User;
    pub struct ShowSubscriber {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
        user_id: u64,
        screen_name: String,
        include_entities: bool,
        skip_status: bool,
    }

    POST "lists/subscribers/destroy" => List;
    pub struct Unsubscribe {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
    }

    GET "lists/members" => CursorList<User>;
    pub struct Members {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
        count: u32,
        cursor: i64,
        include_entities: bool,
        skip_status: bool,
    }

    GET "lists/members/show" => User;
    pub struct ShowMember {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
        user_id: u64,
        screen_name: String,
        include_entities: bool,
        skip_status: bool,
    }

    POST "lists/members/create" => List;
    pub struct AddMember {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
        user_id: u64,
        screen_name: String,
    }

    POST "lists/members/create_all" => List;
    /// Up to 100 users per request.
    pub struct AddMembers {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
        user_id: Vec<u64>,
        screen_name: Vec<String>,
    }

    POST "lists/members/destroy" => List;
    pub struct RemoveMember {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
        user_id: u64,
        screen_name: String,
    }

    POST "lists/members/destroy_all" => List;
    pub struct RemoveMembers {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
        user_id: Vec<u64>,
        screen_name: Vec<String>,
    }

    POST "lists/create" => List;
    pub struct Create {
        name: String;
        mode: ListMode,
        description: String,
    }

    POST "lists/update" => List;
    pub struct Update {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
        name: String,
        mode: ListMode,
        description: String,
    }

    POST "lists/destroy" => List;
    pub struct Destroy {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
    }

    GET "lists/show" => List;
    pub struct Show {
        ;
        list_id: u64,
        slug: String,
        owner_screen_name: String,
        owner_id: u64,
    }

    GET "lists/subscriptions" => CursorList<List>;
    pub struct Subscriptions {
        ;
        user_id: u64,
        screen_name: String,
        count: u32,
        cursor: i64,
    }

    GET "lists/ownerships" => CursorList<List>;
    pub struct Ownerships {
        ;
        user_id: u64,
        screen_name: String,
        count: u32,
        cursor: i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Request;
    use crate::resolve::Resolver;

    #[test]
    fn slug_and_owner() {
        let mut req = Statuses::new();
        req.slug("team".to_owned())
            .owner_screen_name("twitter".to_owned())
            .count(50)
            .include_rts(false);

        assert_eq!(
            Resolver::default().resolve(Statuses::PATH, req.segments()),
            "lists/statuses.json?slug=team&owner_screen_name=twitter&count=50&include_rts=0\
             &include_entities=1",
        );
    }

    #[test]
    fn create() {
        let mut req = Create::new("Rust people".to_owned());
        req.mode(ListMode::Private);
        assert_eq!(req.segments().len(), 3);
        assert_eq!(Create::METHOD, http::Method::POST);
    }
}
