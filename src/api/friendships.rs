//! `friends/*`, `followers/*` and `friendships/*`.

use super::Device;
use crate::models::{CursorList, Friendship, FriendshipLookup, User};

api_requests! {
    GET "friendships/no_retweets/ids" => Vec<u64>;
    pub struct NoRetweetsIds {
        ;
        stringify_ids: bool,
    }

    GET "friends/ids" => CursorList<u64>;
    pub struct FriendsIds {
        ;
        user_id: u64,
        screen_name: String,
        cursor: i64,
        stringify_ids: bool,
        count: u32,
    }

    GET "followers/ids" => CursorList<u64>;
    pub struct FollowersIds {
        ;
        user_id: u64,
        screen_name: String,
        cursor: i64,
        stringify_ids: bool,
        count: u32,
    }

    GET "friendships/lookup" => Vec<FriendshipLookup>;
    pub struct Lookup {
        ;
        screen_name: Vec<String>,
        user_id: Vec<u64>,
    }

    GET "friendships/incoming" => CursorList<u64>;
    pub struct Incoming {
        ;
        cursor: i64,
        stringify_ids: bool,
    }

    GET "friendships/outgoing" => CursorList<u64>;
    pub struct Outgoing {
        ;
        cursor: i64,
        stringify_ids: bool,
    }

    POST "friendships/create" => User;
    pub struct Create {
        ;
        screen_name: String,
        user_id: u64,
        follow: bool,
    }

    POST "friendships/destroy" => User;
    pub struct Destroy {
        ;
        screen_name: String,
        user_id: u64,
    }

    POST "friendships/update" => Friendship;
    pub struct Update {
        ;
        screen_name: String,
        user_id: u64,
        device: Device,
        retweets: bool,
    }

    GET "friendships/show" => Friendship;
    pub struct Show {
        ;
        source_id: u64,
        source_screen_name: String,
        target_id: u64,
        target_screen_name: String,
    }

    GET "friends/list" => CursorList<User>;
    pub struct FriendsList {
        ;
        user_id: u64,
        screen_name: String,
        cursor: i64,
        count: u32,
        skip_status: bool,
        include_user_entities: bool,
    }

    GET "followers/list" => CursorList<User>;
    pub struct FollowersList {
        ;
        user_id: u64,
        screen_name: String,
        cursor: i64,
        count: u32,
        skip_status: bool,
        include_user_entities: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Request;
    use crate::resolve::Resolver;

    #[test]
    fn lookup() {
        let mut req = Lookup::new();
        req.screen_name(vec!["twitterapi".to_owned(), "twitter".to_owned()]);
        assert_eq!(
            Resolver::default().resolve(Lookup::PATH, req.segments()),
            "friendships/lookup.json?screen_name=twitterapi%2Ctwitter\
             &include_entities=1&include_rts=1",
        );
    }
}
