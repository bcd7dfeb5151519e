use crate::models::DirectMessage;

api_requests! {
    GET "direct_messages" => Vec<DirectMessage>;
    pub struct Received {
        ;
        since_id: u64,
        max_id: u64,
        count: u32,
        include_entities: bool,
        skip_status: bool,
    }

    GET "direct_messages/sent" => Vec<DirectMessage>;
    pub struct Sent {
        ;
        since_id: u64,
        max_id: u64,
        count: u32,
        page: u32,
        include_entities: bool,
    }

    GET "direct_messages/show" => DirectMessage;
    pub struct Show {
        id: u64;
    }

    POST "direct_messages/destroy" => DirectMessage;
    pub struct Destroy {
        id: u64;
        include_entities: bool,
    }

    POST "direct_messages/new" => DirectMessage;
    /// Either `user_id` or `screen_name` must be set.
    pub struct New {
        text: String;
        user_id: u64,
        screen_name: String,
    }
}
