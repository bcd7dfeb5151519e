use crate::models::{CursorList, User};

api_requests! {
    GET "blocks/list" => CursorList<User>;
    pub struct List {
        ;
        include_entities: bool,
        skip_status: bool,
        cursor: i64,
    }

    GET "blocks/ids" => CursorList<u64>;
    pub struct Ids {
        ;
        stringify_ids: bool,
        cursor: i64,
    }

    POST "blocks/create" => User;
    pub struct Create {
        ;
        screen_name: String,
        user_id: u64,
        include_entities: bool,
        skip_status: bool,
    }

    POST "blocks/destroy" => User;
    pub struct Destroy {
        ;
        screen_name: String,
        user_id: u64,
        include_entities: bool,
        skip_status: bool,
    }
}
