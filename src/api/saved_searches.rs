use crate::models::SavedSearch;

api_requests! {
    GET "saved_searches/list" => Vec<SavedSearch>;
    pub struct List {
        ;
    }

    GET "saved_searches/show/{id}" => SavedSearch;
    pub struct Show {
        id: u64;
    }

    POST "saved_searches/create" => SavedSearch;
    pub struct Create {
        query: String;
    }

    POST "saved_searches/destroy/{id}" => SavedSearch;
    pub struct Destroy {
        id: u64;
    }
}
