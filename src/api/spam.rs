use crate::models::User;

api_requests! {
    POST "users/report_spam" => User;
    pub struct ReportSpam {
        ;
        screen_name: String,
        user_id: u64,
    }
}
