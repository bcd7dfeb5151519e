use crate::models::RateLimitStatusSummary;

api_requests! {
    GET "application/rate_limit_status" => RateLimitStatusSummary;
    pub struct RateLimitStatus {
        ;
        /// Resource families, e.g. `statuses` or `search`.
        resources: Vec<String>,
    }
}
