use super::Device;
use crate::models::{Account, User};

api_requests! {
    GET "account/settings" => Account;
    pub struct Settings {
        ;
    }

    GET "account/verify_credentials" => User;
    pub struct VerifyCredentials {
        ;
        include_entities: bool,
        skip_status: bool,
    }

    POST "account/settings" => Account;
    pub struct UpdateSettings {
        ;
        trend_location_woeid: u64,
        sleep_time_enabled: bool,
        start_sleep_time: u8,
        end_sleep_time: u8,
        time_zone: String,
        lang: String,
    }

    POST "account/update_delivery_device" => json::Value;
    pub struct UpdateDeliveryDevice {
        device: Device;
        include_entities: bool,
    }

    POST "account/update_profile" => User;
    pub struct UpdateProfile {
        ;
        name: String,
        url: String,
        location: String,
        description: String,
        include_entities: bool,
        skip_status: bool,
    }

    POST "account/update_profile_colors" => User;
    /// Colors are hexadecimal values without the leading `#`.
    pub struct UpdateProfileColors {
        ;
        profile_background_color: String,
        profile_link_color: String,
        profile_sidebar_border_color: String,
        profile_sidebar_fill_color: String,
        profile_text_color: String,
        include_entities: bool,
        skip_status: bool,
    }

    POST "account/remove_profile_banner" => json::Value;
    pub struct RemoveProfileBanner {
        ;
    }
}
