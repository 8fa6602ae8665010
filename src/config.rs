/// Base of the WhatsApp business deep link. The link id and the encoded
/// message are appended to it.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/message/";

const DEFAULT_WHATSAPP_LINK_ID: &str = "LEWJG5ATVX77J1";
const DEFAULT_STORAGE_KEY: &str = "smasco_bookings";

/// How long a form notice stays on screen
pub const NOTICE_HIDE_DELAY_MS: u32 = 5_000;

pub const EXPORT_FILE_NAME: &str = "smasco_bookings.json";

/// Locale used for the human readable submission timestamp
pub const TIMESTAMP_LOCALE: &str = "ar-SD";

pub fn get_whatsapp_link_id() -> &'static str {
    option_env!("SMASCO_WHATSAPP_LINK_ID").unwrap_or(DEFAULT_WHATSAPP_LINK_ID)
}

pub fn get_storage_key() -> &'static str {
    option_env!("SMASCO_STORAGE_KEY").unwrap_or(DEFAULT_STORAGE_KEY)
}

pub fn get_whatsapp_url() -> String {
    format!("{}{}", WHATSAPP_BASE_URL, get_whatsapp_link_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_url_points_at_wa_me() {
        let url = get_whatsapp_url();
        assert!(url.starts_with("https://wa.me/message/"));
        assert!(url.len() > WHATSAPP_BASE_URL.len());
    }

    #[test]
    fn notices_stay_for_five_seconds() {
        assert_eq!(NOTICE_HIDE_DELAY_MS, 5_000);
    }

    #[test]
    fn storage_key_is_never_empty() {
        assert!(!get_storage_key().is_empty());
    }
}
