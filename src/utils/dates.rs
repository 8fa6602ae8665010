use crate::config::TIMESTAMP_LOCALE;
use chrono::{Duration, Local, NaiveDate};
use web_sys::js_sys;

/// Earliest date a cleaning can be booked for: the day after `today`, in the
/// `YYYY-MM-DD` shape a date input expects.
pub fn min_booking_date(today: NaiveDate) -> String {
    (today + Duration::days(1)).format("%Y-%m-%d").to_string()
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Browser-formatted "now", as shown in the WhatsApp message and stored with
/// the booking.
pub fn submission_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string(TIMESTAMP_LOCALE, &js_sys::Object::new())
        .into()
}
