use crate::booking::error::SinkError;
use crate::booking::message::format_booking_message;
use crate::booking::models::BookingRecord;
use web_sys::window;

/// Something that can send the visitor to a URL in a new tab.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), SinkError>;
}

pub struct WindowOpener;

impl LinkOpener for WindowOpener {
    fn open(&self, url: &str) -> Result<(), SinkError> {
        let window = window().ok_or_else(|| SinkError::Navigation("no window".to_string()))?;
        // A blocked popup comes back as Ok(None); there is nothing useful to do about it.
        window
            .open_with_url_and_target(url, "_blank")
            .map(|_| ())
            .map_err(|e| SinkError::Navigation(format!("{:?}", e)))
    }
}

/// Prefilled chat link: `<chat_url>?text=<percent-encoded message>`.
pub fn whatsapp_link(chat_url: &str, text: &str) -> String {
    format!("{}?text={}", chat_url, urlencoding::encode(text))
}

/// Opens a WhatsApp chat prefilled with the formatted booking.
pub fn send_via_whatsapp<O: LinkOpener>(
    opener: &O,
    chat_url: &str,
    record: &BookingRecord,
) -> Result<(), SinkError> {
    let link = whatsapp_link(chat_url, &format_booking_message(record));
    opener.open(&link)
}

#[cfg(test)]
pub mod recording {
    use super::LinkOpener;
    use crate::booking::error::SinkError;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    pub struct RecordingOpener {
        pub opened: RefCell<Vec<String>>,
        pub fail: Cell<bool>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<(), SinkError> {
            if self.fail.get() {
                return Err(SinkError::Navigation("SecurityError".into()));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::RecordingOpener;
    use super::*;
    use crate::booking::models::BookingFields;

    const CHAT: &str = "https://wa.me/message/LEWJG5ATVX77J1";

    #[test]
    fn link_escapes_newlines_and_markup() {
        let link = whatsapp_link(CHAT, "*a b*\nc&d=e");
        assert_eq!(
            link,
            "https://wa.me/message/LEWJG5ATVX77J1?text=%2Aa%20b%2A%0Ac%26d%3De"
        );
    }

    #[test]
    fn link_encodes_arabic_as_utf8() {
        // "الاسم"
        let link = whatsapp_link(CHAT, "الاسم");
        assert!(link.ends_with("?text=%D8%A7%D9%84%D8%A7%D8%B3%D9%85"));
    }

    #[test]
    fn opens_one_link_carrying_the_booking() {
        let opener = RecordingOpener::default();
        let record = BookingRecord::new(
            BookingFields {
                name: "Ahmed".into(),
                phone: "0912345678".into(),
                service: "deep-clean".into(),
                date: "2025-06-01".into(),
                ..Default::default()
            },
            "now",
        );
        send_via_whatsapp(&opener, CHAT, &record).unwrap();

        let opened = opener.opened.borrow();
        assert_eq!(opened.len(), 1);
        let text = opened[0].split_once("?text=").unwrap().1;
        let decoded = urlencoding::decode(text).unwrap();
        assert_eq!(decoded, format_booking_message(&record));
    }
}
