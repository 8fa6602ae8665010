use crate::booking::error::{BookingError, SUCCESS_MESSAGE};
use crate::booking::local_log::BookingLog;
use crate::booking::models::{BookingFields, BookingRecord};
use crate::booking::validation::validate;
use crate::booking::whatsapp::{send_via_whatsapp, LinkOpener};
use crate::components::notification::Notifier;
use crate::utils::storage::KeyValueStore;

/// Where a valid booking goes: a WhatsApp chat and the local booking log.
pub struct BookingSinks<'a, S, O> {
    pub opener: &'a O,
    pub chat_url: &'a str,
    pub log: &'a BookingLog<S>,
}

/// Runs one form submission end to end and tells the visitor how it went.
///
/// Nothing reaches the sinks unless validation passes. A failing sink stops
/// the submission; the booking is not retried.
pub fn submit_booking<S, O, N>(
    fields: BookingFields,
    timestamp: String,
    sinks: &BookingSinks<'_, S, O>,
    notifier: &N,
) -> Result<BookingRecord, BookingError>
where
    S: KeyValueStore,
    O: LinkOpener,
    N: Notifier,
{
    let result = deliver(fields, timestamp, sinks);
    match &result {
        Ok(_) => notifier.success(SUCCESS_MESSAGE),
        Err(e @ BookingError::Validation(_)) => notifier.error(&e.user_message()),
        Err(e @ BookingError::Sink(_)) => {
            log::error!("Booking submission failed: {}", e);
            notifier.error(&e.user_message());
        }
    }
    result
}

fn deliver<S, O>(
    fields: BookingFields,
    timestamp: String,
    sinks: &BookingSinks<'_, S, O>,
) -> Result<BookingRecord, BookingError>
where
    S: KeyValueStore,
    O: LinkOpener,
{
    validate(&fields)?;
    let record = BookingRecord::new(fields, timestamp);

    send_via_whatsapp(sinks.opener, sinks.chat_url, &record)?;
    let total = sinks.log.append(&record)?;
    log::info!("Booking stored locally ({} total)", total);

    Ok(record)
}
