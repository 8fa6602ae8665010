use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Services offered in the booking form, as (value, label) pairs.
/// The value is what ends up in the stored record and the WhatsApp message.
pub const SERVICES: &[(&str, &str)] = &[
    ("regular-clean", "تنظيف منزلي دوري"),
    ("deep-clean", "تنظيف عميق"),
    ("office-clean", "تنظيف المكاتب والشركات"),
    ("move-clean", "تنظيف بعد الانتقال أو التشطيب"),
    ("carpet-clean", "تنظيف السجاد والكنب"),
];

pub fn service_label(value: &str) -> Option<&'static str> {
    SERVICES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}

/// Raw values read from the booking form, before validation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookingFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub date: String,
    pub message: String,
}

/// One submitted booking as it is kept in local storage.
///
/// Optional fields hold an empty string when the visitor left them out, which
/// is also how the records written by the old static page look.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub service: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,
}

// Hand-edited or older entries may hold null or numbers where text is expected.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl BookingRecord {
    pub fn new(fields: BookingFields, timestamp: impl Into<String>) -> Self {
        Self {
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
            service: fields.service,
            date: fields.date,
            message: fields.message,
            timestamp: timestamp.into(),
        }
    }

    pub fn email(&self) -> Option<&str> {
        (!self.email.is_empty()).then_some(self.email.as_str())
    }

    pub fn message(&self) -> Option<&str> {
        (!self.message.is_empty()).then_some(self.message.as_str())
    }
}
