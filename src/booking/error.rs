use thiserror::Error;

pub const SUCCESS_MESSAGE: &str =
    "تم استقبال حجزك بنجاح! سيتواصل معك فريقنا قريباً عبر الواتساب أو البريد الإلكتروني.";
pub const RETRY_MESSAGE: &str = "حدث خطأ. يرجى المحاولة مرة أخرى.";

/// A booking field that failed validation. The display text is shown to the
/// visitor as is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("يرجى إدخال الاسم الكامل")]
    MissingName,
    #[error("يرجى إدخال رقم الهاتف")]
    MissingPhone,
    #[error("يرجى إدخال رقم هاتف صحيح")]
    InvalidPhone,
    #[error("يرجى اختيار نوع الخدمة")]
    MissingService,
    #[error("يرجى تحديد تاريخ الخدمة")]
    MissingDate,
}

/// Failure while handing a valid booking to one of its sinks.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("failed to write bookings to local storage: {0}")]
    StorageWrite(String),
    #[error("failed to serialize bookings: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to open link: {0}")]
    Navigation(String),
    #[error("failed to download export: {0}")]
    Download(String),
}

#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl BookingError {
    /// Text for the form notice. Sink failures get a generic retry prompt.
    pub fn user_message(&self) -> String {
        match self {
            BookingError::Validation(e) => e.to_string(),
            BookingError::Sink(_) => RETRY_MESSAGE.to_string(),
        }
    }
}
