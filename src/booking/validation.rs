use crate::booking::error::ValidationError;
use crate::booking::models::BookingFields;

pub const MIN_PHONE_DIGITS: usize = 10;

/// Checks the collected form values. Stops at the first failing field, in
/// form order.
pub fn validate(fields: &BookingFields) -> Result<(), ValidationError> {
    if fields.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if fields.phone.trim().is_empty() {
        return Err(ValidationError::MissingPhone);
    }
    if phone_digits(&fields.phone) < MIN_PHONE_DIGITS {
        return Err(ValidationError::InvalidPhone);
    }
    if fields.service.is_empty() {
        return Err(ValidationError::MissingService);
    }
    if fields.date.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    Ok(())
}

// separators like spaces, dashes and a leading + are ignored
fn phone_digits(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}
