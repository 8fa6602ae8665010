use crate::booking::models::BookingRecord;

const NO_EMAIL: &str = "لم يتم تقديمه";
const NO_DETAILS: &str = "لا يوجد";

/// Renders the booking as the text sent over WhatsApp.
pub fn format_booking_message(record: &BookingRecord) -> String {
    let lines = [
        "*طلب حجز خدمة نظافة*".to_string(),
        String::new(),
        format!("الاسم: {}", record.name),
        format!("رقم الهاتف: {}", record.phone),
        format!("البريد الإلكتروني: {}", record.email().unwrap_or(NO_EMAIL)),
        format!("نوع الخدمة: {}", record.service),
        format!("التاريخ المطلوب: {}", record.date),
        format!("وصف إضافي: {}", record.message().unwrap_or(NO_DETAILS)),
        format!("الوقت: {}", record.timestamp),
    ];
    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::models::BookingFields;
    use pretty_assertions::assert_eq;

    fn record() -> BookingRecord {
        BookingRecord::new(
            BookingFields {
                name: "Ahmed".into(),
                phone: "0912345678".into(),
                email: String::new(),
                service: "deep-clean".into(),
                date: "2025-06-01".into(),
                message: String::new(),
            },
            "١‏/٦‏/٢٠٢٥ ١٠:٠٠:٠٠ ص",
        )
    }

    #[test]
    fn renders_fixed_template_with_fallbacks() {
        let expected = "*طلب حجز خدمة نظافة*\n\
                        \n\
                        الاسم: Ahmed\n\
                        رقم الهاتف: 0912345678\n\
                        البريد الإلكتروني: لم يتم تقديمه\n\
                        نوع الخدمة: deep-clean\n\
                        التاريخ المطلوب: 2025-06-01\n\
                        وصف إضافي: لا يوجد\n\
                        الوقت: ١‏/٦‏/٢٠٢٥ ١٠:٠٠:٠٠ ص";
        assert_eq!(format_booking_message(&record()), expected);
    }

    #[test]
    fn optional_fields_replace_fallbacks() {
        let record = BookingRecord {
            email: "ahmed@example.com".into(),
            message: "شقة من ثلاث غرف".into(),
            ..record()
        };
        let text = format_booking_message(&record);
        assert!(text.contains("البريد الإلكتروني: ahmed@example.com"));
        assert!(text.contains("وصف إضافي: شقة من ثلاث غرف"));
        assert!(!text.contains(NO_EMAIL));
    }

    #[test]
    fn same_record_gives_identical_text() {
        let a = format_booking_message(&record());
        let b = format_booking_message(&record());
        assert_eq!(a.as_bytes(), b.as_bytes());
    }
}
