use crate::booking::local_log::BookingLog;
use crate::booking::models::{BookingFields, SERVICES};
use crate::booking::submit::{submit_booking, BookingSinks};
use crate::booking::whatsapp::WindowOpener;
use crate::components::notification::{BannerNotifier, FormNotice, Notice, NoticeSequence};
use crate::config;
use crate::utils::dates::{local_today, min_booking_date, submission_timestamp};
use crate::utils::storage::BrowserStorage;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// References to the named booking inputs.
#[derive(Clone, Default)]
struct FieldRefs {
    name: NodeRef,
    phone: NodeRef,
    email: NodeRef,
    service: NodeRef,
    date: NodeRef,
    message: NodeRef,
}

fn field_value(node: &NodeRef) -> String {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = node.cast::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = node.cast::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn collect_fields(refs: &FieldRefs) -> BookingFields {
    BookingFields {
        name: field_value(&refs.name),
        phone: field_value(&refs.phone),
        email: field_value(&refs.email),
        service: field_value(&refs.service),
        date: field_value(&refs.date),
        message: field_value(&refs.message),
    }
}

#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let form_ref = use_node_ref();
    let refs = use_state(FieldRefs::default);
    let notice = use_state(|| None::<Notice>);
    let sequence = use_state(NoticeSequence::default);
    let min_date = use_state(|| min_booking_date(local_today()));

    let onsubmit = {
        let form_ref = form_ref.clone();
        let refs = (*refs).clone();
        let notifier = BannerNotifier::new(notice.clone(), (*sequence).clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fields = collect_fields(&refs);

            let log = BookingLog::new(BrowserStorage, config::get_storage_key());
            let chat_url = config::get_whatsapp_url();
            let sinks = BookingSinks {
                opener: &WindowOpener,
                chat_url: &chat_url,
                log: &log,
            };
            if submit_booking(fields, submission_timestamp(), &sinks, &notifier).is_ok() {
                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }
            }
        })
    };

    html! {
        <form id="bookingForm" class="booking-form" ref={form_ref} {onsubmit} novalidate=true>
            <div class="form-row">
                <div class="form-group">
                    <label for="name">{"الاسم الكامل *"}</label>
                    <input type="text" id="name" name="name" ref={refs.name.clone()} placeholder="أدخل اسمك الكامل" />
                </div>
                <div class="form-group">
                    <label for="phone">{"رقم الهاتف *"}</label>
                    <input type="tel" id="phone" name="phone" ref={refs.phone.clone()} placeholder="09xxxxxxxx" dir="ltr" />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="email">{"البريد الإلكتروني"}</label>
                    <input type="email" id="email" name="email" ref={refs.email.clone()} placeholder="example@email.com" dir="ltr" />
                </div>
                <div class="form-group">
                    <label for="service">{"نوع الخدمة *"}</label>
                    <select id="service" name="service" ref={refs.service.clone()}>
                        <option value="">{"اختر نوع الخدمة"}</option>
                        { for SERVICES.iter().map(|(value, label)| html! {
                            <option value={*value}>{*label}</option>
                        }) }
                    </select>
                </div>
            </div>
            <div class="form-group">
                <label for="date">{"التاريخ المطلوب *"}</label>
                <input type="date" id="date" name="date" ref={refs.date.clone()} min={(*min_date).clone()} />
            </div>
            <div class="form-group">
                <label for="message">{"وصف إضافي"}</label>
                <textarea id="message" name="message" ref={refs.message.clone()} rows="4" placeholder="أخبرنا بأي تفاصيل إضافية عن المكان أو الخدمة"></textarea>
            </div>
            <button type="submit" class="btn btn-primary btn-block">{"احجز الآن"}</button>
            <FormNotice notice={(*notice).clone()} />
        </form>
    }
}
