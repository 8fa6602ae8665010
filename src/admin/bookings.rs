use crate::booking::error::SinkError;
use crate::booking::local_log::BookingLog;
use crate::booking::models::{service_label, BookingRecord};
use crate::config;
use crate::utils::download::download_json;
use crate::utils::storage::{BrowserStorage, KeyValueStore};
use yew::prelude::*;

/// Owner-facing operations on the locally stored bookings.
pub struct BookingAdmin<S> {
    log: BookingLog<S>,
}

impl<S: KeyValueStore> BookingAdmin<S> {
    pub fn new(log: BookingLog<S>) -> Self {
        Self { log }
    }

    pub fn view_bookings(&self) -> Result<Vec<BookingRecord>, SinkError> {
        self.log.load()
    }

    pub fn clear_bookings(&self) -> Result<(), SinkError> {
        self.log.clear()?;
        log::info!("تم حذف جميع الحجوزات");
        Ok(())
    }

    /// All bookings as indented JSON, the content of the export file.
    pub fn export_json(&self) -> Result<String, SinkError> {
        Ok(serde_json::to_string_pretty(&self.view_bookings()?)?)
    }

    pub fn export_bookings(&self) -> Result<(), SinkError> {
        download_json(config::EXPORT_FILE_NAME, &self.export_json()?)?;
        log::info!("تم تحميل الحجوزات");
        Ok(())
    }
}

fn browser_admin() -> BookingAdmin<BrowserStorage> {
    BookingAdmin::new(BookingLog::new(BrowserStorage, config::get_storage_key()))
}

#[function_component(BookingsAdmin)]
pub fn bookings_admin() -> Html {
    // A read failure still renders the page, with an empty table and the error
    let initial = use_state(|| match browser_admin().view_bookings() {
        Ok(bookings) => (bookings, None),
        Err(e) => {
            log::error!("Failed to read bookings: {}", e);
            (Vec::new(), Some(e.to_string()))
        }
    });
    let bookings = use_state(|| initial.0.clone());
    let error = use_state(|| initial.1.clone());

    let on_clear = {
        let bookings = bookings.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("حذف جميع الحجوزات؟").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            match browser_admin().clear_bookings() {
                Ok(()) => {
                    bookings.set(Vec::new());
                    error.set(None);
                }
                Err(e) => {
                    log::error!("{}", e);
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    let on_export = {
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = browser_admin().export_bookings() {
                log::error!("{}", e);
                error.set(Some(e.to_string()));
            }
        })
    };

    html! {
        <div class="admin-page" dir="rtl">
            <h1>{"الحجوزات المحفوظة"}</h1>
            <p class="admin-count">{format!("عدد الحجوزات: {}", bookings.len())}</p>
            <div class="admin-actions">
                <button class="btn btn-primary" onclick={on_export}>{"تحميل الحجوزات (JSON)"}</button>
                <button class="btn btn-danger" onclick={on_clear} disabled={bookings.is_empty()}>{"حذف جميع الحجوزات"}</button>
            </div>
            if let Some(err) = (*error).as_ref() {
                <p class="form-message error" style="display: block;">{err}</p>
            }
            if bookings.is_empty() {
                <p class="admin-empty">{"لا توجد حجوزات"}</p>
            } else {
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>{"#"}</th>
                            <th>{"الاسم"}</th>
                            <th>{"رقم الهاتف"}</th>
                            <th>{"البريد الإلكتروني"}</th>
                            <th>{"نوع الخدمة"}</th>
                            <th>{"التاريخ"}</th>
                            <th>{"وصف إضافي"}</th>
                            <th>{"الوقت"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for bookings.iter().enumerate().map(|(i, b)| html! {
                            <tr>
                                <td>{(i + 1).to_string()}</td>
                                <td>{&b.name}</td>
                                <td><a href={format!("tel:{}", b.phone)}>{&b.phone}</a></td>
                                <td>{&b.email}</td>
                                <td>{service_label(&b.service).unwrap_or(&b.service)}</td>
                                <td>{&b.date}</td>
                                <td>{&b.message}</td>
                                <td>{&b.timestamp}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
