use crate::config::NOTICE_HIDE_DELAY_MS;
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
    pub kind: NoticeKind,
}

/// Shows short feedback to the visitor.
pub trait Notifier {
    fn notify(&self, text: &str, kind: NoticeKind);

    fn success(&self, text: &str) {
        self.notify(text, NoticeKind::Success);
    }

    fn error(&self, text: &str) {
        self.notify(text, NoticeKind::Error);
    }
}

/// Hands out notice ids and remembers which one is on screen, so an old
/// hide timer leaves a newer notice alone.
#[derive(Debug, Default, Clone)]
pub struct NoticeSequence {
    latest: Rc<Cell<u64>>,
}

impl NoticeSequence {
    pub fn next(&self) -> u64 {
        let id = self.latest.get() + 1;
        self.latest.set(id);
        id
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest.get() == id
    }
}

/// A notice about to be shown, with the delay after which it should go away.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledNotice {
    pub notice: Notice,
    pub hide_after_ms: u32,
}

pub fn schedule_notice(sequence: &NoticeSequence, text: &str, kind: NoticeKind) -> ScheduledNotice {
    ScheduledNotice {
        notice: Notice {
            id: sequence.next(),
            text: text.to_string(),
            kind,
        },
        hide_after_ms: NOTICE_HIDE_DELAY_MS,
    }
}

/// Whether the hide timer for notice `id` may clear the banner.
pub fn should_hide(sequence: &NoticeSequence, id: u64) -> bool {
    sequence.is_current(id)
}

/// Notifier backed by component state. Each notice hides itself after
/// `NOTICE_HIDE_DELAY_MS`.
#[derive(Clone)]
pub struct BannerNotifier {
    notice: UseStateHandle<Option<Notice>>,
    sequence: NoticeSequence,
}

impl BannerNotifier {
    pub fn new(notice: UseStateHandle<Option<Notice>>, sequence: NoticeSequence) -> Self {
        Self { notice, sequence }
    }
}

impl Notifier for BannerNotifier {
    fn notify(&self, text: &str, kind: NoticeKind) {
        let scheduled = schedule_notice(&self.sequence, text, kind);
        let id = scheduled.notice.id;
        self.notice.set(Some(scheduled.notice));

        let notice = self.notice.clone();
        let sequence = self.sequence.clone();
        let timeout = Timeout::new(scheduled.hide_after_ms, move || {
            if should_hide(&sequence, id) {
                notice.set(None);
            }
        });
        timeout.forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct FormNoticeProps {
    pub notice: Option<Notice>,
}

#[function_component(FormNotice)]
pub fn form_notice(props: &FormNoticeProps) -> Html {
    match &props.notice {
        Some(notice) => html! {
            <div id="formMessage" class={classes!("form-message", notice.kind.css_class())} style="display: block;">
                {&notice.text}
            </div>
        },
        None => html! {
            <div id="formMessage" class="form-message" style="display: none;"></div>
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_hide_after_five_seconds() {
        let sequence = NoticeSequence::default();
        let scheduled = schedule_notice(&sequence, "تم", NoticeKind::Success);
        assert_eq!(scheduled.hide_after_ms, 5_000);
        assert_eq!(scheduled.notice.text, "تم");
        assert_eq!(scheduled.notice.kind, NoticeKind::Success);
    }

    #[test]
    fn stale_timer_does_not_hide_newer_notice() {
        let sequence = NoticeSequence::default();
        let first = schedule_notice(&sequence, "أول", NoticeKind::Error);
        let second = schedule_notice(&sequence, "ثاني", NoticeKind::Success);

        assert!(!should_hide(&sequence, first.notice.id));
        assert!(should_hide(&sequence, second.notice.id));
    }

    #[test]
    fn lone_notice_is_hidden_by_its_timer() {
        let sequence = NoticeSequence::default();
        let only = schedule_notice(&sequence, "خطأ", NoticeKind::Error);
        assert!(should_hide(&sequence, only.notice.id));
    }

    #[test]
    fn clones_share_the_same_counter() {
        let sequence = NoticeSequence::default();
        let handle = sequence.clone();
        let id = sequence.next();
        assert!(handle.is_current(id));
    }

    #[test]
    fn kinds_map_to_banner_classes() {
        assert_eq!(NoticeKind::Success.css_class(), "success");
        assert_eq!(NoticeKind::Error.css_class(), "error");
    }
}
