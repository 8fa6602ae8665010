use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    window, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

pub const REVEAL_SELECTOR: &str = ".service-card, .feature, .testimonial-card, .contact-method";
const REVEAL_ANIMATION: &str = "fadeInUp 0.6s ease forwards";

/// Element id an in-page link points at. `#` alone and external links have none.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scrolls to the element behind an in-page link. Returns false when
/// there is no such element, leaving the click to the browser.
pub fn smooth_scroll_to(href: &str) -> bool {
    let target = anchor_target(href).and_then(|id| {
        window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
    });
    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

pub fn mark_body_loaded() {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        if let Err(e) = body.style().set_property("opacity", "1") {
            log::warn!("Could not show page body: {:?}", e);
        }
    }
}

/// Fades page sections in the first time they scroll into view.
pub struct RevealOnScroll {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealOnScroll {
    pub fn start() -> Option<Self> {
        let document = window()?.document()?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(el) = target.dyn_ref::<HtmlElement>() {
                        if let Err(e) = el.style().set_property("animation", REVEAL_ANIMATION) {
                            log::warn!("Could not start reveal animation: {:?}", e);
                        }
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(0.1));
        init.set_root_margin("0px 0px -50px 0px");
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("Scroll animations disabled: {:?}", e);
                return None;
            }
        };

        if let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) {
            for i in 0..nodes.length() {
                if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    if let Err(e) = el.style().set_property("opacity", "0") {
                        log::warn!("Could not hide section before reveal: {:?}", e);
                    }
                    observer.observe(&el);
                }
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealOnScroll {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
