use crate::booking::models::SERVICES;
use crate::components::booking_form::BookingForm;
use crate::config;
use crate::utils::page::{smooth_scroll_to, RevealOnScroll};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};
use yew::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "الرئيسية"),
    ("#services", "خدماتنا"),
    ("#about", "لماذا نحن"),
    ("#testimonials", "آراء العملاء"),
    ("#booking", "احجز الآن"),
    ("#contact", "تواصل معنا"),
];

// icon and blurb for each entry of SERVICES, same order
const SERVICE_DETAILS: &[(&str, &str)] = &[
    ("fa-house", "تنظيف شامل للمنازل والشقق بشكل أسبوعي أو شهري حسب رغبتك."),
    ("fa-broom", "تنظيف دقيق لكل زاوية يشمل المطابخ والحمامات والنوافذ."),
    ("fa-building", "بيئة عمل نظيفة وصحية لموظفيك وعملائك."),
    ("fa-truck", "نجهز منزلك الجديد أو القديم بعد الانتقال أو أعمال التشطيب."),
    ("fa-couch", "غسيل وتعقيم السجاد والكنب والمفروشات بأحدث المعدات."),
];

const FEATURES: &[(&str, &str, &str)] = &[
    ("fa-user-shield", "فريق موثوق", "عمال مدربون وموثوقون يعملون باحترافية عالية."),
    ("fa-leaf", "مواد آمنة", "نستخدم مواد تنظيف آمنة على الأطفال والحيوانات الأليفة."),
    ("fa-clock", "مواعيد مرنة", "نأتيك في الوقت الذي يناسبك طوال أيام الأسبوع."),
    ("fa-tags", "أسعار مناسبة", "جودة عالية بأسعار واضحة وبدون رسوم مخفية."),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("أم محمد", "خدمة ممتازة والفريق محترم جداً، البيت صار يلمع."),
    ("خالد عثمان", "تعاملت معهم لتنظيف المكتب وكانت النتيجة فوق التوقعات."),
    ("سارة أحمد", "سرعة في الرد ودقة في المواعيد، أنصح بهم بشدة."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let menu_open = use_state_eq(|| false);
    let nav_ref = use_node_ref();
    let hamburger_ref = use_node_ref();

    // Fade sections in as they scroll into view
    {
        use_effect_with_deps(
            move |_| {
                let reveal = RevealOnScroll::start();
                move || drop(reveal)
            },
            (),
        );
    }

    // Close the mobile menu on any click outside of it
    {
        let menu_open = menu_open.clone();
        let nav_ref = nav_ref.clone();
        let hamburger_ref = hamburger_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let listener = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                            let contains = |node: &NodeRef| {
                                node.get()
                                    .map(|n| n.contains(target.as_ref()))
                                    .unwrap_or(false)
                            };
                            if !contains(&nav_ref) && !contains(&hamburger_ref) {
                                menu_open.set(false);
                            }
                        });
                        if let Err(e) = document
                            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                        {
                            log::warn!("Could not watch outside clicks: {:?}", e);
                        }
                        Box::new(move || {
                            if let Err(e) = document.remove_event_listener_with_callback(
                                "click",
                                listener.as_ref().unchecked_ref(),
                            ) {
                                log::warn!("Could not stop watching outside clicks: {:?}", e);
                            }
                        })
                    } else {
                        Box::new(|| ())
                    };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    // Every in-page link scrolls smoothly; menu links also close the menu
    let on_anchor_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            let href = e
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("href"));
            if let Some(href) = href {
                if smooth_scroll_to(&href) {
                    e.prevent_default();
                }
            }
        })
    };

    let whatsapp_url = config::get_whatsapp_url();

    html! {
        <div class="landing-page" dir="rtl">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <nav class="navbar">
                <div class="nav-container">
                    <a href="#home" class="nav-logo" onclick={on_anchor_click.clone()}>{"🧹 سماسكو"}</a>
                    <ul ref={nav_ref} class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li><a href={*href} onclick={on_anchor_click.clone()}>{*label}</a></li>
                        }) }
                    </ul>
                    <div ref={hamburger_ref} class="hamburger" onclick={toggle_menu}>
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </div>
                </div>
            </nav>

            <header id="home" class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"سماسكو لخدمات النظافة"}</h1>
                    <p class="hero-subtitle">{"لأن حياتك تستحق الأفضل"}</p>
                    <div class="hero-cta-group">
                        <a href="#booking" class="btn btn-primary" onclick={on_anchor_click.clone()}>{"احجز خدمتك الآن"}</a>
                        <a href="#services" class="btn btn-secondary" onclick={on_anchor_click.clone()}>{"تعرف على خدماتنا"}</a>
                    </div>
                </div>
            </header>

            <section id="services" class="services">
                <h2 class="section-title">{"خدماتنا"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().zip(SERVICE_DETAILS.iter()).map(|((_, label), (icon, blurb))| html! {
                        <div class="service-card">
                            <i class={classes!("fa-solid", *icon)}></i>
                            <h3>{*label}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="about" class="features">
                <h2 class="section-title">{"لماذا تختار سماسكو؟"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(icon, title, text)| html! {
                        <div class="feature">
                            <i class={classes!("fa-solid", *icon)}></i>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <h2 class="section-title">{"آراء عملائنا"}</h2>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|(who, quote)| html! {
                        <div class="testimonial-card">
                            <p class="testimonial-text">{format!("«{}»", quote)}</p>
                            <span class="testimonial-author">{*who}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section id="booking" class="booking">
                <h2 class="section-title">{"احجز خدمتك"}</h2>
                <p class="section-subtitle">{"املأ النموذج وسيتواصل معك فريقنا لتأكيد الموعد"}</p>
                <BookingForm />
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title">{"تواصل معنا"}</h2>
                <div class="contact-grid">
                    <a class="contact-method" href={whatsapp_url} target="_blank" rel="noopener noreferrer">
                        <i class="fa-brands fa-whatsapp"></i>
                        <span>{"واتساب"}</span>
                    </a>
                    <div class="contact-method">
                        <i class="fa-solid fa-clock"></i>
                        <span>{"يومياً من 8 صباحاً حتى 8 مساءً"}</span>
                    </div>
                    <div class="contact-method">
                        <i class="fa-solid fa-location-dot"></i>
                        <span>{"الخرطوم، السودان"}</span>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <p>{"© سماسكو لخدمات النظافة. جميع الحقوق محفوظة."}</p>
            </footer>
        </div>
    }
}
