use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod booking {
    pub mod error;
    pub mod local_log;
    pub mod message;
    pub mod models;
    pub mod submit;
    pub mod validation;
    pub mod whatsapp;
}
mod components {
    pub mod booking_form;
    pub mod notification;
}
mod pages {
    pub mod landing;
}
mod admin {
    pub mod bookings;
}
mod utils {
    pub mod dates;
    pub mod download;
    pub mod page;
    pub mod storage;
}

use admin::bookings::BookingsAdmin;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin/bookings")]
    AdminBookings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Landing /> },
        Route::AdminBookings => html! { <BookingsAdmin /> },
        Route::NotFound => html! {
            <div class="not-found" dir="rtl">
                <h1>{"404"}</h1>
                <p>{"الصفحة غير موجودة"}</p>
                <Link<Route> to={Route::Home}>{"العودة إلى الرئيسية"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                utils::page::mark_body_loaded();
                || ()
            },
            (),
        );
    }

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn print_welcome() {
    use web_sys::console;
    console::log_2(
        &"%c🧹 مرحباً بك في سماسكو لخدمات النظافة".into(),
        &"color: #0099FF; font-size: 20px; font-weight: bold;".into(),
    );
    console::log_2(
        &"%cلأن حياتك تستحق الأفضل".into(),
        &"color: #00CC66; font-size: 16px;".into(),
    );
    console::log_2(
        &"%cلعرض الحجوزات المحفوظة افتح: /admin/bookings".into(),
        &"color: #333; font-size: 12px;".into(),
    );
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    print_welcome();
    yew::Renderer::<App>::new().render();
}
