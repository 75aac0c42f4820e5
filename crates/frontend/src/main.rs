mod api;
mod components;
mod config;
mod dates;
mod pages;
mod session;

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::top_bar::TopBar;
use crate::config::AppConfig;
use crate::session::{BrowserSessionStore, Session};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[layout(Shell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/day/:date")]
        DayView { date: String },
        #[route("/set/:date/:set_id")]
        SetView { date: String, set_id: u32 },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::login::LoginPage {}
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        pages::login::LoginPage {}
    }
}

/// Signed-in chrome around every data page. Without a token the user is
/// sent back to the login form.
#[component]
fn Shell() -> Element {
    let session = use_context::<Session>();
    let nav = navigator();
    let authenticated = session.is_authenticated();

    use_effect(move || {
        if !authenticated {
            tracing::info!("No session token, redirecting to login");
            nav.replace(Route::Login {});
        }
    });

    if !authenticated {
        return rsx! {};
    }

    rsx! {
        TopBar {}
        main { class: "content", Outlet::<Route> {} }
    }
}

#[component]
fn Dashboard() -> Element {
    rsx! {
        pages::dashboard::DashboardPage {}
    }
}

#[component]
fn DayView(date: String) -> Element {
    rsx! {
        pages::day_view::DayPage { date }
    }
}

#[component]
fn SetView(date: String, set_id: u32) -> Element {
    rsx! {
        pages::set_view::SetPage { date, set_id }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page not-found",
            h2 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { class: "btn btn-primary", to: Route::Dashboard {}, "Back to dashboard" }
        }
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    let config = use_context_provider(AppConfig::from_build_env);
    use_context_provider(|| ApiClient::new(&config));
    use_context_provider(|| Session::new(BrowserSessionStore));

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
