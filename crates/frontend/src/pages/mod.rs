pub mod dashboard;
pub mod day_view;
pub mod login;
pub mod set_view;

use dioxus::prelude::*;

use crate::api::ApiError;
use crate::session::Session;
use crate::Route;

/// Inline error box for a failed fetch. Auth failures get a sign-in button.
pub fn error_notice(err: &ApiError) -> Element {
    let message = err.to_string();
    let needs_login = err.needs_login();
    tracing::warn!(error = %message, needs_login, "Page fetch failed");

    rsx! {
        ErrorNotice { message, needs_login }
    }
}

#[component]
fn ErrorNotice(message: String, needs_login: bool) -> Element {
    let session = use_context::<Session>();
    let nav = navigator();

    // The stored token is dropped first, otherwise the login page bounces
    // straight back here.
    let on_sign_in = move |_: MouseEvent| {
        session.clear();
        nav.replace(Route::Login {});
    };

    rsx! {
        div { class: "error-notice",
            p { "{message}" }
            if needs_login {
                button { class: "btn btn-outline", onclick: on_sign_in, "Sign in again" }
            }
        }
    }
}

pub fn loading_notice() -> Element {
    rsx! {
        div { class: "loading", "Loading..." }
    }
}
