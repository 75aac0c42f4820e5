use dioxus::prelude::*;

use crate::api::{drop_rejected_token, require_token, ApiClient};
use crate::session::Session;
use crate::Route;

#[component]
pub fn TopBar() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<Session>();
    let nav = navigator();

    let user_session = session.clone();
    let user = use_resource(move || {
        let api = api.clone();
        let session = user_session.clone();
        async move {
            let token = require_token(&session)?;
            api.current_user(&token).await
        }
    });

    // A stale token fails here first; clear it so the shell stops
    // treating the session as signed in.
    let expire_session = session.clone();
    use_effect(move || {
        if let Some(Err(e)) = &*user.read() {
            if drop_rejected_token(&expire_session, e) {
                tracing::info!("Session token rejected, returning to login");
                nav.replace(Route::Login {});
            }
        }
    });

    let on_logout = move |_: MouseEvent| {
        session.clear();
        tracing::info!("Logged out");
        nav.replace(Route::Login {});
    };

    let user_block = match &*user.read() {
        Some(Ok(u)) => {
            let name = u.display_name().to_string();
            let email = u.email.clone();
            let is_admin = u.is_admin;
            rsx! {
                div { class: "user-info",
                    span { class: "user-name", "{name}" }
                    if is_admin {
                        span { class: "badge badge-secondary", "Admin" }
                    }
                    if let Some(email) = email {
                        span { class: "user-email", "{email}" }
                    }
                }
            }
        }
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Could not load current user");
            rsx! {}
        }
        None => rsx! {},
    };

    rsx! {
        header { class: "top-bar",
            Link { class: "brand", to: Route::Dashboard {},
                h1 { "Shot Board" }
                span { class: "brand-sub", "10m Air Rifle & Pistol" }
            }
            div { class: "top-bar-actions",
                {user_block}
                button { class: "btn btn-outline", onclick: on_logout, "Log out" }
            }
        }
    }
}
