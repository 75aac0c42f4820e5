use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::session::Session;
use crate::Route;

/// Client-side check before hitting the token endpoint.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        return Err("Username is required");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<Session>();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let already_signed_in = session.is_authenticated();
    use_effect(move || {
        if already_signed_in {
            nav.replace(Route::Dashboard {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let user = username.read().trim().to_string();
        let pass = password.read().clone();
        if let Err(msg) = validate_credentials(&user, &pass) {
            error.set(Some(msg.to_string()));
            return;
        }

        let api = api.clone();
        let session = session.clone();
        let remember = *remember.read();
        error.set(None);
        loading.set(true);
        spawn(async move {
            match api.login(&user, &pass).await {
                Ok(token) => {
                    session.save(&token.access_token, remember);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    let busy = *loading.read();

    rsx! {
        div { class: "login-page",
            form { class: "login-card", onsubmit: on_submit,
                h1 { "Shot Board" }
                p { class: "muted", "Sign in to track your shooting progress" }

                if let Some(msg) = error.read().clone() {
                    div { class: "error-notice", "{msg}" }
                }

                label { r#for: "username", "Username" }
                input {
                    id: "username",
                    r#type: "text",
                    autocomplete: "username",
                    placeholder: "Enter your username",
                    value: "{username}",
                    oninput: move |evt: Event<FormData>| username.set(evt.value()),
                }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    autocomplete: "current-password",
                    placeholder: "Enter your password",
                    value: "{password}",
                    oninput: move |evt: Event<FormData>| password.set(evt.value()),
                }

                label { class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: *remember.read(),
                        onchange: move |evt: Event<FormData>| remember.set(evt.checked()),
                    }
                    "Remember me"
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("marksman", "hunter2").is_ok());
        assert_eq!(validate_credentials("  ", "x"), Err("Username is required"));
        assert_eq!(validate_credentials("marksman", ""), Err("Password is required"));
    }
}
