use crate::auth::{use_api, use_auth};
use crate::routes::dashboard_route;
use api_client::authenticate;
use dioxus::prelude::*;
use shared_ui::{Banner, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

/// Email/password sign-in.
///
/// Failures show in a banner that clears itself after five seconds. On
/// success the session is stored and the user lands on their role's
/// dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            if loading() {
                return;
            }
            loading.set(true);
            error_msg.set(None);

            let outcome = match authenticate(&api, &email(), &password()).await {
                Ok(data) => {
                    let role = data.user.role();
                    auth.set_credentials(data).map(|()| role)
                }
                Err(e) => Err(e),
            };
            match outcome {
                Ok(role) => {
                    navigator().replace(dashboard_route(role));
                }
                Err(e) => {
                    tracing::debug!(kind = %e.kind, "login rejected");
                    error_msg.set(Some(e.message));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    div {
                        CardTitle { "Welcome Back" }
                        CardDescription { "Sign in to your account" }
                    }
                }

                CardContent {
                    Banner { message: error_msg }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            id: "email",
                            label: "Email Address",
                            input_type: "email",
                            placeholder: "Enter your email",
                            value: email(),
                            disabled: loading(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Input {
                            id: "password",
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            disabled: loading(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            loading_label: "Signing in...",
                            "Sign In"
                        }
                    }
                }
            }
        }
    }
}
