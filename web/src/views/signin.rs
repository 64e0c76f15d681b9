//! Sign-in page view with email/password form.

use api::{AuthClient, AuthConfig};
use dioxus::prelude::*;
use store::Session;
use ui::components::{Button, ButtonVariant, Input};
use ui::{authenticate, Field, SigninFlow};

use crate::views::AppStore;
use crate::Route;

/// Sign-in page component.
#[component]
pub fn Signin() -> Element {
    let nav = use_navigator();
    let store = use_context::<AppStore>();
    let client = use_hook(|| AuthClient::new(AuthConfig::default()));
    let mut flow = use_signal(SigninFlow::new);

    // An existing token sends the visitor straight home; the form is not
    // shown to an already-authenticated user. Presence check only; whether
    // the token is still good is the server's call. Checked once per view
    // activation, not on every field edit.
    let authenticated = use_hook(|| Session::load(&store).is_some());
    if authenticated {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(credentials) = flow.write().begin_submit() else {
            return;
        };
        let store = store.clone();
        let client = client.clone();
        spawn(async move {
            let result = authenticate(&client, &store, &credentials).await;
            let session = flow.write().complete(result);
            if session.is_some() {
                nav.replace(Route::Home {});
            }
        });
    };

    let error = flow.read().error().map(String::from);
    let email = flow.read().form().email.clone();
    let password = flow.read().form().password.clone();
    let submitting = flow.read().is_submitting();

    rsx! {
        div {
            class: "signin-page",

            div {
                class: "signin-card",

                h1 { "Sign in" }

                if let Some(err) = error {
                    p { class: "signin-error", "{err}" }
                }

                form {
                    onsubmit: handle_submit,

                    Input {
                        id: "email",
                        r#type: "email",
                        placeholder: "Email",
                        value: email,
                        oninput: move |evt: FormEvent| flow.write().edit(Field::Email, evt.value()),
                    }

                    Input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Password",
                        value: password,
                        oninput: move |evt: FormEvent| flow.write().edit(Field::Password, evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "signin-footer",
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
