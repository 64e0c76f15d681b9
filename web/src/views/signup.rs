//! Sign-up page view, the link target from the sign-in form.

use dioxus::prelude::*;

use crate::Route;

/// Sign-up page component.
#[component]
pub fn Signup() -> Element {
    rsx! {
        div {
            class: "signin-page",

            div {
                class: "signin-card",

                h1 { "Sign up" }
                p { "Accounts are provisioned by your administrator." }

                p {
                    class: "signin-footer",
                    "Already have an account? "
                    Link { to: Route::Signin {}, "Sign in" }
                }
            }
        }
    }
}
