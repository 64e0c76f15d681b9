//! Home page view shown to signed-in users.

use dioxus::prelude::*;
use store::Session;

use crate::views::AppStore;
use crate::Route;

/// Home page component. Visitors without a session are sent to sign in.
#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    let store = use_context::<AppStore>();
    let session = use_hook(|| Session::load(&store));

    let Some(session) = session else {
        nav.replace(Route::Signin {});
        return rsx! {};
    };

    let greeting = match &session.username {
        Some(username) => format!("Welcome back, {username}"),
        None => "Welcome back".to_string(),
    };

    rsx! {
        div {
            class: "home-page",

            h1 { "{greeting}" }
            p { "You are signed in." }
        }
    }
}
