use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Login, SignUp, Students};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    SignUp {},
    #[route("/students")]
    Students {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the student table; its guard bounces anonymous
/// visitors on to the login page.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Students {});
    rsx! {}
}
