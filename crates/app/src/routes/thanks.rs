use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Thanks() -> Element {
    rsx! {
        main { class: "thanks-page",
            h1 { "Thanks for reaching out" }
            p { "Your message is on its way. We'll reply by email." }
            Link { to: Route::Contact {}, class: "back-link", "Send another message" }
        }
    }
}
