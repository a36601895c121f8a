use dioxus::prelude::*;
use shared_types::ContactInfo;

use crate::components::contact_form::ContactForm;

/// Landing page hosting the contact form.
#[component]
pub fn Contact() -> Element {
    let info = use_context::<ContactInfo>();

    rsx! {
        main { class: "contact-page",
            h1 { "Get in touch" }
            p { class: "contact-intro",
                "Send us a message and we'll get back to you as soon as we can."
            }
            ContactForm { info }
        }
    }
}
