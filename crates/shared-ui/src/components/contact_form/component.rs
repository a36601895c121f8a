use dioxus::prelude::*;
use shared_types::{ContactField, ContactInfo, ErrorMap, FieldChange, FieldState, HONEYPOT_FIELD_NAME};

use crate::components::{Button, ButtonVariant, Input, Textarea};

/// `id` and `name` of the rendered form element.
pub const CONTACT_FORM_ID: &str = "contact-us";

/// Render-only contact form.
///
/// A deterministic function of its props: no state, no validation. Every
/// input is forwarded to `on_change` as a [`FieldChange`] and the submit
/// event goes to `on_submit` untouched. Netlify attributes and the honeypot
/// input appear only when `info.is_netlify` is set.
#[component]
pub fn ContactFormView(
    state: FieldState,
    errors: ErrorMap,
    info: ContactInfo,
    on_change: EventHandler<FieldChange>,
    on_submit: EventHandler<FormEvent>,
) -> Element {
    let mut vendor = Vec::new();
    if info.is_netlify {
        vendor.push(Attribute::new("data-netlify", "true", None, false));
        vendor.push(Attribute::new(
            "data-netlify-honeypot",
            HONEYPOT_FIELD_NAME,
            None,
            false,
        ));
    }

    let forward = move |field: ContactField| {
        move |evt: FormEvent| on_change.call(FieldChange::new(field, evt.value()))
    };
    let error_for = |field: ContactField| errors.get(field).unwrap_or_default().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            class: "contact-form",
            id: CONTACT_FORM_ID,
            name: CONTACT_FORM_ID,
            action: "{info.url}",
            method: "post",
            onsubmit: move |evt| on_submit.call(evt),
            ..vendor,

            if info.is_netlify {
                p { class: "hidden",
                    label {
                        "Don’t fill this out if you’re human: "
                        input {
                            name: HONEYPOT_FIELD_NAME,
                            value: state.bot_field.clone(),
                            tabindex: "-1",
                            autocomplete: "off",
                            oninput: forward(ContactField::BotField),
                        }
                    }
                }
            }

            Input {
                label: "Name",
                name: "name",
                value: state.name.clone(),
                required: true,
                error: error_for(ContactField::Name),
                on_input: forward(ContactField::Name),
            }
            Input {
                label: "Email",
                name: "email",
                input_type: "email",
                value: state.email.clone(),
                required: true,
                error: error_for(ContactField::Email),
                on_input: forward(ContactField::Email),
            }
            Input {
                label: "Phone",
                name: "phone",
                input_type: "tel",
                value: state.phone.clone(),
                error: error_for(ContactField::Phone),
                on_input: forward(ContactField::Phone),
            }
            Input {
                label: "Subject",
                name: "subject",
                value: state.subject.clone(),
                required: true,
                error: error_for(ContactField::Subject),
                on_input: forward(ContactField::Subject),
            }
            Textarea {
                label: "Message",
                name: "message",
                rows: 7,
                value: state.message.clone(),
                required: true,
                error: error_for(ContactField::Message),
                on_input: forward(ContactField::Message),
            }

            Button { button_type: "submit", variant: ButtonVariant::Pill,
                b { "Send Message" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{validate, VISIBLE_FIELDS};

    #[component]
    fn Harness(state: FieldState, errors: ErrorMap, info: ContactInfo) -> Element {
        rsx! {
            ContactFormView {
                state,
                errors,
                info,
                on_change: move |_: FieldChange| {},
                on_submit: move |_: FormEvent| {},
            }
        }
    }

    fn render(state: FieldState, errors: ErrorMap, info: ContactInfo) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { state, errors, info });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn netlify() -> ContactInfo {
        ContactInfo {
            url: "/success".to_string(),
            is_netlify: true,
            ..ContactInfo::default()
        }
    }

    #[test]
    fn honeypot_rendered_with_vendor_flag() {
        let html = render(FieldState::default(), ErrorMap::default(), netlify());
        assert!(html.contains(r#"name="bot-field""#));
        assert!(html.contains(r#"data-netlify="true""#));
        assert!(html.contains(r#"data-netlify-honeypot="bot-field""#));
    }

    #[test]
    fn no_honeypot_or_vendor_attributes_without_flag() {
        let html = render(FieldState::default(), ErrorMap::default(), ContactInfo::default());
        assert!(!html.contains("bot-field"));
        assert!(!html.contains("data-netlify"));
    }

    #[test]
    fn form_targets_configured_url() {
        let html = render(FieldState::default(), ErrorMap::default(), netlify());
        assert!(html.contains(r#"action="/success""#));
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"id="contact-us""#));
    }

    #[test]
    fn emits_load_bearing_field_names() {
        let html = render(FieldState::default(), ErrorMap::default(), ContactInfo::default());
        for field in VISIBLE_FIELDS {
            let attr = format!(r#"name="{}""#, field.as_str());
            assert!(html.contains(&attr), "missing {attr}");
        }
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"type="tel""#));
        assert!(html.contains("<textarea"));
        assert!(html.contains("Send Message"));
    }

    #[test]
    fn no_error_messages_without_errors() {
        let html = render(FieldState::default(), ErrorMap::default(), ContactInfo::default());
        assert!(!html.contains("error-msg"));
    }

    #[test]
    fn renders_each_error_inline() {
        let report = validate(&FieldState::default());
        let html = render(FieldState::default(), report.errors.clone(), ContactInfo::default());
        for (_, msg) in report.errors.iter() {
            assert!(html.contains(msg), "missing {msg}");
        }
        assert_eq!(html.matches("error-msg").count(), 4);
        assert!(!html.contains("phone number does not appear"));
    }

    #[test]
    fn reflects_current_values() {
        let state = FieldState::default().with_field(ContactField::Name, "Jane Doe");
        let html = render(state, ErrorMap::default(), ContactInfo::default());
        assert!(html.contains("Jane Doe"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = render(FieldState::default(), ErrorMap::default(), netlify());
        let second = render(FieldState::default(), ErrorMap::default(), netlify());
        assert_eq!(first, second);
    }
}
