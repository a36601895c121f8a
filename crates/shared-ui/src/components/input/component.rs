use dioxus::prelude::*;

/// A labelled single-line input with an inline error slot.
///
/// `name` doubles as the element id so the label's `for` points at it.
/// `error` is rendered below the input when non-empty.
#[component]
pub fn Input(
    name: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default)] error: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{name}", "{label}" }
            }
            input {
                r#type: "{input_type}",
                id: "{name}",
                name: "{name}",
                value: value,
                placeholder: placeholder,
                required: required,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if !error.is_empty() {
                p { class: "error-msg", "{error}" }
            }
        }
    }
}
