use dioxus::prelude::*;

/// Visual variant for textareas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TextareaVariant {
    #[default]
    Default,
    Outline,
}

impl TextareaVariant {
    fn class(&self) -> &'static str {
        match self {
            TextareaVariant::Default => "default",
            TextareaVariant::Outline => "outline",
        }
    }
}

/// A labelled multi-line input with an inline error slot.
#[component]
pub fn Textarea(
    name: String,
    #[props(default)] variant: TextareaVariant,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 7)] rows: u32,
    #[props(default = false)] required: bool,
    #[props(default)] error: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "textarea", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label", r#for: "{name}", "{label}" }
            }
            textarea {
                id: "{name}",
                name: "{name}",
                rows: "{rows}",
                value: value,
                placeholder: placeholder,
                required: required,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if !error.is_empty() {
                div { class: "error-msg", "{error}" }
            }
        }
    }
}
