use dioxus::prelude::*;
use shared_types::{ContactInfo, FieldChange, FormController, SubmitEvent, SubmitOutcome};
use shared_ui::components::{ContactFormView, CONTACT_FORM_ID};

/// The browser's submit event seen through the controller's
/// [`SubmitEvent`] capability.
struct DomSubmit<'a> {
    event: &'a FormEvent,
}

impl SubmitEvent for DomSubmit<'_> {
    fn prevent_native_action(&self) {
        self.event.prevent_default();
    }

    fn submit_native(&self) {
        // HTMLFormElement.submit() does not fire onsubmit again.
        document::eval(&format!(
            "document.getElementById('{CONTACT_FORM_ID}')?.submit();"
        ));
    }
}

/// Stateful contact form: owns a [`FormController`] and renders it through
/// [`ContactFormView`].
#[component]
pub fn ContactForm(info: ContactInfo) -> Element {
    let mut controller = use_signal(|| FormController::new(info.clone()));

    let on_change = move |change: FieldChange| controller.write().on_field_change(change);

    let on_submit = move |evt: FormEvent| {
        let outcome = controller.write().on_submit(&DomSubmit { event: &evt });
        match outcome {
            SubmitOutcome::Submitted => tracing::info!("contact form valid, submitting"),
            SubmitOutcome::Rejected => tracing::debug!(
                errors = controller.read().errors().len(),
                "contact form rejected"
            ),
        }
    };

    let current = controller.read();

    rsx! {
        ContactFormView {
            state: current.state().clone(),
            errors: current.errors().clone(),
            info: current.info().clone(),
            on_change,
            on_submit,
        }
    }
}
