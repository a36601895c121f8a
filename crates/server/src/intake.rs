use axum::{
    extract::{rejection::FormRejection, State},
    response::Redirect,
    routing::post,
    Form, Router,
};
use shared_types::{AppError, ContactInfo, FieldState, DEFAULT_CONTACT_URL};

/// Route the bundled intake endpoint listens on.
pub const INTAKE_PATH: &str = DEFAULT_CONTACT_URL;

/// What happens to a posted contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Accepted,
    /// Honeypot was filled; dropped without telling the sender.
    Discarded,
}

/// Decide whether a submission came from a person. Only the honeypot is
/// checked here; field rules run on the client.
pub fn triage(submission: &FieldState) -> Disposition {
    if submission.is_honeypot_tripped() {
        Disposition::Discarded
    } else {
        Disposition::Accepted
    }
}

/// Router for the contact intake endpoint, ready to merge into the app
/// router.
pub fn intake_router(info: ContactInfo) -> Router {
    Router::new()
        .route(INTAKE_PATH, post(receive_contact))
        .with_state(info)
}

/// Accept a url-encoded contact form post.
///
/// Honeypot hits get the same redirect as real submissions so automated
/// senders cannot tell they were dropped.
#[tracing::instrument(skip_all)]
pub async fn receive_contact(
    State(info): State<ContactInfo>,
    form: Result<Form<FieldState>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(submission) = form.map_err(|e| {
        tracing::warn!(error = %e, "rejected malformed contact submission");
        AppError::bad_request(e.body_text())
    })?;

    match triage(&submission) {
        Disposition::Discarded => {
            tracing::warn!(
                bot_field_len = submission.bot_field.len(),
                "discarding contact submission with filled honeypot"
            );
        }
        Disposition::Accepted => {
            tracing::info!(
                name = %submission.name,
                email = %submission.email,
                subject = %submission.subject,
                has_phone = !submission.phone.is_empty(),
                message_len = submission.message.len(),
                "contact submission received"
            );
        }
    }

    Ok(Redirect::to(&info.thanks_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ContactField;

    #[test]
    fn clean_submission_is_accepted() {
        let submission = FieldState::default().with_field(ContactField::Name, "Jane");
        assert_eq!(triage(&submission), Disposition::Accepted);
    }

    #[test]
    fn filled_honeypot_is_discarded() {
        let submission = FieldState::default().with_field(ContactField::BotField, "x");
        assert_eq!(triage(&submission), Disposition::Discarded);
    }

    #[test]
    fn honeypot_check_ignores_field_validity() {
        // Invalid fields are not the server's concern.
        let submission = FieldState::default().with_field(ContactField::Email, "nope");
        assert_eq!(triage(&submission), Disposition::Accepted);
    }
}
