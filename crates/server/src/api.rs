use dioxus::prelude::*;
use shared_types::ContactInfo;

/// Where the contact form posts and whether to emit Netlify attributes.
/// No auth required; the values end up in public markup anyway.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_contact_info() -> Result<ContactInfo, ServerFnError> {
    Ok(crate::config::contact_info().clone())
}
