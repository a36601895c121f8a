use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::ContactInfo;

use crate::common;

const VALID_BODY: &str =
    "name=Jane+Doe&email=jane%40example.com&phone=&subject=Hello&message=Hi+there&bot-field=";

#[tokio::test]
async fn test_clean_submission_redirects_to_thanks() {
    let app = common::test_app(ContactInfo::default());

    let res = common::post_form(&app, "/api/contact", VALID_BODY).await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location.as_deref(), Some("/thanks"));
}

#[tokio::test]
async fn test_honeypot_submission_gets_same_redirect() {
    let app = common::test_app(ContactInfo::default());
    let body = VALID_BODY.replace("bot-field=", "bot-field=http%3A%2F%2Fspam.example");

    let res = common::post_form(&app, "/api/contact", &body).await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location.as_deref(), Some("/thanks"));
}

#[tokio::test]
async fn test_redirect_follows_configured_thanks_path() {
    let app = common::test_app(ContactInfo {
        thanks_path: "/contact/done".to_string(),
        ..ContactInfo::default()
    });

    let res = common::post_form(&app, "/api/contact", VALID_BODY).await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location.as_deref(), Some("/contact/done"));
}

#[tokio::test]
async fn test_missing_fields_default_to_empty() {
    // No server-side field validation: an empty form is still accepted.
    let app = common::test_app(ContactInfo::default());

    let res = common::post_form(&app, "/api/contact", "").await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_wrong_content_type_is_bad_request() {
    let app = common::test_app(ContactInfo::default());

    let res = common::post_with_type(&app, "/api/contact", "application/json", "{}").await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["kind"], "BadRequest");
    assert!(res.location.is_none());
}

#[tokio::test]
async fn test_get_is_not_allowed() {
    let app = common::test_app(ContactInfo::default());

    let res = common::get(&app, "/api/contact").await;

    assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
}
