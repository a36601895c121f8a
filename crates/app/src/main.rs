use dioxus::prelude::*;
use shared_types::{AppError, ContactInfo};

mod components;
mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let info = server::config::contact_info().clone();

        let router = dioxus::server::router(App)
            .merge(server::intake::intake_router(info))
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch contact settings once and provide via context (defaults on error)
    let info_resource =
        use_server_future(move || async move { server::api::get_contact_info().await })?;

    let info = match info_resource.read().as_ref().cloned() {
        Some(Ok(info)) => info,
        Some(Err(e)) => {
            tracing::warn!(
                error = %AppError::friendly_message(&e.to_string()),
                "contact settings unavailable, using defaults"
            );
            ContactInfo::default()
        }
        None => ContactInfo::default(),
    };

    use_context_provider(|| info);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Contact Us" }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "page-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
