pub mod contact;
pub mod not_found;
pub mod thanks;

use dioxus::prelude::*;

use contact::Contact;
use not_found::NotFound;
use thanks::Thanks;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Contact {},
    #[route("/thanks")]
    Thanks {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
