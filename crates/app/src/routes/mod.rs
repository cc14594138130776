pub mod auth_layout;
pub mod auth_pending;
pub mod not_found;

use dioxus::prelude::*;

use auth_layout::AuthLayout;
use auth_pending::AuthPending;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::AuthPending {})]
    #[layout(AuthLayout)]
    #[route("/auth")]
    AuthPending {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
