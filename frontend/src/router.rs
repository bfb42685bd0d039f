use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use rust_i18n::t;

use crate::{config::LandingSettings, pages::landing::LandingPage};

pub const ROUTE_PATHS: &[&str] = &["/"];

/// Destinations served by pages outside this app. Their anchors carry
/// `rel="external"`, so `<Router>` leaves the navigation to the browser.
pub const EXTERNAL_ROUTE_PATHS: &[&str] = &[
    crate::pages::landing::utils::LOGIN_PATH,
    crate::pages::landing::utils::ARTICLE_LIST_PATH,
    crate::pages::landing::utils::ARTICLE_EDIT_PATH,
    crate::pages::landing::utils::ARTICLE_VIEW_PATH,
];

pub fn mount_app(settings: LandingSettings) {
    mount_to_body(move || app_root(settings));
}

pub fn app_root(settings: LandingSettings) -> impl IntoView {
    provide_meta_context();
    provide_context(settings);
    let title = t!("app.title").to_string();
    view! {
        <Title text=title/>
        <Router>
            <Routes>
                <Route path="/" view=LandingPage/>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn external_routes_are_stable() {
        assert_eq!(
            EXTERNAL_ROUTE_PATHS,
            &["/users/login", "/articles/list", "/articles/edit", "/articles/view"]
        );
    }

    #[test]
    fn external_routes_do_not_shadow_app_routes() {
        let own: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in EXTERNAL_ROUTE_PATHS {
            assert!(!own.contains(path), "route mounted locally: {}", path);
        }
    }
}
