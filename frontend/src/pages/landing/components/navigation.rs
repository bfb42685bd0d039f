use crate::{components::common::LinkButton, pages::landing::utils::STATIC_NAV_LINKS};
use leptos::*;
use rust_i18n::t;

#[component]
pub fn NavigationButtons() -> impl IntoView {
    view! {
        <nav class="flex w-full flex-col gap-4">
            {STATIC_NAV_LINKS
                .into_iter()
                .map(|link| {
                    view! {
                        <LinkButton
                            href=link.href
                            variant=link.variant
                            icon=link.icon
                            block=true
                        >
                            {t!(link.label_key).to_string()}
                        </LinkButton>
                    }
                })
                .collect_view()}
        </nav>
    }
}
