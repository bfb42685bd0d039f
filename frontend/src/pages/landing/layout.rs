use crate::{components::cards::Card, config::LandingStyle, state::viewport::HorizontalPadding};
use leptos::*;

#[component]
pub fn LandingFrame(
    variant: LandingStyle,
    padding: Signal<HorizontalPadding>,
    children: Children,
) -> impl IntoView {
    let body = match variant {
        LandingStyle::Card => view! { <Card class="flex flex-col items-center gap-5">{children()}</Card> }.into_view(),
        LandingStyle::Plain => view! {
            <div class="flex w-full max-w-sm flex-col items-center gap-5">{children()}</div>
        }
        .into_view(),
    };

    view! {
        <div
            class="min-h-screen bg-surface flex flex-col items-center gap-5 py-12"
            style=move || {
                let px = padding.get().as_css();
                format!("padding-left: {}; padding-right: {};", px, px)
            }
        >
            {body}
        </div>
    }
}
