use crate::pages::landing::{
    components::{article_lookup::ArticleLookup, navigation::NavigationButtons},
    layout::LandingFrame,
    view_model::use_landing_view_model,
};
use leptos::*;
use rust_i18n::t;

#[component]
pub fn LandingPage() -> impl IntoView {
    let vm = use_landing_view_model();
    let on_article_id_input = Callback::new(move |value: String| vm.set_article_id(value));

    view! {
        <LandingFrame variant=vm.style padding=vm.padding>
            <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">
                {t!("app.title").to_string()}
            </h1>
            <NavigationButtons />
            <ArticleLookup
                article_id={vm.article_id.into()}
                view_href={vm.view_href}
                on_article_id_input=on_article_id_input
            />
        </LandingFrame>
    }
}
