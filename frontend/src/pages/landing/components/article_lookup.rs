use crate::components::common::{ButtonVariant, LinkButton};
use leptos::*;
use rust_i18n::t;
use web_sys::HtmlInputElement;

#[component]
pub fn ArticleLookup(
    article_id: Signal<String>,
    view_href: Signal<String>,
    on_article_id_input: Callback<String>,
) -> impl IntoView {
    let placeholder = t!("landing.article_id_placeholder").to_string();

    view! {
        <div class="flex w-full flex-col gap-2">
            <label for="article-id" class="text-sm font-medium text-fg-muted">
                {t!("landing.article_id_label").to_string()}
            </label>
            <input
                id="article-id"
                name="article_id"
                type="text"
                class="block w-full rounded-md border border-border-strong bg-surface px-3 py-2 text-fg placeholder-fg-muted focus:border-action-primary-bg focus:outline-none focus:ring-1 focus:ring-action-primary-bg"
                placeholder=placeholder
                value=move || article_id.get()
                prop:value=move || article_id.get()
                on:input=move |ev| {
                    let target = event_target::<HtmlInputElement>(&ev);
                    on_article_id_input.call(target.value());
                }
            />
            <LinkButton
                href=view_href
                variant=ButtonVariant::Outline
                icon="fa-eye"
                block=true
            >
                {t!("landing.view_article").to_string()}
            </LinkButton>
        </div>
    }
}
