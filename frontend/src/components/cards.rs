use leptos::*;

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "w-full max-w-sm rounded-lg border border-border-subtle bg-surface-elevated p-6 shadow-md {}",
            class
        )>
            {children()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn card_wraps_children() {
        let html = render_to_string(|| view! { <Card class="space-y-4"><p>"inside"</p></Card> });
        assert!(html.contains("shadow-md"));
        assert!(html.contains("space-y-4"));
        assert!(html.contains("inside"));
    }
}
