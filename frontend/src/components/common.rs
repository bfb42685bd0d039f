use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text border-transparent shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Outline => "bg-surface hover:border-action-primary-bg hover:text-action-primary-bg text-fg border-border-strong",
        }
    }
}

/// Navigation rendered as a button-styled anchor. `rel="external"` keeps the
/// router's click handler off the link so the browser loads `href` itself.
#[component]
pub fn LinkButton(
    #[prop(into)] href: MaybeSignal<String>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] block: bool,
    children: Children,
) -> impl IntoView {
    let width = if block { "w-full" } else { "" };
    view! {
        <a
            href=move || href.get()
            rel="external"
            class=format!(
                "inline-flex items-center justify-center gap-2 rounded-md border px-6 py-3 text-base font-medium transition-colors duration-200 {} {}",
                variant.classes(),
                width
            )
        >
            {icon.map(|icon| view! { <i class=format!("fas {}", icon) aria-hidden="true"></i> })}
            <span>{children()}</span>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_variant_includes_primary_class() {
        let classes = ButtonVariant::Primary.classes();
        assert!(classes.contains("bg-action-primary-bg"));
    }

    #[test]
    fn outline_variant_is_bordered() {
        let classes = ButtonVariant::Outline.classes();
        assert!(classes.contains("border-border-strong"));
        assert!(!classes.contains("text-action-primary-text"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn link_button_renders_anchor_with_icon() {
        let html = render_to_string(|| {
            view! {
                <LinkButton href="/articles/list" icon="fa-book-open" block=true>
                    "文章列表"
                </LinkButton>
            }
        });
        assert!(html.contains("href=\"/articles/list\""));
        assert!(html.contains("rel=\"external\""));
        assert!(html.contains("fa-book-open"));
        assert!(html.contains("w-full"));
        assert!(html.contains("文章列表"));
    }
}
